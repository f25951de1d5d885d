use crate::serializable_struct;
use knapsack_algorithms::SolverKind;
use knapsack_challenges::knapsack::{Instance, Solution};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const STATUS_SUCCESS: &str = "success";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SolverType {
    #[default]
    All,
    Dp,
    Greedy,
    Ml,
    Genetic,
}

impl SolverType {
    /// Solvers to run for this request, in execution order.
    pub fn kinds(&self) -> Vec<SolverKind> {
        match self {
            SolverType::All => SolverKind::ALL.to_vec(),
            SolverType::Dp => vec![SolverKind::Dp],
            SolverType::Greedy => vec![SolverKind::Greedy],
            SolverType::Ml => vec![SolverKind::Ml],
            SolverType::Genetic => vec![SolverKind::Genetic],
        }
    }
}

// Every field is optional on the wire so that missing inputs can be reported
// as validation errors rather than parse failures.
serializable_struct! {
    SolveRequest {
        weights: Option<Vec<u64>>,
        values: Option<Vec<u64>>,
        capacity: Option<u64>,
        #[serde(default)]
        solver_type: SolverType,
    }
}

impl SolveRequest {
    pub fn new(instance: &Instance, solver_type: SolverType) -> Self {
        Self {
            weights: Some(instance.weights.clone()),
            values: Some(instance.values.clone()),
            capacity: Some(instance.capacity),
            solver_type,
        }
    }
}

serializable_struct! {
    SolveResponse {
        status: String,
        results: BTreeMap<SolverKind, Solution>,
        request: Option<Instance>,
    }
}

impl SolveResponse {
    pub fn success(results: BTreeMap<SolverKind, Solution>, request: Instance) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            results,
            request: Some(request),
        }
    }
}

serializable_struct! {
    ErrorResponse {
        error: String,
    }
}
