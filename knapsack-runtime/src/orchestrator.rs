use crate::error::SolveError;
use anyhow::Result;
use knapsack_algorithms::{genetic, heuristic, SolverKind};
use knapsack_challenges::knapsack::{Instance, Solution};
use knapsack_structs::{
    api::{SolveRequest, SolveResponse},
    config::RuntimeConfig,
};
use knapsack_utils::{dejsonify, jsonify, measure};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    panic::{self, AssertUnwindSafe},
};
use tracing::{debug, error, info, warn};

/// Status code and json body, ready for any transport to send back.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Value,
}

impl HttpResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(e: &SolveError) -> Self {
        Self {
            status: e.status_code(),
            body: serde_json::json!({ "error": e.to_response().error }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn to_json(&self) -> String {
        jsonify(&self.body)
    }
}

/// Parses a json request body and solves it. Malformed bodies map to 400,
/// solver failures (including panics) map to 500.
pub fn handle(body: &str, config: &RuntimeConfig) -> HttpResponse {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> Result<Value, SolveError> {
        let request = dejsonify::<SolveRequest>(body).map_err(|e| {
            warn!(error = %e, "failed to parse solve request");
            SolveError::invalid(format!("Invalid request: {}", e))
        })?;
        let response = solve(&request, config)?;
        serde_json::to_value(&response).map_err(|e| {
            error!(error = %e, "failed to serialize solve response");
            SolveError::Internal
        })
    }));

    match outcome {
        Ok(Ok(body)) => HttpResponse::ok(body),
        Ok(Err(e)) => HttpResponse::error(&e),
        Err(_) => {
            error!("solver panicked");
            HttpResponse::error(&SolveError::Internal)
        }
    }
}

/// Runs the requested solvers in order and collects their timed solutions.
pub fn solve(request: &SolveRequest, config: &RuntimeConfig) -> Result<SolveResponse, SolveError> {
    let instance = validate(request, config).map_err(|e| {
        warn!(error = %e, "rejected solve request");
        e
    })?;
    info!(
        num_items = instance.num_items(),
        capacity = instance.capacity,
        solver_type = ?request.solver_type,
        "solving knapsack instance"
    );

    let mut results = BTreeMap::new();
    for kind in request.solver_type.kinds() {
        let (result, elapsed) = measure(|| run_solver(kind, &instance, &results, config));
        let solution = result.map_err(|e| {
            error!(solver = kind.name(), error = %e, "solver failed");
            SolveError::Internal
        })?;
        debug!(
            solver = kind.name(),
            elapsed,
            total_value = solution.total_value,
            total_weight = solution.total_weight,
            "solver finished"
        );
        results.insert(kind, solution.with_solve_time(elapsed));
    }

    Ok(SolveResponse::success(results, instance))
}

/// Builds the instance a request describes, or explains why it cannot.
pub fn validate(request: &SolveRequest, config: &RuntimeConfig) -> Result<Instance, SolveError> {
    let weights = match &request.weights {
        Some(weights) if !weights.is_empty() => weights,
        _ => return Err(SolveError::invalid("weights must be a non-empty array")),
    };
    let values = match &request.values {
        Some(values) if !values.is_empty() => values,
        _ => return Err(SolveError::invalid("values must be a non-empty array")),
    };
    if weights.len() != values.len() {
        return Err(SolveError::invalid(format!(
            "weights ({}) and values ({}) must have the same length",
            weights.len(),
            values.len()
        )));
    }
    let capacity = request
        .capacity
        .ok_or_else(|| SolveError::invalid("capacity must be provided"))?;

    let instance = Instance::new(weights.clone(), values.clone(), capacity)
        .map_err(|e| SolveError::invalid(e.to_string()))?;

    let kinds = request.solver_type.kinds();
    if kinds.contains(&SolverKind::Dp) || kinds.contains(&SolverKind::Ml) {
        match instance.table_cells() {
            Some(cells) if cells <= config.max_table_cells => {}
            _ => {
                return Err(SolveError::invalid(format!(
                    "Instance with {} items and capacity {} exceeds the limit of {} table cells",
                    instance.num_items(),
                    instance.capacity,
                    config.max_table_cells
                )))
            }
        }
    }
    if kinds.contains(&SolverKind::Genetic) {
        genetic::validate(&instance, &config.genetic)
            .map_err(|e| SolveError::invalid(e.to_string()))?;
    }

    Ok(instance)
}

fn run_solver(
    kind: SolverKind,
    instance: &Instance,
    results: &BTreeMap<SolverKind, Solution>,
    config: &RuntimeConfig,
) -> Result<Solution> {
    match (kind, results.get(&SolverKind::Dp)) {
        (SolverKind::Ml, Some(exact)) if config.reuse_exact_solution => {
            let (solution, outcome) = heuristic::solve_with_exact(instance, exact)?;
            debug!(?outcome, "heuristic reused exact solution");
            Ok(solution)
        }
        (SolverKind::Genetic, _) => genetic::solve(instance, &config.genetic),
        _ => kind.solver().solve(instance),
    }
}
