//! Side-by-side comparison of every solver, on one instance or a whole dataset.

use anyhow::{anyhow, Result};
use knapsack_algorithms::SolverKind;
use knapsack_challenges::knapsack::Instance;
use knapsack_structs::config::RuntimeConfig;
use knapsack_utils::measure;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolverReport {
    pub total_value: u64,
    pub total_weight: u64,
    pub solve_time: f64,
    /// Fraction of the optimal value reached.
    pub relative_performance: f64,
    pub is_feasible: bool,
}

pub type InstanceReport = BTreeMap<SolverKind, SolverReport>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolverSummary {
    pub mean_value: f64,
    pub std_value: f64,
    pub mean_time: f64,
    pub std_time: f64,
    pub feasibility_rate: f64,
    pub relative_performance: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EvaluationSummary {
    pub num_instances: usize,
    pub solvers: BTreeMap<SolverKind, SolverSummary>,
}

/// Runs every solver on `instance`. Instances whose dynamic programming table
/// exceeds `config.max_table_cells` are rejected before any solver runs.
pub fn evaluate_instance(instance: &Instance, config: &RuntimeConfig) -> Result<InstanceReport> {
    instance.validate()?;
    match instance.table_cells() {
        Some(cells) if cells <= config.max_table_cells => {}
        _ => {
            return Err(anyhow!(
                "Instance with {} items and capacity {} exceeds the limit of {} table cells",
                instance.num_items(),
                instance.capacity,
                config.max_table_cells
            ))
        }
    }

    let mut solutions = BTreeMap::new();
    for kind in SolverKind::ALL {
        let (solution, elapsed) = measure(|| kind.solver().solve(instance));
        solutions.insert(kind, (solution?, elapsed));
    }
    let optimal_value = solutions[&SolverKind::Dp].0.total_value;

    Ok(solutions
        .into_iter()
        .map(|(kind, (solution, elapsed))| {
            let report = SolverReport {
                total_value: solution.total_value,
                total_weight: solution.total_weight,
                solve_time: elapsed,
                relative_performance: relative_performance(solution.total_value, optimal_value),
                is_feasible: solution.is_feasible,
            };
            (kind, report)
        })
        .collect())
}

pub fn evaluate_dataset(instances: &[Instance], config: &RuntimeConfig) -> Result<EvaluationSummary> {
    if instances.is_empty() {
        return Err(anyhow!("Dataset is empty"));
    }
    let reports = instances
        .iter()
        .enumerate()
        .map(|(i, instance)| {
            debug!(instance = i, num_items = instance.num_items(), "evaluating");
            evaluate_instance(instance, config).map_err(|e| anyhow!("Instance {}: {}", i, e))
        })
        .collect::<Result<Vec<_>>>()?;

    let solvers = SolverKind::ALL
        .into_iter()
        .map(|kind| {
            let solver_reports: Vec<&SolverReport> =
                reports.iter().map(|report| &report[&kind]).collect();
            (kind, summarize(&solver_reports))
        })
        .collect();

    Ok(EvaluationSummary {
        num_instances: instances.len(),
        solvers,
    })
}

fn summarize(reports: &[&SolverReport]) -> SolverSummary {
    let values: Vec<f64> = reports.iter().map(|r| r.total_value as f64).collect();
    let times: Vec<f64> = reports.iter().map(|r| r.solve_time).collect();
    let relative: Vec<f64> = reports.iter().map(|r| r.relative_performance).collect();
    let num_feasible = reports.iter().filter(|r| r.is_feasible).count();

    SolverSummary {
        mean_value: values.iter().mean(),
        std_value: values.iter().population_std_dev(),
        mean_time: times.iter().mean(),
        std_time: times.iter().population_std_dev(),
        feasibility_rate: num_feasible as f64 / reports.len() as f64,
        relative_performance: relative.iter().mean(),
    }
}

/// `value / optimal_value`, taken as 1.0 when nothing of value can be packed.
pub fn relative_performance(value: u64, optimal_value: u64) -> f64 {
    if optimal_value == 0 {
        1.0
    } else {
        value as f64 / optimal_value as f64
    }
}
