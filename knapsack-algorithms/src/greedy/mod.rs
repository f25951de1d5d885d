use crate::{rank_by_ratio, Solver, SolverKind};
use anyhow::Result;
use knapsack_challenges::knapsack::{Instance, Solution};

/// Takes items in descending value-to-weight order whenever they still fit.
pub struct Greedy;

impl Solver for Greedy {
    fn kind(&self) -> SolverKind {
        SolverKind::Greedy
    }

    fn solve(&self, instance: &Instance) -> Result<Solution> {
        solve(instance)
    }
}

pub fn solve(instance: &Instance) -> Result<Solution> {
    let mut selected_items = Vec::with_capacity(instance.num_items());
    let mut total_weight = 0;
    for item in rank_by_ratio(instance) {
        if total_weight + instance.weights[item] <= instance.capacity {
            total_weight += instance.weights[item];
            selected_items.push(item);
        }
    }
    Ok(Solution::from_items(instance, selected_items))
}
