//! The "ml" solver: a deterministic stand-in for a learned model.
//!
//! It aims for the exact optimum while preferring lighter selections. Starting
//! from the greedy answer, it either accepts it (when greedy is already
//! optimal), builds a ratio-ordered selection that reaches the optimal value and
//! then sheds weight by hill climbing, or gives up and returns the exact
//! solution unchanged. It never reports less than the optimal value.

use crate::{dynamic, greedy, rank_by_ratio, Solver, SolverKind};
use anyhow::Result;
use knapsack_challenges::knapsack::{Instance, Solution};

pub struct Heuristic;

impl Solver for Heuristic {
    fn kind(&self) -> SolverKind {
        SolverKind::Ml
    }

    fn solve(&self, instance: &Instance) -> Result<Solution> {
        solve(instance)
    }
}

/// Which branch produced the returned solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Greedy,
    Exact,
    Improved,
}

pub fn solve(instance: &Instance) -> Result<Solution> {
    let exact = dynamic::solve(instance)?;
    let (solution, _) = solve_with_exact(instance, &exact)?;
    Ok(solution)
}

/// Same as [`solve`], reusing an exact solution already computed for `instance`.
pub fn solve_with_exact(instance: &Instance, exact: &Solution) -> Result<(Solution, Outcome)> {
    let optimal_value = exact.total_value;

    let greedy_solution = greedy::solve(instance)?;
    if greedy_solution.total_value == optimal_value {
        return Ok((greedy_solution, Outcome::Greedy));
    }

    let mut selected_items = Vec::with_capacity(instance.num_items());
    let mut total_weight = 0;
    let mut total_value = 0;
    for item in rank_by_ratio(instance) {
        if total_weight + instance.weights[item] <= instance.capacity {
            selected_items.push(item);
            total_weight += instance.weights[item];
            total_value += instance.values[item];
            if total_value >= optimal_value {
                break;
            }
        }
    }

    if total_value < optimal_value {
        let mut fallback = exact.clone();
        fallback.solve_time = None;
        return Ok((fallback, Outcome::Exact));
    }

    let selected_items = improve(instance, selected_items);
    Ok((Solution::from_items(instance, selected_items), Outcome::Improved))
}

/// Hill climbing over single swaps. A selected item is replaced in place by the
/// first unselected item (in index order) that is worth at least as much,
/// weighs strictly less and keeps the selection within capacity. After every
/// swap the scan restarts from the first selected item; it stops once a full
/// scan finds nothing. Each swap strictly lowers the total weight, so this
/// terminates.
pub fn improve(instance: &Instance, mut selected_items: Vec<usize>) -> Vec<usize> {
    let mut is_selected = vec![false; instance.num_items()];
    for &item in &selected_items {
        is_selected[item] = true;
    }
    let mut total_weight = instance.total_weight_of(&selected_items);

    loop {
        match find_swap(instance, &selected_items, &is_selected, total_weight) {
            Some((position, new_item)) => {
                let old_item = selected_items[position];
                total_weight = total_weight - instance.weights[old_item] + instance.weights[new_item];
                is_selected[old_item] = false;
                is_selected[new_item] = true;
                selected_items[position] = new_item;
            }
            None => return selected_items,
        }
    }
}

fn find_swap(
    instance: &Instance,
    selected_items: &[usize],
    is_selected: &[bool],
    total_weight: u64,
) -> Option<(usize, usize)> {
    for (position, &old_item) in selected_items.iter().enumerate() {
        let old_weight = instance.weights[old_item];
        let old_value = instance.values[old_item];
        for new_item in 0..instance.num_items() {
            if is_selected[new_item] {
                continue;
            }
            let new_weight = instance.weights[new_item];
            if instance.values[new_item] >= old_value
                && new_weight < old_weight
                && total_weight - old_weight + new_weight <= instance.capacity
            {
                return Some((position, new_item));
            }
        }
    }
    None
}
