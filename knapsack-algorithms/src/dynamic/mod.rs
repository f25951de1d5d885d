use crate::{Solver, SolverKind};
use anyhow::{anyhow, Result};
use knapsack_challenges::knapsack::{Instance, Solution};

/// Exact 0/1 knapsack by dynamic programming over integer capacities.
pub struct DynamicProgramming;

impl Solver for DynamicProgramming {
    fn kind(&self) -> SolverKind {
        SolverKind::Dp
    }

    fn solve(&self, instance: &Instance) -> Result<Solution> {
        solve(instance)
    }
}

pub fn solve(instance: &Instance) -> Result<Solution> {
    let num_items = instance.num_items();
    let capacity = usize::try_from(instance.capacity)
        .map_err(|_| anyhow!("Capacity ({}) does not fit in memory", instance.capacity))?;
    let width = capacity
        .checked_add(1)
        .ok_or_else(|| anyhow!("Capacity ({}) does not fit in memory", capacity))?;
    let cells = (num_items + 1)
        .checked_mul(width)
        .ok_or_else(|| anyhow!("Table of {} x {} cells does not fit in memory", num_items + 1, width))?;

    // table[i * width + w] is the best value using the first i items within budget w
    let mut table = Vec::new();
    table
        .try_reserve_exact(cells)
        .map_err(|e| anyhow!("Failed to allocate table of {} cells: {}", cells, e))?;
    table.resize(cells, 0u64);
    for i in 1..=num_items {
        let weight = instance.weights[i - 1];
        let value = instance.values[i - 1];
        let (prev, curr) = table.split_at_mut(i * width);
        let prev = &prev[(i - 1) * width..];
        let curr = &mut curr[..width];
        for w in 0..width {
            curr[w] = if weight > w as u64 {
                prev[w]
            } else {
                prev[w].max(value + prev[w - weight as usize])
            };
        }
    }

    // An item is taken only where it strictly changed the optimum, so ties
    // resolve to leaving it out.
    let mut selected_items = Vec::new();
    let mut remaining = capacity;
    for i in (1..=num_items).rev() {
        if table[i * width + remaining] != table[(i - 1) * width + remaining] {
            selected_items.push(i - 1);
            remaining -= instance.weights[i - 1] as usize;
        }
    }

    let solution = Solution::from_items(instance, selected_items);
    debug_assert_eq!(solution.total_value, table[num_items * width + capacity]);
    Ok(solution)
}
