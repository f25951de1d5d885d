mod generation;
pub use generation::*;
mod solution;
pub use solution::*;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// A 0/1 knapsack problem. Item `i` has weight `weights[i]` and value
/// `values[i]`; weights, values and capacity are non-negative integers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub weights: Vec<u64>,
    pub values: Vec<u64>,
    pub capacity: u64,
}

impl Instance {
    pub fn new(weights: Vec<u64>, values: Vec<u64>, capacity: u64) -> Result<Self> {
        let instance = Self {
            weights,
            values,
            capacity,
        };
        instance.validate()?;
        Ok(instance)
    }

    /// Checks the invariants that deserialization alone cannot enforce.
    pub fn validate(&self) -> Result<()> {
        if self.weights.len() != self.values.len() {
            return Err(anyhow!(
                "Number of weights ({}) does not match number of values ({})",
                self.weights.len(),
                self.values.len()
            ));
        }
        checked_sum(&self.weights).ok_or_else(|| anyhow!("Sum of weights overflows u64"))?;
        checked_sum(&self.values).ok_or_else(|| anyhow!("Sum of values overflows u64"))?;
        Ok(())
    }

    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    /// Number of cells in the `(n + 1) x (capacity + 1)` dynamic programming table,
    /// or `None` if it does not fit in a `u64`.
    pub fn table_cells(&self) -> Option<u64> {
        (self.num_items() as u64)
            .checked_add(1)?
            .checked_mul(self.capacity.checked_add(1)?)
    }

    pub fn total_value_of(&self, items: &[usize]) -> u64 {
        items.iter().map(|&i| self.values[i]).sum()
    }

    pub fn total_weight_of(&self, items: &[usize]) -> u64 {
        items.iter().map(|&i| self.weights[i]).sum()
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<()> {
        let num_items = self.num_items();
        if solution.selection.len() != num_items {
            return Err(anyhow!(
                "Selection length ({}) does not match number of items ({})",
                solution.selection.len(),
                num_items
            ));
        }
        if let Some(bit) = solution.selection.iter().find(|&&bit| bit > 1) {
            return Err(anyhow!("Selection entry ({}) is not 0 or 1", bit));
        }

        let mut is_selected = vec![false; num_items];
        for &item in &solution.selected_items {
            if item >= num_items {
                return Err(anyhow!("Item ({}) is out of bounds", item));
            }
            if is_selected[item] {
                return Err(anyhow!("Duplicate item ({}) selected", item));
            }
            is_selected[item] = true;
        }
        for (i, (&bit, &selected)) in solution.selection.iter().zip(&is_selected).enumerate() {
            if (bit == 1) != selected {
                return Err(anyhow!(
                    "Selection entry for item {} disagrees with selected items",
                    i
                ));
            }
        }

        let total_value = self.total_value_of(&solution.selected_items);
        if total_value != solution.total_value {
            return Err(anyhow!(
                "Reported total value ({}) does not match actual total value ({})",
                solution.total_value,
                total_value
            ));
        }
        let total_weight = self.total_weight_of(&solution.selected_items);
        if total_weight != solution.total_weight {
            return Err(anyhow!(
                "Reported total weight ({}) does not match actual total weight ({})",
                solution.total_weight,
                total_weight
            ));
        }
        if solution.is_feasible != (total_weight <= self.capacity) {
            return Err(anyhow!(
                "Reported feasibility ({}) is wrong for total weight ({}) and capacity ({})",
                solution.is_feasible,
                total_weight,
                self.capacity
            ));
        }
        Ok(())
    }
}

fn checked_sum(xs: &[u64]) -> Option<u64> {
    xs.iter().try_fold(0u64, |acc, &x| acc.checked_add(x))
}
