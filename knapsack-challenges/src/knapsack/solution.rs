use super::Instance;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    /// Selected item indices, in the order they were added.
    pub selected_items: Vec<usize>,
    pub total_value: u64,
    pub total_weight: u64,
    pub is_feasible: bool,
    /// One 0/1 entry per item of the instance.
    pub selection: Vec<u8>,
    /// Seconds spent producing this solution, if it was measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solve_time: Option<f64>,
}

impl Solution {
    pub fn empty(instance: &Instance) -> Self {
        Self::from_items(instance, Vec::new())
    }

    /// Builds a solution from item indices, deriving the bitmap, totals and
    /// feasibility from the instance.
    pub fn from_items(instance: &Instance, selected_items: Vec<usize>) -> Self {
        let mut selection = vec![0u8; instance.num_items()];
        for &item in &selected_items {
            selection[item] = 1;
        }
        let total_value = instance.total_value_of(&selected_items);
        let total_weight = instance.total_weight_of(&selected_items);
        Self {
            selected_items,
            total_value,
            total_weight,
            is_feasible: total_weight <= instance.capacity,
            selection,
            solve_time: None,
        }
    }

    pub fn with_solve_time(mut self, seconds: f64) -> Self {
        self.solve_time = Some(seconds);
        self
    }

    /// True when both solutions select the same items in the same order with the
    /// same totals. `solve_time` is ignored.
    pub fn same_selection(&self, other: &Solution) -> bool {
        self.selected_items == other.selected_items
            && self.selection == other.selection
            && self.total_value == other.total_value
            && self.total_weight == other.total_weight
            && self.is_feasible == other.is_feasible
    }
}
