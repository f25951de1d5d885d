use knapsack_algorithms::genetic::GeneticSettings;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TABLE_CELLS: u64 = 100_000_000;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Largest `(n + 1) * (capacity + 1)` dynamic programming table a request
    /// may need. Requests above it are rejected before any solver runs.
    pub max_table_cells: u64,
    /// Let the "ml" solver reuse the "dp" result when both run in one request.
    pub reuse_exact_solution: bool,
    /// Parameters of the "genetic" solver.
    pub genetic: GeneticSettings,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            reuse_exact_solution: false,
            genetic: GeneticSettings::default(),
        }
    }
}
