use anyhow::{anyhow, Result};
use knapsack_challenges::knapsack::{Instance, Solution};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub mod dynamic;
pub mod genetic;
pub mod greedy;
pub mod heuristic;
mod ranking;
pub use ranking::rank_by_ratio;

pub trait Solver {
    fn kind(&self) -> SolverKind;

    fn solve(&self, instance: &Instance) -> Result<Solution>;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    Dp,
    Greedy,
    Ml,
    Genetic,
}

impl SolverKind {
    /// Solvers run when all are requested, in order. `Genetic` only runs on its own.
    pub const ALL: [SolverKind; 3] = [SolverKind::Dp, SolverKind::Greedy, SolverKind::Ml];

    pub fn name(&self) -> &'static str {
        match self {
            SolverKind::Dp => "dp",
            SolverKind::Greedy => "greedy",
            SolverKind::Ml => "ml",
            SolverKind::Genetic => "genetic",
        }
    }

    pub fn solver(&self) -> Box<dyn Solver + Send + Sync> {
        match self {
            SolverKind::Dp => Box::new(dynamic::DynamicProgramming),
            SolverKind::Greedy => Box::new(greedy::Greedy),
            SolverKind::Ml => Box::new(heuristic::Heuristic),
            SolverKind::Genetic => Box::new(genetic::Genetic::default()),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dp" => Ok(SolverKind::Dp),
            "greedy" => Ok(SolverKind::Greedy),
            "ml" => Ok(SolverKind::Ml),
            "genetic" => Ok(SolverKind::Genetic),
            _ => Err(anyhow!("Unknown solver '{}'", s)),
        }
    }
}
