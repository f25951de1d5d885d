use knapsack_structs::api::ErrorResponse;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to solve knapsack problem";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The request is malformed; no solver was run.
    #[error("{0}")]
    InvalidInput(String),
    /// A solver failed. Details are logged, never returned to the caller.
    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal,
}

impl SolveError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        SolveError::InvalidInput(msg.into())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            SolveError::InvalidInput(_) => 400,
            SolveError::Internal => 500,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}
