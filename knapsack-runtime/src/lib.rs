pub mod error;
pub mod evaluate;
pub mod orchestrator;

pub use error::SolveError;
pub use orchestrator::{handle, solve, validate, HttpResponse};
