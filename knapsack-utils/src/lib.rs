mod hash;
pub use hash::*;
mod input;
pub use input::*;
mod json;
pub use json::*;
mod time;
pub use time::*;
