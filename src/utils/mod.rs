//! Utility module - console styling and progress helpers

mod progress;
mod styling;

pub use progress::*;
pub use styling::*;
