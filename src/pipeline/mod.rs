//! Pipeline module - the scan and rewrite phases around the prompt

pub mod error;
pub mod rewriter;
pub mod scanner;

pub use error::*;
pub use rewriter::*;
pub use scanner::*;
