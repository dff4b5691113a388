//! Report module - summarizing scan and rewrite results

pub mod summary;

pub use summary::*;
