//! Unirep: Unicode Replacement Library
//!
//! Scans text files for characters outside the ASCII range, asks which of
//! them to replace and with what, and rewrites the files in place.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
