//! CLI module - argument parsing and interactive prompts

mod args;
pub mod prompts;

pub use args::Cli;
pub use prompts::*;
