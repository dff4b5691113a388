//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Unirep - Interactively replace non-ASCII characters in text files
#[derive(Parser, Debug)]
#[command(name = "unirep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text files to scan and rewrite in place (UTF-8)
    ///
    /// Names starting with `-` are taken as paths unless they spell a
    /// built-in flag such as `-h` or `--version`.
    #[arg(required = true, num_args = 1.., value_name = "FILE", allow_hyphen_values = true)]
    pub files: Vec<PathBuf>,
}
