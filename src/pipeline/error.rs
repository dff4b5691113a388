//! Error types for scanning, prompting, and rewriting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a replacement run.
///
/// Missing input files are not errors; they are reported and skipped by the
/// scanner. Everything here is fatal.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// Reading an input file failed after it was found on disk.
    #[error("Failed to read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8.
    #[error("Failed to decode file as UTF-8: {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Writing the rewritten content back failed.
    #[error("Failed to write file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("Input closed while waiting for an answer")]
    InputClosed,

    /// The interactive terminal prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

pub type ReplaceResult<T> = std::result::Result<T, ReplaceError>;
