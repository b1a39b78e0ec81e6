//! Puzzle input loading
//!
//! Inputs are small plain-text files, one record per line. They are read
//! eagerly and fully into memory before any solving starts; solvers never
//! touch the filesystem themselves.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading puzzle input
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be read
    #[error("failed to read input file {path}: {source}")]
    File {
        /// Path that failed to open or read
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// Standard input could not be read
    #[error("failed to read input from stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Load the raw input text from a file path, or from stdin when the path is
/// `None` or `-`.
pub fn load(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| InputError::File {
                path: path.to_path_buf(),
                source,
            })
        },
        _ => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw).map_err(InputError::Stdin)?;
            Ok(raw)
        },
    }
}

/// Iterate the trimmed, non-empty lines of a raw input string.
///
/// Every solver consumes its input through this, so a trailing newline or
/// stray blank line never reaches the per-line parsers.
pub fn lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|line| !line.is_empty())
}
