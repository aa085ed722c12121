//! Configuration data structures

use std::path::{Path, PathBuf};

/// Directories the run reads from and writes to
///
/// Resolved once at startup and passed by reference to the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directories {
    /// Root whose immediate subdirectories hold the input files
    pub input_directory: PathBuf,
    /// Flat directory receiving every output file
    pub output_directory: PathBuf,
}

impl Directories {
    pub fn new(input_directory: impl Into<PathBuf>, output_directory: impl Into<PathBuf>) -> Self {
        Directories {
            input_directory: input_directory.into(),
            output_directory: output_directory.into(),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input_directory
    }

    pub fn output(&self) -> &Path {
        &self.output_directory
    }
}
