//! Core processor functionality
//!
//! This module contains the Processor struct pairing an input file with the
//! output file it is transformed into.

use std::path::{Path, PathBuf};

use super::path_handling::output_path_for;
use crate::errors::Result;

/// Transforms one input file into one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processor {
    /// The input file
    pub(super) source: PathBuf,
    /// The output file written by [`Processor::transform`]
    pub(super) target: PathBuf,
}

impl Processor {
    /// Creates a processor with an explicit target
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Processor {
        Processor {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Creates a processor whose target is the derived output name inside `output_directory`
    ///
    /// # Errors
    /// Returns an error if `source` has no valid UTF-8 file name
    pub fn for_output_directory(source: &Path, output_directory: &Path) -> Result<Processor> {
        let target = output_path_for(source, output_directory)?;
        Ok(Processor::new(source, target))
    }

    /// Gets a reference to the source path
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Gets a reference to the target path
    pub fn target(&self) -> &Path {
        &self.target
    }
}

/// Outcome of transforming (or planning) a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Number of lines written, or that would be written in a dry run
    pub numbers: usize,
}
