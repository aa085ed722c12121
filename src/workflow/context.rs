//! Workflow context
//!
//! This module defines the state collected while the workflow runs.

use std::path::PathBuf;

use crate::config::Directories;
use crate::processor::FileReport;

/// A file that would be written in dry-run mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOperation {
    /// The input file
    pub source: PathBuf,
    /// The output file that would be written
    pub destination: PathBuf,
    /// Number of lines that would be written
    pub numbers: usize,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of subdirectories scanned
    pub directories_scanned: usize,
    /// Number of input files transformed (or planned)
    pub files_processed: usize,
    /// Number of lines written across all output files
    pub numbers_written: usize,
}

/// Context for the workflow
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The resolved directories
    pub directories: Directories,
    /// Whether output files are only planned instead of written
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Planned operations for dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
}

impl WorkflowContext {
    /// Creates a new workflow context
    pub fn new(directories: Directories, dry_run: bool) -> Self {
        WorkflowContext {
            directories,
            dry_run,
            stats: WorkflowStats::default(),
            planned_operations: Vec::new(),
        }
    }

    /// Increments the number of directories scanned
    pub fn increment_directories_scanned(&mut self) {
        self.stats.directories_scanned += 1;
    }

    /// Records a transformed or planned file
    pub fn record_file(&mut self, report: FileReport) {
        self.stats.files_processed += 1;
        if self.dry_run {
            self.planned_operations.push(PlannedOperation {
                source: report.source,
                destination: report.target,
                numbers: report.numbers,
            });
        } else {
            self.stats.numbers_written += report.numbers;
        }
    }
}
