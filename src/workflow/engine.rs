//! Workflow engine
//!
//! This module contains the engine that drives a whole run.

use std::collections::HashMap;
use std::path::PathBuf;

use log::{info, warn};

use crate::config::{Directories, load_directories};
use crate::discovery::list_subdirectories;
use crate::errors::Result;
use crate::processor::{ensure_output_directory, transform_directory};

use super::context::WorkflowContext;

/// Options for processing files
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Whether to only report what would be written
    pub dry_run: bool,
}

/// Processes files based on the configuration
///
/// This function orchestrates the workflow steps:
/// 1. Resolve the directories from the environment and the configuration file
/// 2. Run the transformation over every subdirectory of the input root
///
/// # Arguments
/// * `options` - Options for processing files
///
/// # Returns
/// * `Result<WorkflowContext>` - The workflow context with statistics or an error
///
/// # Errors
/// * Returns an error if any step fails
pub fn process_files(options: ProcessingOptions) -> Result<WorkflowContext> {
    let directories = load_directories(&options.config_path)?;
    run(directories, options.dry_run)
}

/// Transforms the input files of every subdirectory of the input root
///
/// The input root is listed before anything is created, so a missing root
/// fails the run without creating the output directory. The output
/// directory is then created once and receives the files of all
/// subdirectories; colliding output names overwrite each other in
/// subdirectory order.
///
/// # Errors
/// Returns the first error met; files processed before it stay written
pub fn run(directories: Directories, dry_run: bool) -> Result<WorkflowContext> {
    let subdirectories = list_subdirectories(directories.input())?;

    if !dry_run {
        ensure_output_directory(directories.output())?;
    }

    info!(
        "Processing {} directories from {}{}...",
        subdirectories.len(),
        directories.input().display(),
        if dry_run { " (dry run)" } else { "" }
    );

    let mut context = WorkflowContext::new(directories, dry_run);
    let mut written_by: HashMap<PathBuf, PathBuf> = HashMap::new();

    for subdirectory in subdirectories {
        context.increment_directories_scanned();
        let reports =
            transform_directory(&subdirectory, context.directories.output(), dry_run)?;

        for report in reports {
            if let Some(previous) = written_by.insert(report.target.clone(), report.source.clone())
            {
                warn!(
                    "{} overwrites the output of {}: {}",
                    report.source.display(),
                    previous.display(),
                    report.target.display()
                );
            }
            context.record_file(report);
        }
    }

    info!(
        "Processed {} files from {} directories",
        context.stats.files_processed, context.stats.directories_scanned
    );

    Ok(context)
}
