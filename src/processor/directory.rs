//! Directory level processing

use std::path::Path;

use log::debug;

use crate::discovery::scan_matching_files;
use crate::errors::Result;

use super::core::FileReport;
use super::file_operations::{ensure_output_directory, plan_file, process_file};

/// Transforms every input file directly inside `input_directory`
///
/// `output_directory` is created first if needed. Files are processed in
/// path order and the first failure stops the run.
///
/// # Arguments
/// * `input_directory` - The directory to scan for `TEST_*.txt` files
/// * `output_directory` - The directory receiving the output files
///
/// # Returns
/// * `Result<Vec<FileReport>>` - One report per transformed file
///
/// # Errors
/// Returns an error if the output directory cannot be created, the input
/// directory cannot be read or any file fails to transform
pub fn process_directory(
    input_directory: &Path,
    output_directory: &Path,
) -> Result<Vec<FileReport>> {
    ensure_output_directory(output_directory)?;
    transform_directory(input_directory, output_directory, false)
}

/// Transforms (or plans, when `dry_run` is set) the files of `input_directory`
///
/// Unlike [`process_directory`] the output directory must already exist
/// unless this is a dry run.
pub(crate) fn transform_directory(
    input_directory: &Path,
    output_directory: &Path,
    dry_run: bool,
) -> Result<Vec<FileReport>> {
    let files = scan_matching_files(input_directory)?;
    debug!(
        "Transforming {} files from {}",
        files.len(),
        input_directory.display()
    );

    files
        .iter()
        .map(|file| {
            if dry_run {
                plan_file(file, output_directory)
            } else {
                process_file(file, output_directory)
            }
        })
        .collect()
}
