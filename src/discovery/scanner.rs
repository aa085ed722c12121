//! Directory scanning functionality
//!
//! This module contains functions for listing the subdirectories of the input
//! root and the input files inside each of them.

use std::fs::read_dir;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::constants::INPUT_FILE_PATTERN;
use crate::errors::{Result, directory_not_found_error, file_operation_error};

use super::matcher::FileNameMatcher;

/// Lists the paths of the immediate entries of `directory`, sorted
fn list_entries(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = read_dir(directory).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            directory_not_found_error(directory.to_path_buf())
        } else {
            file_operation_error(e, directory.to_path_buf(), "read directory")
        }
    })?;

    let mut paths = entries
        .map(|entry| {
            entry
                .map(|e| e.path())
                .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read directory"))
        })
        .collect::<Result<Vec<PathBuf>>>()?;
    paths.sort();
    Ok(paths)
}

/// Lists the immediate subdirectories of `root`
///
/// # Arguments
/// * `root` - The input root directory
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The subdirectories, sorted by path
///
/// # Errors
/// Returns an error if `root` does not exist or cannot be read
pub fn list_subdirectories(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Listing subdirectories of {}", root.display());

    let directories: Vec<PathBuf> = list_entries(root)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect();

    debug!("Found {} subdirectories", directories.len());
    Ok(directories)
}

/// Scans a directory for input files
///
/// Only regular files directly inside `directory` whose name matches
/// [`INPUT_FILE_PATTERN`] are returned; subdirectories are not descended into.
///
/// # Arguments
/// * `directory` - The directory to scan
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The matching files, sorted by path
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn scan_matching_files(directory: &Path) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", directory.display());
    let matcher = FileNameMatcher::new(INPUT_FILE_PATTERN)?;

    let files: Vec<PathBuf> = list_entries(directory)?
        .into_iter()
        .filter(|path| {
            let keep = matcher.matches(path) && path.is_file();
            if !keep {
                trace!("Skipping {}", path.display());
            }
            keep
        })
        .collect();

    debug!(
        "Found {} files matching {} in {}",
        files.len(),
        INPUT_FILE_PATTERN,
        directory.display()
    );

    Ok(files)
}
