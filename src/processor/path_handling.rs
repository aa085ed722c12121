//! Path handling functionality
//!
//! This module derives output file names and paths from input files.

use std::path::{Path, PathBuf};

use crate::constants::{OUTPUT_NAME_NEEDLE, OUTPUT_NAME_REPLACEMENT};
use crate::errors::{Result, invalid_filename_error, path_operation_error};

/// Derives the output file name from an input file name
///
/// The name is lower-cased and the first `test_` is replaced by
/// `test_auchan_success_`. Names without `test_` are only lower-cased.
///
/// Not idempotent: the replacement contains `test_` itself, so a second
/// application inserts `auchan_success_` again.
///
/// # Examples
/// ```
/// use number_extractor::processor::output_file_name;
///
/// assert_eq!(output_file_name("TEST_Store1.txt"), "test_auchan_success_store1.txt");
/// ```
pub fn output_file_name(file_name: &str) -> String {
    file_name
        .to_lowercase()
        .replacen(OUTPUT_NAME_NEEDLE, OUTPUT_NAME_REPLACEMENT, 1)
}

/// Gets the file name of `path` as a string
///
/// # Errors
/// * Returns an error if `path` has no file name component
/// * Returns an error if the file name is not valid UTF-8
pub fn file_name_of(path: &Path) -> Result<&str> {
    path.file_name()
        .ok_or_else(|| path_operation_error(path.to_path_buf(), "get filename"))
        .and_then(|os_str| {
            os_str
                .to_str()
                .ok_or_else(|| invalid_filename_error(path.to_path_buf()))
        })
}

/// Builds the path of the output file for `input` inside `output_directory`
pub fn output_path_for(input: &Path, output_directory: &Path) -> Result<PathBuf> {
    let file_name = file_name_of(input)?;
    Ok(output_directory.join(output_file_name(file_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name("TEST_store1.txt"),
            "test_auchan_success_store1.txt"
        );
        assert_eq!(output_file_name("TEST_empty.txt"), "test_auchan_success_empty.txt");
    }

    #[test]
    fn test_output_file_name_without_needle() {
        assert_eq!(output_file_name("Report.TXT"), "report.txt");
    }

    #[test]
    fn test_output_file_name_replaces_first_occurrence_only() {
        assert_eq!(
            output_file_name("TEST_test_.txt"),
            "test_auchan_success_test_.txt"
        );
    }

    #[test]
    fn test_output_file_name_applied_twice() {
        let once = output_file_name("TEST_store1.txt");
        let twice = output_file_name(&once);

        assert_eq!(twice, "test_auchan_success_auchan_success_store1.txt");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_output_path_for() {
        let path = output_path_for(Path::new("in/sub/TEST_A.txt"), Path::new("out")).unwrap();
        assert_eq!(path, PathBuf::from("out/test_auchan_success_a.txt"));
    }

    #[test]
    fn test_file_name_of_missing_component() {
        let error = file_name_of(Path::new("/")).unwrap_err();
        assert!(format!("{error}").contains("get filename"));
    }
}
