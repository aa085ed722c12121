//! File operation functionality
//!
//! This module contains methods for reading input files, writing the
//! extracted numbers and creating the output directory.

use std::fs::{self, File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::errors::{Result, file_operation_error};
use crate::extractor::{Number, extract};

use super::core::{FileReport, Processor};

impl Processor {
    /// Reads the source file and extracts its numbers
    ///
    /// # Errors
    /// * Returns an error if the source cannot be read as UTF-8 text
    /// * Returns an error if a number is too large
    pub fn extract_numbers(&self) -> Result<Vec<Number>> {
        let content = fs::read_to_string(&self.source)
            .map_err(|e| file_operation_error(e, self.source.clone(), "read"))?;
        extract(&content)
    }

    /// Transforms the source file into the target file
    ///
    /// The target is created or truncated; a failure while writing may leave
    /// it incomplete.
    ///
    /// # Returns
    /// * `Result<FileReport>` - What was written where
    ///
    /// # Errors
    /// * Returns an error if the source cannot be read
    /// * Returns an error if the target cannot be written
    pub fn transform(&self) -> Result<FileReport> {
        let numbers = self.extract_numbers()?;

        let file = File::create(&self.target)
            .map_err(|e| file_operation_error(e, self.target.clone(), "create"))?;
        let mut writer = BufWriter::new(file);
        write_numbers(&mut writer, &numbers)
            .and_then(|_| writer.flush())
            .map_err(|e| file_operation_error(e, self.target.clone(), "write"))?;

        info!(
            "{} -> {} ({} numbers)",
            self.source.display(),
            self.target.display(),
            numbers.len()
        );

        Ok(self.report(numbers.len()))
    }

    /// Extracts the numbers without writing the target
    pub fn plan(&self) -> Result<FileReport> {
        let numbers = self.extract_numbers()?;
        debug!(
            "Would write {} numbers from {} to {}",
            numbers.len(),
            self.source.display(),
            self.target.display()
        );
        Ok(self.report(numbers.len()))
    }

    fn report(&self, numbers: usize) -> FileReport {
        FileReport {
            source: self.source.clone(),
            target: self.target.clone(),
            numbers,
        }
    }
}

/// Writes `numbers` in decimal, one per line, each line newline-terminated
pub fn write_numbers<W: Write>(writer: &mut W, numbers: &[Number]) -> std::io::Result<()> {
    for number in numbers {
        writeln!(writer, "{number}")?;
    }
    Ok(())
}

/// Creates `output_directory` and its parents unless it already exists
pub fn ensure_output_directory(output_directory: &Path) -> Result<()> {
    create_dir_all(output_directory).map_err(|e| {
        file_operation_error(e, output_directory.to_path_buf(), "create directory")
    })?;
    debug!("Output directory ready: {}", output_directory.display());
    Ok(())
}

/// Transforms `input_path` into its output file inside `output_directory`
///
/// # Arguments
/// * `input_path` - The file to read
/// * `output_directory` - The existing directory receiving the output file
///
/// # Returns
/// * `Result<FileReport>` - What was written where
///
/// # Errors
/// Returns an error if reading, extracting or writing fails
pub fn process_file(input_path: &Path, output_directory: &Path) -> Result<FileReport> {
    Processor::for_output_directory(input_path, output_directory)?.transform()
}

/// Same as [`process_file`] but nothing is written
pub fn plan_file(input_path: &Path, output_directory: &Path) -> Result<FileReport> {
    Processor::for_output_directory(input_path, output_directory)?.plan()
}
