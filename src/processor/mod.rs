//! File processing module
//!
//! This module contains components for transforming input files into output
//! files: name derivation, file operations and directory processing.

mod core;
mod directory;
mod file_operations;
mod path_handling;

pub use self::core::{FileReport, Processor};
pub use directory::process_directory;
pub(crate) use directory::transform_directory;
pub use file_operations::{ensure_output_directory, plan_file, process_file, write_numbers};
pub use path_handling::{file_name_of, output_file_name, output_path_for};
