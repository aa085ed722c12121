//! Number extractor
//!
//! Scans `<input root>/<subdirectory>/TEST_*.txt`, extracts numbers and
//! `start-end` ranges from each file and writes them, one per line, into a
//! renamed file in a single output directory.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod extractor;
pub mod logging;
pub mod processor;
pub mod workflow;

pub mod prelude {
    pub use crate::config::{ConfigFile, Directories, load_directories};
    pub use crate::errors::{
        config_parsing_error, directory_not_found_error, file_operation_error, glob_pattern_error,
        invalid_filename_error, missing_config_value_error, number_overflow_error,
        path_operation_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::extractor::{Number, NumberToken, extract};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::processor::{output_file_name, process_directory, process_file};
    pub use crate::workflow::{ProcessingOptions, WorkflowContext, process_files};
}
