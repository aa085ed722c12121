//! File discovery module
//!
//! This module contains components for scanning directories and finding files.

mod matcher;
mod scanner;

pub use matcher::FileNameMatcher;
pub use scanner::{list_subdirectories, scan_matching_files};
