//! File name matching functionality
//!
//! This module decides which directory entries are input files.

use std::path::Path;

use glob::{MatchOptions, Pattern};

use crate::errors::{Result, glob_pattern_error};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Matches file names against a case-sensitive glob pattern
#[derive(Debug, Clone)]
pub struct FileNameMatcher {
    pattern: Pattern,
}

impl FileNameMatcher {
    /// Compiles `pattern` into a matcher
    ///
    /// # Errors
    /// Returns an error if `pattern` is not a valid glob
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Pattern::new(pattern).map_err(|e| glob_pattern_error(e, pattern))?;
        Ok(FileNameMatcher { pattern })
    }

    /// Checks the final component of `path` against the pattern
    ///
    /// Paths without a UTF-8 file name never match.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.pattern.matches_with(name, MATCH_OPTIONS))
    }
}
