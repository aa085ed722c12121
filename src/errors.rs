use glob::PatternError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the number extractor
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to glob pattern matching
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// A required configuration value is neither in the environment nor in the file
    MissingConfigValue { section: String, key: String },
    /// A numeric literal does not fit into [`crate::extractor::Number`]
    NumberOverflow { token: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error when a directory is not found
    DirectoryNotFound { path: PathBuf },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::GlobPattern { pattern, .. } => {
                write!(f, "Invalid glob pattern: {pattern}")
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::MissingConfigValue { section, key } => {
                write!(
                    f,
                    "Missing configuration value '{key}': set the {key} environment variable \
                     or add it to the [{section}] section"
                )
            }
            Error::NumberOverflow { token } => {
                write!(f, "Number '{token}' is too large to be processed")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::DirectoryNotFound { path } => {
                write!(f, "Directory not found: {}", path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::GlobPattern { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Custom Result type for the number extractor
///
/// # Examples
/// ```
/// use std::path::Path;
///
/// use number_extractor::prelude::{Result, directory_not_found_error};
///
/// fn require_directory(path: &Path) -> Result<()> {
///     if path.is_dir() {
///         Ok(())
///     } else {
///         Err(directory_not_found_error(path.to_path_buf()))
///     }
/// }
/// # assert!(require_directory(Path::new("/definitely/not/here")).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create a missing configuration value error
pub fn missing_config_value_error(section: &str, key: &str) -> Error {
    Error::MissingConfigValue {
        section: section.to_string(),
        key: key.to_string(),
    }
}

/// Helper function to create a number overflow error
pub fn number_overflow_error(token: &str) -> Error {
    Error::NumberOverflow {
        token: token.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a directory not found error
pub fn directory_not_found_error(path: PathBuf) -> Error {
    Error::DirectoryNotFound { path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("/test/path");
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = file_operation_error(io_error, path.clone(), "read");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("read"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/path"),
            "Error message should contain the path"
        );
        assert!(error.source().is_some(), "I/O cause should be chained");
    }

    #[test]
    fn test_glob_pattern_error() {
        let pattern_error = glob::Pattern::new("[").err().unwrap();
        let error = glob_pattern_error(pattern_error, "test-glob-pattern");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("test-glob-pattern"),
            "Error message should contain the pattern"
        );
    }

    #[test]
    fn test_config_parsing_error() {
        let io_error = io::Error::new(io::ErrorKind::InvalidData, "Invalid INI");
        let error = config_parsing_error(io_error, "Unterminated section header");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Unterminated section header"),
            "Error message should contain the detail"
        );
    }

    #[test]
    fn test_missing_config_value_error() {
        let error = missing_config_value_error("Directories", "INPUT_DIRECTORY");

        let error_string = format!("{error}");
        assert!(error_string.contains("INPUT_DIRECTORY"));
        assert!(error_string.contains("[Directories]"));
    }

    #[test]
    fn test_number_overflow_error() {
        let token = "340282366920938463463374607431768211456";
        let error = number_overflow_error(token);

        assert!(format!("{error}").contains(token));
    }

    #[test]
    fn test_directory_not_found_error() {
        let path = PathBuf::from("/test/nonexistent");
        let error = directory_not_found_error(path.clone());

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/nonexistent"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_missing_config_value_message() {
        let error = missing_config_value_error("Directories", "OUTPUT_DIRECTORY");

        assert_eq!(
            format!("{error}"),
            "Missing configuration value 'OUTPUT_DIRECTORY': set the OUTPUT_DIRECTORY \
             environment variable or add it to the [Directories] section"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_config_parsing_error_chains_its_cause() {
        let io_error = io::Error::new(io::ErrorKind::InvalidData, "bad byte");
        let error = config_parsing_error(io_error, "Failed to parse configuration file x.ini");

        let cause = error.source().unwrap();
        assert_eq!(format!("{cause}"), "bad byte");
    }
}
