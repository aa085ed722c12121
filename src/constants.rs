/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.ini";

/// Section of the configuration file holding the directory paths
pub const DIRECTORIES_SECTION: &str = "Directories";

/// Key (and environment variable) naming the input root directory
pub const INPUT_DIRECTORY_KEY: &str = "INPUT_DIRECTORY";

/// Key (and environment variable) naming the output directory
pub const OUTPUT_DIRECTORY_KEY: &str = "OUTPUT_DIRECTORY";

/// Case-sensitive glob selecting the files to transform inside a subdirectory
pub const INPUT_FILE_PATTERN: &str = "TEST_*.txt";

/// Substring of the lower-cased file name that gets replaced
pub const OUTPUT_NAME_NEEDLE: &str = "test_";

/// Replacement for the first occurrence of [`OUTPUT_NAME_NEEDLE`]
pub const OUTPUT_NAME_REPLACEMENT: &str = "test_auchan_success_";

/// Pattern matching a range token or a bare number, range first
///
/// `\d` is any Unicode decimal digit, not only ASCII `0-9`.
pub const NUMBER_PATTERN: &str = r"\d+-\d+|\d+";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without writing any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Default log file, empty means console only
pub const LOG_FILE_DEFAULT: &str = "";
