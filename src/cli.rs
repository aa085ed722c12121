use std::path::PathBuf;

use clap::{
    Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version,
};

use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, DRY_RUN_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, VERBOSE_HELP,
};
use crate::logging::LogLevel;
use crate::workflow::ProcessingOptions;

/// Builds the command-line interface
///
/// Defines the following arguments, all optional:
/// - `config`: Path to the configuration file
/// - `dry`: Run without writing any files
/// - `log_file`: Also log to this file
/// - `verbose`: Increase verbosity level
pub fn build_command() -> Command {
    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_config)
        .arg(arg_dry)
        .arg(log_file)
        .arg(arg_verbose)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file path, empty when only the console is logged to
pub fn get_log_file(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string())
}

/// Gets the processing options from the command-line arguments
pub fn get_processing_options(matches: &ArgMatches) -> ProcessingOptions {
    let config_path = matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    ProcessingOptions {
        config_path,
        dry_run: matches.get_flag("dry"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let matches = build_command().try_get_matches_from(["numex"]).unwrap();
        let options = get_processing_options(&matches);

        assert_eq!(options.config_path, PathBuf::from("config.ini"));
        assert!(!options.dry_run);
        assert_eq!(get_verbosity(&matches), LogLevel::Info);
        assert_eq!(get_log_file(&matches), "");
    }

    #[test]
    fn test_all_arguments() {
        let matches = build_command()
            .try_get_matches_from(["numex", "-c", "other.yaml", "-n", "-vv", "-l", "run.log"])
            .unwrap();
        let options = get_processing_options(&matches);

        assert_eq!(options.config_path, PathBuf::from("other.yaml"));
        assert!(options.dry_run);
        assert_eq!(get_verbosity(&matches), LogLevel::Trace);
        assert_eq!(get_log_file(&matches), "run.log");
    }

    #[test]
    fn test_command_is_consistent() {
        build_command().debug_assert();
    }
}
