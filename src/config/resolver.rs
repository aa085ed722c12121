//! Resolution of the directory settings
//!
//! Each value is taken from the environment when the variable is set and not
//! empty, otherwise from the `[Directories]` section of the configuration file.

use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{DIRECTORIES_SECTION, INPUT_DIRECTORY_KEY, OUTPUT_DIRECTORY_KEY};
use crate::errors::{Result, missing_config_value_error};

use super::loader::{ConfigFile, expand_path};
use super::model::Directories;

/// Loads the configuration file and resolves both directories
///
/// # Arguments
/// * `config_path` - Path to the configuration file
///
/// # Returns
/// * `Result<Directories>` - The resolved directories
///
/// # Errors
/// * Returns an error if the configuration file exists but cannot be parsed
/// * Returns an error if a directory is provided neither by the environment
///   nor by the configuration file
pub fn load_directories(config_path: &Path) -> Result<Directories> {
    let config = ConfigFile::load(config_path)?;
    resolve_directories(&config)
}

/// Resolves both directories against the process environment
pub fn resolve_directories(config: &ConfigFile) -> Result<Directories> {
    resolve_directories_with(config, |name| env::var(name).ok())
}

/// Resolves both directories using `lookup` in place of the environment
///
/// # Examples
/// ```
/// use number_extractor::config::{ConfigFile, resolve_directories_with};
///
/// let config = ConfigFile::from_ini_str(
///     "[Directories]\nINPUT_DIRECTORY = in\nOUTPUT_DIRECTORY = out\n",
/// ).unwrap();
/// let directories = resolve_directories_with(&config, |name| {
///     (name == "OUTPUT_DIRECTORY").then(|| "elsewhere".to_string())
/// }).unwrap();
///
/// assert_eq!(directories.input_directory.to_str(), Some("in"));
/// assert_eq!(directories.output_directory.to_str(), Some("elsewhere"));
/// ```
pub fn resolve_directories_with<F>(config: &ConfigFile, lookup: F) -> Result<Directories>
where
    F: Fn(&str) -> Option<String>,
{
    let input_directory = resolve_value(config, &lookup, INPUT_DIRECTORY_KEY)?;
    let output_directory = resolve_value(config, &lookup, OUTPUT_DIRECTORY_KEY)?;

    Ok(Directories {
        input_directory,
        output_directory,
    })
}

fn resolve_value<F>(config: &ConfigFile, lookup: &F, key: &str) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(key).filter(|value| !value.is_empty()) {
        debug!("{key} taken from the environment: {value}");
        return Ok(PathBuf::from(expand_path(&value)));
    }

    let value = config
        .get(DIRECTORIES_SECTION, key)
        .ok_or_else(|| missing_config_value_error(DIRECTORIES_SECTION, key))?;
    debug!("{key} taken from the configuration file: {value}");
    Ok(PathBuf::from(expand_path(value)))
}
