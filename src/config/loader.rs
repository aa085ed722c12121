//! Configuration loading functionality
//!
//! Reads the configuration file into sections of string key-value pairs.
//! INI is the default format; `.yaml`/`.yml` files are read as YAML with the
//! same shape (a mapping of sections to mappings of keys to strings).

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use ini::{Ini, ParseOption};
use log::{debug, warn};
use serde::Deserialize;
use shellexpand::tilde;

use crate::errors::{Result, config_parsing_error, file_operation_error};

type Section = BTreeMap<String, String>;

/// Sections of a configuration file
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
struct Sections(BTreeMap<String, Section>);

impl Sections {
    /// Keys are stored lower-cased so lookups ignore their case
    fn normalised(self) -> Self {
        Sections(
            self.0
                .into_iter()
                .map(|(name, section)| {
                    let section = section
                        .into_iter()
                        .map(|(key, value)| (key.to_lowercase(), value))
                        .collect();
                    (name, section)
                })
                .collect(),
        )
    }
}

/// A loaded configuration file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    sections: Sections,
}

impl ConfigFile {
    /// Loads a configuration from a file
    ///
    /// A file that does not exist yields an empty configuration so that every
    /// value can still come from the environment.
    ///
    /// # Arguments
    /// * `file` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<ConfigFile>` - The loaded configuration or an error
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load(file: &Path) -> Result<ConfigFile> {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Configuration file {} not found, relying on the environment",
                    file.display()
                );
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(file_operation_error(
                    e,
                    file.to_path_buf(),
                    "read configuration",
                ));
            }
        };

        let sections = if is_yaml(file) {
            parse_yaml(&content, file)?
        } else {
            parse_ini(&content, file)?
        };
        debug!(
            "Loaded {} configuration section(s) from {}",
            sections.0.len(),
            file.display()
        );

        Ok(ConfigFile {
            sections: sections.normalised(),
        })
    }

    /// Parses INI text that did not come from a file
    pub fn from_ini_str(content: &str) -> Result<ConfigFile> {
        let sections = parse_ini(content, Path::new("<string>"))?;
        Ok(ConfigFile {
            sections: sections.normalised(),
        })
    }

    /// Parses YAML text that did not come from a file
    pub fn from_yaml_str(content: &str) -> Result<ConfigFile> {
        let sections = parse_yaml(content, Path::new("<string>"))?;
        Ok(ConfigFile {
            sections: sections.normalised(),
        })
    }

    /// Looks up `key` in `section`; the key is matched case-insensitively
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .0
            .get(section)
            .and_then(|values| values.get(&key.to_lowercase()))
            .map(String::as_str)
    }
}

fn is_yaml(file: &Path) -> bool {
    file.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

fn parse_ini(content: &str, file: &Path) -> Result<Sections> {
    // Backslashes are path separators on Windows, not escapes
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(content, options).map_err(|e| {
        config_parsing_error(
            e,
            &format!("Failed to parse configuration file {}", file.display()),
        )
    })?;

    let mut sections = BTreeMap::new();
    for (name, properties) in &ini {
        // Keys outside of any section are not addressable
        let Some(name) = name else { continue };
        let section: &mut Section = sections.entry(name.to_string()).or_default();
        for (key, value) in properties.iter() {
            section.insert(key.to_string(), value.to_string());
        }
    }
    Ok(Sections(sections))
}

fn parse_yaml(content: &str, file: &Path) -> Result<Sections> {
    if content.trim().is_empty() {
        return Ok(Sections::default());
    }
    serde_yaml::from_str(content).map_err(|e| {
        config_parsing_error(
            e,
            &format!(
                "Failed to parse configuration file {}. Please check the YAML syntax.",
                file.display()
            ),
        )
    })
}

/// Expands a leading `~` to the home directory
pub fn expand_path(path: &str) -> String {
    tilde(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ini_lookup() {
        let config = ConfigFile::from_ini_str(
            "[Directories]\nINPUT_DIRECTORY = in\nOUTPUT_DIRECTORY = out\n",
        )
        .unwrap();

        assert_eq!(config.get("Directories", "INPUT_DIRECTORY"), Some("in"));
        assert_eq!(config.get("Directories", "OUTPUT_DIRECTORY"), Some("out"));
        assert_eq!(config.get("Directories", "MISSING"), None);
        assert_eq!(config.get("Other", "INPUT_DIRECTORY"), None);
    }

    #[test]
    fn test_keys_are_case_insensitive_sections_are_not() {
        let config = ConfigFile::from_ini_str("[Directories]\ninput_directory = in\n").unwrap();

        assert_eq!(config.get("Directories", "INPUT_DIRECTORY"), Some("in"));
        assert_eq!(config.get("directories", "INPUT_DIRECTORY"), None);
    }

    #[test]
    fn test_ini_keeps_backslashes() {
        let config =
            ConfigFile::from_ini_str("[Directories]\nINPUT_DIRECTORY = C:\\data\\new\n").unwrap();

        assert_eq!(
            config.get("Directories", "INPUT_DIRECTORY"),
            Some("C:\\data\\new")
        );
    }

    #[test]
    fn test_yaml_lookup() {
        let config = ConfigFile::from_yaml_str(
            "Directories:\n  INPUT_DIRECTORY: in\n  OUTPUT_DIRECTORY: out\n",
        )
        .unwrap();

        assert_eq!(config.get("Directories", "INPUT_DIRECTORY"), Some("in"));
        assert_eq!(config.get("Directories", "OUTPUT_DIRECTORY"), Some("out"));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = ConfigFile::from_yaml_str("Directories: [unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_yaml() {
        let config = ConfigFile::from_yaml_str("   \n").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_yaml_extension_detection() {
        assert!(is_yaml(Path::new("config.yaml")));
        assert!(is_yaml(Path::new("config.YML")));
        assert!(!is_yaml(Path::new("config.ini")));
        assert!(!is_yaml(Path::new("config")));
    }

    #[test]
    fn test_expand_path_without_tilde() {
        assert_eq!(expand_path("relative/path"), "relative/path");
        assert_eq!(expand_path("/absolute/path"), "/absolute/path");
    }
}
