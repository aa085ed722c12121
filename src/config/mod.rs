//! Configuration module
//!
//! This module contains components for loading the configuration file and
//! resolving the directory settings against the environment.

mod loader;
mod model;
mod resolver;

pub use loader::{ConfigFile, expand_path};
pub use model::Directories;
pub use resolver::{load_directories, resolve_directories, resolve_directories_with};
