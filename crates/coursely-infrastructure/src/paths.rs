//! Unified path management for coursely files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/coursely/          # Config directory
//! └── coursely.toml            # Application configuration
//!
//! ~/.local/share/coursely/     # Data directory
//! └── store.json               # Key-value store holding the profile
//! ```

use std::path::PathBuf;

use coursely_core::error::CourselyError;

const APP_DIR: &str = "coursely";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for CourselyError {
    fn from(err: PathError) -> Self {
        CourselyError::config(err.to_string())
    }
}

/// Platform-appropriate locations (XDG on Linux, Application Support on macOS,
/// AppData on Windows).
pub struct CourselyPaths;

impl CourselyPaths {
    /// Returns the coursely configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the coursely data directory.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    /// Returns the path to the configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("coursely.toml"))
    }

    /// Returns the default path of the key-value store file.
    pub fn store_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        // Platform directories may be unavailable in sandboxed environments
        if let Ok(config_file) = CourselyPaths::config_file() {
            assert!(config_file.ends_with("coursely/coursely.toml"));
            assert!(config_file.starts_with(CourselyPaths::config_dir().unwrap()));
        }
    }

    #[test]
    fn test_store_file() {
        if let Ok(store_file) = CourselyPaths::store_file() {
            assert!(store_file.ends_with("coursely/store.json"));
            assert!(store_file.starts_with(CourselyPaths::data_dir().unwrap()));
        }
    }

    #[test]
    fn test_path_error_converts_to_config_error() {
        let err: CourselyError = PathError::DataDirNotFound.into();
        assert!(matches!(err, CourselyError::Config(_)));
    }
}
