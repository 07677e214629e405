//! Configuration service implementation.
//!
//! Loads the root configuration from `coursely.toml` and resolves the
//! locations derived from it.

use std::fs;
use std::path::{Path, PathBuf};

use coursely_core::config::RootConfig;
use coursely_core::error::{CourselyError, Result};

use crate::paths::CourselyPaths;

/// Loads [`RootConfig`] from a TOML file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses the platform config file (`~/.config/coursely/coursely.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: CourselyPaths::config_file()?,
        })
    }

    /// Uses an explicit config file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the configuration.
    ///
    /// A missing or empty file yields the defaults; a file that is not valid
    /// TOML for [`RootConfig`] is a configuration error.
    pub fn load(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(RootConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(RootConfig::default());
        }

        toml::from_str(&content).map_err(|e| {
            CourselyError::config(format!("{}: {}", self.path.display(), e))
        })
    }

    /// The key-value store file: the configured override or the platform default.
    pub fn store_path(config: &RootConfig) -> Result<PathBuf> {
        match &config.storage.path {
            Some(path) => Ok(path.clone()),
            None => Ok(CourselyPaths::store_file()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("coursely.toml"));
        assert_eq!(service.load().unwrap(), RootConfig::default());
    }

    #[test]
    fn test_loads_editor_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("coursely.toml");
        fs::write(&path, "[editor]\noptimistic_program_patch = true\n").unwrap();

        let config = ConfigService::with_path(path).load().unwrap();
        assert!(config.editor.optimistic_program_patch);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("coursely.toml");
        fs::write(&path, "[editor\n").unwrap();

        let err = ConfigService::with_path(path).load().unwrap_err();
        assert!(matches!(err, CourselyError::Config(_)));
    }

    #[test]
    fn test_store_path_override() {
        let mut config = RootConfig::default();
        config.storage.path = Some(PathBuf::from("/tmp/elsewhere.json"));
        assert_eq!(
            ConfigService::store_path(&config).unwrap(),
            PathBuf::from("/tmp/elsewhere.json")
        );
    }
}
