//! Configuration service implementation.
//!
//! Loads [`SearchConfig`] from `config.toml` (by default
//! `~/.config/textnext/config.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use textnext_core::config::SearchConfig;
use textnext_core::error::{Result, SearchError};

use crate::paths::TextnextPaths;

/// Reads the client configuration from a TOML file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service for the platform default config path.
    pub fn new() -> Result<Self> {
        let path = TextnextPaths::config_file().map_err(|e| SearchError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a service for an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the configuration.
    ///
    /// A missing or empty file yields the defaults.
    ///
    /// # Errors
    ///
    /// `SearchError::Config` if the file cannot be read, is not valid TOML,
    /// or contains unusable values.
    pub fn load(&self) -> Result<SearchConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(SearchConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            SearchError::config(format!(
                "Failed to read config file at {}: {}",
                self.path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(SearchConfig::default());
        }

        let config: SearchConfig = toml::from_str(&content).map_err(|e| {
            SearchError::config(format!(
                "Failed to parse TOML from {}: {}",
                self.path.display(),
                e
            ))
        })?;
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        assert_eq!(service.load().unwrap(), SearchConfig::default());
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "  \n").unwrap();

        assert_eq!(
            ConfigService::with_path(path).load().unwrap(),
            SearchConfig::default()
        );
    }

    #[test]
    fn test_loads_values_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "base_url = \"http://127.0.0.1:8000\"\ninitial_limit = 25\nlimit_step = 5\n",
        )
        .unwrap();

        let config = ConfigService::with_path(path).load().unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.initial_limit, 25);
        assert_eq!(config.limit_step, 5);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "base_url = ").unwrap();

        let err = ConfigService::with_path(path).load().unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "initial_limit = 0\n").unwrap();

        let err = ConfigService::with_path(path).load().unwrap_err();
        assert!(err.to_string().contains("initial_limit"));
    }
}
