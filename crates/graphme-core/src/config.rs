//! Configuration management for graphme
//!
//! Handles loading configuration from:
//! - Global config: ~/.config/graphme/config.toml
//!
//! The config only decides where the access token is read from.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Global configuration (stored in ~/.config/graphme/)
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct GlobalConfig {
    /// Alternate location of the access token file
    pub token_file: Option<PathBuf>,
}

/// Where the access token is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// Given on the command line or through the environment
    Explicit(PathBuf),
    /// `token_file` from the global config
    Configured(PathBuf),
    /// `~/.private/FB_ACCESS_TOKEN`
    Default,
}

pub struct Config {
    pub global: GlobalConfig,
}

impl Config {
    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No global config, using defaults");
            return Ok(Self {
                global: GlobalConfig::default(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let global = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self { global })
    }

    /// Decide where the token comes from.
    ///
    /// An explicit path wins and the config file is not read at all. Otherwise
    /// `token_file` from the config at `config_path` wins over the default.
    pub fn resolve_token_source(
        explicit: Option<&Path>,
        config_path: &Path,
    ) -> Result<TokenSource, ConfigError> {
        if let Some(path) = explicit {
            return Ok(TokenSource::Explicit(path.to_path_buf()));
        }

        let config = Self::load_from(config_path)?;
        Ok(config.token_source())
    }

    /// Token source according to this config alone
    pub fn token_source(&self) -> TokenSource {
        match self.global.token_file {
            Some(ref path) => TokenSource::Configured(path.clone()),
            None => TokenSource::Default,
        }
    }

    /// Get the global config directory
    pub fn global_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("graphme")
    }

    /// Get the global config file path
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.global, GlobalConfig::default());
        assert_eq!(config.token_source(), TokenSource::Default);
    }

    #[test]
    fn test_parse_token_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "token_file = \"/srv/secrets/fb_token\"\n");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.token_source(),
            TokenSource::Configured(PathBuf::from("/srv/secrets/fb_token"))
        );
    }

    #[test]
    fn test_invalid_config_is_parse_error_with_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "token_file = [");

        match Config::load_from(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("broken config parsed"),
        }
    }

    #[test]
    fn test_unreadable_config_is_read_error_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::create_dir(&path).unwrap();

        let err = Config::load_from(&path).err().unwrap();
        assert!(err.to_string().contains(&path.display().to_string()));
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_explicit_path_wins_over_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "token_file = \"/from/config\"\n");

        let source = Config::resolve_token_source(Some(Path::new("/from/flag")), &path).unwrap();
        assert_eq!(source, TokenSource::Explicit(PathBuf::from("/from/flag")));

        let source = Config::resolve_token_source(None, &path).unwrap();
        assert_eq!(source, TokenSource::Configured(PathBuf::from("/from/config")));
    }

    #[test]
    fn test_explicit_path_ignores_broken_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "token_file = [");

        let source = Config::resolve_token_source(Some(Path::new("/from/flag")), &path).unwrap();
        assert_eq!(source, TokenSource::Explicit(PathBuf::from("/from/flag")));

        assert!(Config::resolve_token_source(None, &path).is_err());
    }

    #[test]
    fn test_global_config_path() {
        assert!(Config::global_config_path().ends_with("graphme/config.toml"));
    }
}
