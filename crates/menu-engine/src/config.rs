//! Runtime configuration.
//!
//! Loaded from a TOML file whose path comes from the `MENU_CONFIG` environment variable. Every
//! field has a default, so a missing file or a partial file is fine:
//!
//! ```toml
//! [store]
//! buffer_size = 64
//!
//! [menu]
//! seed_on_empty = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable holding the config file path.
pub const CONFIG_ENV: &str = "MENU_CONFIG";

/// Default path used when `MENU_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "menu.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Collection actor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Request channel capacity of each collection actor.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSettings {
    /// Insert the default menu when the items collection starts empty.
    #[serde(default = "default_seed_on_empty")]
    pub seed_on_empty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub menu: MenuSettings,
}

fn default_buffer_size() -> usize {
    32
}

fn default_seed_on_empty() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            seed_on_empty: default_seed_on_empty(),
        }
    }
}

impl MenuConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: MenuConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`. A file that does not exist yields the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                info!(path = %path.display(), "Loading config");
                Self::from_toml_str(&contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load from the path in `MENU_CONFIG`, or [`DEFAULT_CONFIG_PATH`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_file(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "store.buffer_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = MenuConfig::from_toml_str("").unwrap();
        assert_eq!(config, MenuConfig::default());
        assert_eq!(config.store.buffer_size, 32);
        assert!(config.menu.seed_on_empty);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = MenuConfig::from_toml_str("[menu]\nseed_on_empty = false\n").unwrap();
        assert!(!config.menu.seed_on_empty);
        assert_eq!(config.store.buffer_size, 32);
    }

    #[test]
    fn test_zero_buffer_is_invalid() {
        let result = MenuConfig::from_toml_str("[store]\nbuffer_size = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[store\nbuffer_size = ").unwrap();
        let result = MenuConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_loads_values_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[store]\nbuffer_size = 8\n\n[menu]\nseed_on_empty = false").unwrap();
        let config = MenuConfig::from_file(file.path()).unwrap();
        assert_eq!(config.store.buffer_size, 8);
        assert!(!config.menu.seed_on_empty);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MenuConfig::from_file(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, MenuConfig::default());
    }
}
