//! Store configuration loaded from TOML.
//!
//! # Responsibility
//! - Carry tunables for the local article store.
//! - Load them from an optional TOML file with per-field defaults.
//!
//! # Invariants
//! - A missing file yields `StoreConfig::default()`.
//! - `storage_key` is never empty after `validate()`.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Storage key used by existing persisted collections.
pub const DEFAULT_STORAGE_KEY: &str = "news_articles";
/// Simulated network latency per store call.
pub const DEFAULT_LATENCY_MS: u64 = 500;

/// Tunables for `LocalArticleStore`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Key holding the serialized collection.
    pub storage_key: String,
    /// Delay applied before every store operation.
    pub latency_ms: u64,
    /// Write the sample collection when nothing is persisted yet.
    pub seed_on_first_run: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            latency_ms: DEFAULT_LATENCY_MS,
            seed_on_first_run: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config file `{}`: {source}", path.display())
            }
            Self::Parse {
                path: Some(path),
                source,
            } => write!(f, "failed to parse config file `{}`: {source}", path.display()),
            Self::Parse { path: None, source } => write!(f, "failed to parse config: {source}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

impl StoreConfig {
    /// Loads configuration from `path`, falling back to defaults when absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|source| ConfigError::Parse { path: None, source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, StoreConfig, DEFAULT_LATENCY_MS, DEFAULT_STORAGE_KEY};

    #[test]
    fn empty_document_uses_defaults() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.latency_ms, DEFAULT_LATENCY_MS);
        assert!(config.seed_on_first_run);
    }

    #[test]
    fn partial_document_overrides_named_fields_only() {
        let config = StoreConfig::from_toml_str("latency_ms = 0\nseed_on_first_run = false").unwrap();
        assert_eq!(config.latency_ms, 0);
        assert!(!config.seed_on_first_run);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn blank_storage_key_is_rejected() {
        let err = StoreConfig::from_toml_str("storage_key = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = StoreConfig::from_toml_str("page_size = 20").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, StoreConfig::default());
    }
}
