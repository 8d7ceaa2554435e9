//! Configuration module
//!
//! Settings are read from a TOML file (default
//! `~/.config/user-directory/config.toml`). Every section and field is
//! optional; anything missing falls back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "user-directory";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

/// Which key-value backend holds the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

/// What to do when a stored value cannot be read or decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Treat the value as missing: no users, no session.
    #[default]
    ReturnEmpty,
    /// Surface the failure to the caller.
    Propagate,
}

/// How new user ids are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Decimal milliseconds since the epoch, bumped past the largest
    /// numeric id already stored.
    #[default]
    Timestamp,
    /// Random UUID v4.
    Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory for the file backend, one `<key>.json` per stored key.
    pub data_dir: PathBuf,
    pub on_decode_error: DecodePolicy,
    pub id_strategy: IdStrategy,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: default_data_dir(),
            on_decode_error: DecodePolicy::ReturnEmpty,
            id_strategy: IdStrategy::Timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Login and password that sign in as the built-in administrator.
    pub admin_sentinel: String,
    /// Compare the supplied password with the stored one. When off, a
    /// matching login alone is enough to sign in.
    pub verify_password: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_sentinel: "admin".to_string(),
            verify_password: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `user_directory=debug`.
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

pub fn default_data_dir() -> PathBuf {
    dirs_next::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.storage.backend, StorageBackend::File);
        assert_eq!(cfg.storage.on_decode_error, DecodePolicy::ReturnEmpty);
        assert_eq!(cfg.storage.id_strategy, IdStrategy::Timestamp);
        assert_eq!(cfg.auth.admin_sentinel, "admin");
        assert!(cfg.auth.verify_password);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [storage]
            backend = "memory"
            on_decode_error = "propagate"

            [auth]
            verify_password = false
            "#,
        )
        .unwrap();

        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        assert_eq!(cfg.storage.on_decode_error, DecodePolicy::Propagate);
        assert_eq!(cfg.storage.id_strategy, IdStrategy::Timestamp);
        assert!(!cfg.auth.verify_password);
        assert_eq!(cfg.auth.admin_sentinel, "admin");
        assert_eq!(cfg.logging.format, "pretty");
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = AppConfig::from_toml_str("[storage]\non_decode_error = \"ignore\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.auth.admin_sentinel, "admin");
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nid_strategy = \"uuid\"\ndata_dir = \"/tmp/users\"\n").unwrap();

        let cfg = AppConfig::load(&path).unwrap();
        assert_eq!(cfg.storage.id_strategy, IdStrategy::Uuid);
        assert_eq!(cfg.storage.data_dir, PathBuf::from("/tmp/users"));
    }
}
