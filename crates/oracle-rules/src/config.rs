//! Rules configuration loaded from TOML.
//!
//! Configuration is optional: when no file exists every setting takes its
//! default. A file looks like:
//!
//! ```toml
//! castling_landing = "compatible"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Which destination squares castling moves are reported with.
///
/// Both modes move the king to the c- or g-file with the rook beside it.
/// They differ only in how many move entries a caller sees for each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CastlingLanding {
    /// One move per side: long castling lands on the c-file, short on the g-file.
    #[default]
    Canonical,
    /// Long castling is also offered landing on the a- and b-files, and short
    /// castling on the h-file, for callers that address castling by clicking
    /// the rook.
    Compatible,
}

/// Settings for [`GameRules`](crate::GameRules).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Castling destination reporting. Defaults to canonical.
    #[serde(default)]
    pub castling_landing: CastlingLanding,
}

impl RulesConfig {
    /// Loads configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration file path, `oracle.toml` in the
    /// current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("oracle.toml")
    }
}
