//! Configuration for `pick`.
//!
//! Raw TOML structs keep `Option` fields; validated pieces ([`SuitMenu`],
//! [`Strategy`]) are checked at the deserialization boundary, and [`Round`]
//! resolves everything into the values a round is played with.

mod menu;
mod round;
mod strategy;

pub use menu::{MenuConfigError, SUIT_MENU_SIZE, SuitMenu};
pub use round::{Round, STRATEGY_ENV};
pub use strategy::{Strategy, StrategyError};

use serde::Deserialize;
use std::{
    env, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "PICK_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct PickConfig {
    pub round: Option<RoundConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoundConfig {
    pub menu: Option<SuitMenu>,
    pub strategy: Option<Strategy>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl PickConfig {
    /// Load from [`PickConfig::path`]. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.filter.as_deref())
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|path| !path.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".pick").join("config.toml"))
}
