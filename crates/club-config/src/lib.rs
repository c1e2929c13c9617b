//! # club-config
//!
//! Layered configuration loading for clubhouse using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CLUB_*` prefix, `__` as separator)
//! 2. Project-level `.clubhouse/config.toml`
//! 3. User-level `~/.config/clubhouse/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CLUB_API__BASE_URL` -> `api.base_url`, `CLUB_SYNC__CONCURRENCY` -> `sync.concurrency`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use club_config::ClubConfig;
//!
//! let config = ClubConfig::load_with_dotenv().expect("config");
//!
//! if config.api.is_configured() {
//!     println!("Backend: {}", config.api.base_url);
//! }
//! ```

mod api;
mod error;
mod general;
mod sync;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use sync::SyncConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local configuration directory name.
pub const PROJECT_DIR: &str = ".clubhouse";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClubConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ClubConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CLUB_").split("__"))
    }

    /// Check every section the CLI depends on.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] reported by a section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.sync.validate()?;
        self.general.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("clubhouse").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ClubConfig::default();
        assert!(!config.api.is_configured());
        assert_eq!(config.sync.concurrency, 4);
        assert_eq!(config.general.default_limit, 50);
    }

    #[test]
    fn default_config_does_not_validate() {
        let config = ClubConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }
}
