//! # meta-config
//!
//! Layered configuration loading for Metafield using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`METAFIELD_*` prefix, `__` as separator)
//! 2. Project-level `.metafield/config.toml`
//! 3. User-level `~/.config/metafield/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `METAFIELD_GENERAL__SNAPSHOT_PATH` -> `general.snapshot_path`,
//! `METAFIELD_VALIDATION__DERIVE_NAME_FROM_LABEL` -> `validation.derive_name_from_label`.
//!
//! # Usage
//!
//! ```no_run
//! use meta_config::MetaConfig;
//!
//! let config = MetaConfig::load_with_dotenv().expect("config");
//! println!("registry snapshot: {}", config.general.snapshot_path);
//! ```

mod error;
mod general;
mod validation;

pub use error::ConfigError;
pub use general::{DEFAULT_SNAPSHOT_PATH, GeneralConfig};
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MetaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl MetaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory
    /// or one of its parents, if there is one.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".metafield/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("METAFIELD_").split("__"))
    }

    /// Reject values that deserialize but cannot be used.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.general.snapshot_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.snapshot_path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("metafield").join("config.toml"))
    }
}
