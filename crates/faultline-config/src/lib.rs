//! # faultline-config
//!
//! Layered configuration loading for the `faultline` CLI using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FAULTLINE_*` prefix, `__` as separator)
//! 2. Project-level `.faultline/config.toml`
//! 3. User-level `~/.config/faultline/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `FAULTLINE_OUTPUT__VIEW` -> `output.view`, `FAULTLINE_LOG__LEVEL` -> `log.level`.
//! `FAULTLINE_LOG` itself is a tracing filter read by the CLI, not a config key.
//!
//! # Usage
//!
//! ```no_run
//! use faultline_config::{FaultlineConfig, View};
//!
//! let config = FaultlineConfig::load_with_dotenv().expect("config");
//! if config.output.view == View::Public {
//!     println!("printing public projections");
//! }
//! ```

mod error;
mod log;
mod output;

pub use error::ConfigError;
pub use log::LogConfig;
pub use output::{OutputConfig, View};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Env prefix shared by every config key.
pub const ENV_PREFIX: &str = "FAULTLINE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FaultlineConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl FaultlineConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// Reads `.env` from the current directory, if present, before building
    /// the figment. Variables already set in the process win.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".faultline/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority).
        // `FAULTLINE_LOG` is the tracing filter, not a section.
        figment.merge(
            Env::prefixed(ENV_PREFIX)
                .ignore(&["LOG"])
                .split("__"),
        )
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("faultline").join("config.toml"))
    }

    /// Check values serde accepts but the CLI cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()
    }
}
