//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ADVENTURE_SHERPA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use adventure_sherpa::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url);
//! ```

mod api;
mod error;
mod wizard;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use wizard::WizardConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Adventure Sherpa wizard.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Portal API configuration (base URL, timeout)
    #[serde(default)]
    pub api: ApiConfig,

    /// Wizard shell configuration (auto-open behavior)
    #[serde(default)]
    pub wizard: WizardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ADVENTURE_SHERPA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ADVENTURE_SHERPA__API__BASE_URL=https://portal.example` -> `api.base_url`
    /// - `ADVENTURE_SHERPA__API__TIMEOUT_SECS=10` -> `api.timeout_secs`
    /// - `ADVENTURE_SHERPA__WIZARD__AUTO_OPEN=true` -> `wizard.auto_open`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ADVENTURE_SHERPA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        Ok(())
    }
}
