//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! and optional files using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `PROMETHEE_GAMMA` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use promethee_gamma::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("P starts at {}", config.elicitation.initial_p_min);
//! ```

mod elicitation;
mod error;
mod logging;

pub use elicitation::ElicitationConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "PROMETHEE_GAMMA";

/// Root application configuration
///
/// Every section has defaults, so loading succeeds with no environment at all.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Initial P bounds and display convention
    #[serde(default)]
    pub elicitation: ElicitationConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROMETHEE_GAMMA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROMETHEE_GAMMA__ELICITATION__INITIAL_P_MIN=2` -> `elicitation.initial_p_min = 2`
    /// - `PROMETHEE_GAMMA__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Load configuration from a file, then let environment variables override it
    ///
    /// The file format is inferred from the extension (`.toml`, `.json`, ...).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(Some(path))
    }

    fn load_with(path: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
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
        self.elicitation.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
