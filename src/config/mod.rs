//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PORTFOLIO` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use portfolio_site::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on port {}", config.server.port);
//! ```

mod content;
mod email;
mod error;
mod server;

pub use content::{ContentConfig, ContentFormat};
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so the server starts with no environment at
/// all: port 5000, built-in content, and a contact relay that reports
/// failure until mail credentials are supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, static bundle)
    #[serde(default)]
    pub server: ServerConfig,

    /// Email configuration (relay mailbox and provider credentials)
    #[serde(default)]
    pub email: EmailConfig,

    /// Content document source
    #[serde(default)]
    pub content: ContentConfig,
}

impl AppConfig {
    /// Reads `PORTFOLIO__<SECTION>__<KEY>` variables, after loading a `.env`
    /// file when one exists.
    ///
    /// # Environment Variable Format
    ///
    /// - `PORTFOLIO__SERVER__PORT=5000` -> `server.port = 5000`
    /// - `PORTFOLIO__EMAIL__ACCOUNT=me@example.com` -> `email.account = ...`
    /// - `PORTFOLIO__EMAIL__API_KEY=re_...` -> `email.api_key = ...`
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
                    .prefix("PORTFOLIO")
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
        self.server.validate()?;
        self.email.validate()?;
        self.content.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
