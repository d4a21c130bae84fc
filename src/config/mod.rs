//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TOPSIS_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use topsis_ranker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod email;
mod error;
mod limits;
mod scoring;
mod server;

pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use limits::LimitsConfig;
pub use scoring::ScoringConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so the service starts with no environment at
/// all. Mail delivery is only available when the `email` section is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upload and matrix size limits
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Scorer settings
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Email configuration (Resend)
    #[serde(default)]
    pub email: Option<EmailConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TOPSIS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TOPSIS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TOPSIS__EMAIL__RESEND_API_KEY=...` -> `email.resend_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TOPSIS")
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
        self.limits.validate()?;
        if let Some(email) = &self.email {
            email.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Check if result emails can be sent
    pub fn mail_enabled(&self) -> bool {
        self.email.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::DegeneratePolicy;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "TOPSIS__SERVER__PORT",
        "TOPSIS__SERVER__ENVIRONMENT",
        "TOPSIS__LIMITS__MAX_ROWS",
        "TOPSIS__SCORING__DEGENERATE_POLICY",
        "TOPSIS__EMAIL__RESEND_API_KEY",
        "TOPSIS__EMAIL__FROM_EMAIL",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_no_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.limits.max_rows, 10_000);
        assert!(!config.mail_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("TOPSIS__SERVER__PORT", "3000");
        env::set_var("TOPSIS__LIMITS__MAX_ROWS", "50");
        env::set_var("TOPSIS__SCORING__DEGENERATE_POLICY", "reject");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.limits.max_rows, 50);
        assert_eq!(config.scoring.degenerate_policy, DegeneratePolicy::Reject);
    }

    #[test]
    fn test_load_email_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("TOPSIS__EMAIL__RESEND_API_KEY", "re_test");
        env::set_var("TOPSIS__EMAIL__FROM_EMAIL", "ranker@example.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.mail_enabled());
        let email = config.email.as_ref().unwrap();
        assert_eq!(email.resend_api_key, "re_test");
        assert_eq!(email.from_email, "ranker@example.com");
        assert_eq!(email.subject, "TOPSIS Result");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_section_fails_validation() {
        let config = AppConfig {
            email: Some(EmailConfig {
                resend_api_key: "bad".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("TOPSIS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }
}
