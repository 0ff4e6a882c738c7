//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TOOL_DISPATCH` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use tool_dispatch::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod selector;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use selector::SelectorConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Tool selector configuration
    #[serde(default)]
    pub selector: SelectorConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TOOL_DISPATCH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TOOL_DISPATCH__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TOOL_DISPATCH__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    /// - `TOOL_DISPATCH__SELECTOR__UNKNOWN_TOOLS=drop` -> `selector.unknown_tools = Drop`
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
                    .prefix("TOOL_DISPATCH")
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
        self.ai.validate()?;
        self.selector.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tools::UnknownToolPolicy;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "TOOL_DISPATCH__AI__OPENAI_API_KEY",
        "TOOL_DISPATCH__AI__MODEL",
        "TOOL_DISPATCH__SERVER__PORT",
        "TOOL_DISPATCH__SERVER__ENVIRONMENT",
        "TOOL_DISPATCH__SELECTOR__UNKNOWN_TOOLS",
        "TOOL_DISPATCH__SELECTOR__ORCHESTRATION_PROMPT",
    ];

    fn set_minimal_env() {
        env::set_var("TOOL_DISPATCH__AI__OPENAI_API_KEY", "sk-test");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(
            config.ai.openai_api_key.as_ref().map(|k| k.expose_secret().as_str()),
            Some("sk-test")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert_eq!(config.selector.unknown_tools, UnknownToolPolicy::PassThrough);
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        );
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("TOOL_DISPATCH__SERVER__PORT", "3000");
        env::set_var("TOOL_DISPATCH__SERVER__ENVIRONMENT", "production");
        env::set_var("TOOL_DISPATCH__AI__MODEL", "gpt-4o");
        env::set_var("TOOL_DISPATCH__SELECTOR__UNKNOWN_TOOLS", "drop");
        env::set_var("TOOL_DISPATCH__SELECTOR__ORCHESTRATION_PROMPT", "Pick tools.");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.ai.model, "gpt-4o");
        assert_eq!(config.selector.unknown_tools, UnknownToolPolicy::Drop);
        assert_eq!(
            config.selector.orchestration_prompt.as_deref(),
            Some("Pick tools.")
        );
    }
}
