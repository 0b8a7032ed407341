//! Configuration management for the rolodex assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables, with a `.env` file picked up when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the interactive assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default window for the `birthdays` command, in days (default: 7)
    pub birthday_window_days: i64,

    /// Prompt shown before each input line
    pub prompt: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLODEX_BIRTHDAY_WINDOW_DAYS`: default `birthdays` window (default: 7)
    /// - `ROLODEX_PROMPT`: input prompt (default: "Enter a command: ")
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_i64("ROLODEX_BIRTHDAY_WINDOW_DAYS", 7)?;
        if birthday_window_days <= 0 {
            return Err(ConfigError::InvalidValue {
                var: "ROLODEX_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let prompt = env::var("ROLODEX_PROMPT").unwrap_or_else(|_| "Enter a command: ".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            prompt,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: 7,
            prompt: "Enter a command: ".to_string(),
            log_level: "error".to_string(),
        }
    }
}
