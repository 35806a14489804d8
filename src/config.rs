//! Configuration management for the contact form validator.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Nothing here writes to stdout, which the CLI reserves for results.

use crate::error::{ConfigError, ConfigResult};
use crate::validation::{DEFAULT_MESSAGE_MIN_LENGTH, DEFAULT_NAME_MIN_LENGTH};
use std::env;
use std::path::PathBuf;

/// Configuration for the validator and its submission log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minimum trimmed length of the name field (default: 2)
    pub name_min_length: usize,

    /// Minimum trimmed length of the message field (default: 10)
    pub message_min_length: usize,

    /// JSON file backing the submission log; `None` keeps submissions in memory
    pub submission_store_path: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `FORM_NAME_MIN_LENGTH`: Minimum name length (default: 2)
    /// - `FORM_MESSAGE_MIN_LENGTH`: Minimum message length (default: 10)
    /// - `SUBMISSION_STORE_PATH`: File to persist accepted submissions in
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let name_min_length = Self::parse_env_usize("FORM_NAME_MIN_LENGTH", DEFAULT_NAME_MIN_LENGTH)?;
        let message_min_length =
            Self::parse_env_usize("FORM_MESSAGE_MIN_LENGTH", DEFAULT_MESSAGE_MIN_LENGTH)?;

        let submission_store_path = env::var("SUBMISSION_STORE_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            name_min_length,
            message_min_length,
            submission_store_path,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name_min_length: DEFAULT_NAME_MIN_LENGTH,
            message_min_length: DEFAULT_MESSAGE_MIN_LENGTH,
            submission_store_path: None,
            log_level: "error".to_string(),
        }
    }
}
