//! Error types for the contact form validator.
//!
//! Field rule violations are plain values (see [`crate::domain::FieldError`]);
//! the enums here cover configuration and storage, which can genuinely fail.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors that can occur when reading or writing the key/value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backing file could not be read or written
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value is not valid JSON for the expected shape
    #[error("Corrupt store data: {0}")]
    Json(#[from] serde_json::Error),

    /// A store or log lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,

    /// The last stored submission id leaves no room for another
    #[error("Submission id overflow after id {0}")]
    IdOverflow(u64),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
