//! Core error types for joblens.
//!
//! This module defines the shared error type for query construction and
//! filter translation, plus the configuration error type. Unknown filter
//! spellings are fatal: they indicate a misconfigured caller, not a
//! transient condition, so there is no retry path for them.

use thiserror::Error;

/// Shared error type for query validation and filter translation.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Unknown job-type spelling supplied by a caller
    #[error("unknown job type '{0}' (expected fullTime, partTime, contractual, internships or volunteer)")]
    UnknownJobType(String),

    /// Unknown time-posted window supplied by a caller
    #[error("unknown time-posted window '{0}' (expected pastDay, pastWeek or pastMonth)")]
    UnknownTimePosted(String),

    /// Unknown work-arrangement spelling supplied by a caller
    #[error("unknown work arrangement '{0}' (expected onSite, hybrid or remote)")]
    UnknownArrangement(String),

    /// Unknown date-posted filter spelling supplied by a caller
    #[error("unknown date-posted filter '{0}' (expected any_time, past_month, past_week or past_day)")]
    UnknownDateFilter(String),

    /// Validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
