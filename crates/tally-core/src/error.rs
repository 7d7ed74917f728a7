//! Core error types for tally-core.
//!
//! This module defines the error hierarchy using thiserror. Everything that
//! can go wrong is either fatal at startup (a corrupt streak store), logged
//! and survived (a failed store write, a failed platform send), or reported
//! back to the triggering user as a generic failure.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tally-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Streak store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Chat gateway errors
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Form validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Streak-store-specific errors.
///
/// `Corrupt` and `ReadFailed` block startup: a store file that exists but
/// cannot be parsed is an operator problem, not something to paper over.
/// `WriteFailed` is survivable -- the in-memory state stays authoritative
/// and the divergence from disk is logged.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file exists but cannot be parsed
    #[error("Streak store at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store file exists but cannot be read
    #[error("Failed to read streak store at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persisting the mapping to disk failed
    #[error("Failed to write streak store at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Config directory cannot be determined or created
    #[error("Failed to resolve config directory: {0}")]
    DirUnavailable(String),
}

/// Chat gateway errors.
///
/// None of these are fatal to the process; the router logs them and sends
/// the triggering user a generic failure reply where a reply channel exists.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No webhook URL / credentials stored
    #[error("Gateway not configured: {0}")]
    NotConfigured(&'static str),

    /// The requested action is outside this gateway's capability
    #[error("Gateway does not support '{0}'")]
    Unsupported(&'static str),

    /// The configured check-in channel is missing at send time
    #[error("Check-in channel not found")]
    ChannelNotFound,

    /// The platform rejected the request
    #[error("Platform returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never reached the platform
    #[error("Failed to send to platform: {0}")]
    SendFailed(#[from] reqwest::Error),

    /// Credential storage failure
    #[error("Credential store error: {0}")]
    Credentials(String),

    /// The pipe to the SDK adapter is broken
    #[error("Adapter emit failed: {0}")]
    Adapter(String),
}

/// Check-in form validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Submission carries the wrong number of answers
    #[error("Expected {expected} answers, got {got}")]
    AnswerCount { expected: usize, got: usize },

    /// A required answer is empty
    #[error("Answer for '{question}' is empty")]
    EmptyAnswer { question: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
