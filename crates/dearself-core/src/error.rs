//! Core error types for dearself-core.
//!
//! One umbrella `CoreError` with thiserror sub-enums per concern, so callers
//! can match on the failure class without string inspection.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dearself-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Remote store (PostgREST) errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication/session errors
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Client-side validation errors
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

/// Remote store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport-level failure (connection, TLS, DNS)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("Store API error for '{table}': HTTP {status}: {message}")]
    Api {
        table: String,
        status: u16,
        message: String,
    },

    /// Response body did not match the expected row shape
    #[error("Unexpected response from '{table}': {message}")]
    BadResponse { table: String, message: String },

    /// Count query answered without a usable Content-Range header
    #[error("Missing row count in response from '{table}'")]
    MissingCount { table: String },
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Credential check rejected by the auth service
    #[error("Sign-in failed: {0}")]
    SignInFailed(String),

    /// Registration rejected by the auth service
    #[error("Sign-up failed: {0}")]
    SignUpFailed(String),

    /// An operation required a session but none is active
    #[error("Not signed in")]
    NotSignedIn,

    /// Stored session could not be read from or written to the keyring
    #[error("Credential store error: {0}")]
    CredentialStore(String),

    /// Auth service transport failure
    #[error("Auth request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Auth service answered with an unexpected body
    #[error("Malformed auth response: {0}")]
    BadResponse(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// The store URL/key pair is absent
    #[error("Remote store is not configured; run `dearself config init` first")]
    StoreNotConfigured,

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Client-side validation errors. Writes are never attempted when one of
/// these fires; the prior view state is untouched.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Required text field is empty
    #[error("'{field}' must not be empty")]
    EmptyField { field: String },

    /// Numeric amount must be positive
    #[error("'{field}' must be greater than zero (got {value})")]
    NonPositiveAmount { field: String, value: i64 },

    /// Numeric amount must not be negative
    #[error("'{field}' must not be negative (got {value})")]
    NegativeAmount { field: String, value: i64 },

    /// Value outside its allowed range
    #[error("'{field}' must be within {min}..={max} (got {value})")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Unknown catalog entry
    #[error("Unknown breathing pattern: '{0}'")]
    UnknownPattern(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
