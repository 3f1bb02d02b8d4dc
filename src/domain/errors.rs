//! Domain error types
//!
//! This module defines the error hierarchy for the export core.
//! All errors are domain-specific and don't expose third-party types.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Main portal error type
///
/// This is the primary error type used throughout the crate for
/// configuration, storage and I/O failures. Failures of the export
/// pipeline itself are reported through [`ExportError`].
#[derive(Debug, Error)]
pub enum PortalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Export pipeline errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Upstream data source errors
    #[error("Data source error: {0}")]
    Source(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Export pipeline failures
///
/// Every variant is recoverable and returned to the caller of
/// [`ExportOrchestrator::run_export`](crate::core::export::ExportOrchestrator::run_export)
/// so the rendering layer can show a specific message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// Hourly quota exhausted
    #[error("Export rate limit reached, resets at {reset_time}")]
    RateLimited { reset_time: DateTime<Utc> },

    /// Payload exceeds the configured ceiling
    #[error("Export payload too large: {size_mb:.2} MB exceeds {max_size_mb:.2} MB")]
    PayloadTooLarge { size_mb: f64, max_size_mb: f64 },

    /// Tabular format requested for non-tabular data
    #[error("Data shape is not supported by the {format} format: {reason}")]
    UnsupportedShape { format: String, reason: String },

    /// JSON requested without the role or flag entitlement
    #[error("Format {0} is not permitted for the current role")]
    FormatNotPermitted(String),

    /// Unexpected failure while serializing the artifact
    #[error("Failed to serialize export: {0}")]
    Serialization(String),
}

impl ExportError {
    /// Short machine-readable code for logs and UI lookups
    pub fn code(&self) -> &'static str {
        match self {
            Self::RateLimited { .. } => "rate_limited",
            Self::PayloadTooLarge { .. } => "payload_too_large",
            Self::UnsupportedShape { .. } => "unsupported_shape",
            Self::FormatNotPermitted(_) => "format_not_permitted",
            Self::Serialization(_) => "serialization_failure",
        }
    }

    /// Whether retrying the same request later can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

/// Key-value storage errors
///
/// Raised by [`KeyValueStore`](crate::core::ratelimit::KeyValueStore)
/// implementations. The rate limiter never surfaces these to export callers.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store cannot be read or written
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A stored value could not be decoded
    #[error("Corrupt value under key '{key}': {message}")]
    Corrupt { key: String, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PortalError {
    fn from(err: toml::de::Error) -> Self {
        PortalError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Unavailable(err.to_string())
    }
}
