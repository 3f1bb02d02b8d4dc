//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels, overridable through `RUST_LOG`
//! - Local JSON file logging with rotation
//! - A dedicated `audit` target for export audit events
//!
//! # Example
//!
//! ```no_run
//! use belediye_export::logging::init_logging;
//! use belediye_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export
///
/// # Example
///
/// ```no_run
/// use belediye_export::log_export_start;
/// use belediye_export::domain::{ExportFormat, ResourceId};
///
/// let resource_id = ResourceId::new("duyurular").unwrap();
/// log_export_start!(ExportFormat::Csv, &resource_id);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($format:expr, $resource_id:expr) => {
        tracing::info!(
            format = %$format,
            resource_id = %$resource_id,
            "Starting export"
        );
    };
}

/// Log a completed export
///
/// # Example
///
/// ```no_run
/// use belediye_export::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!("rapor.csv", 2048, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($file_name:expr, $bytes:expr, $duration:expr) => {
        tracing::info!(
            file_name = %$file_name,
            bytes = $bytes,
            duration_ms = $duration.as_millis(),
            "Export completed"
        );
    };
}

/// Log an export refused with a typed failure
///
/// # Example
///
/// ```no_run
/// use belediye_export::log_export_refused;
/// use belediye_export::domain::ExportError;
///
/// let error = ExportError::FormatNotPermitted("json".to_string());
/// log_export_refused!(&error);
/// ```
#[macro_export]
macro_rules! log_export_refused {
    ($error:expr) => {
        tracing::warn!(
            code = $error.code(),
            error = %$error,
            "Export refused"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use belediye_export::log_error_with_context;
/// use belediye_export::domain::PortalError;
///
/// let error = PortalError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
