// Belediye Export - Sanitized data exports for municipal portals
// Copyright (c) 2025 Belediye Portal Contributors
// Licensed under the MIT License

//! # Belediye Export
//!
//! Export core of a municipal citizen-services portal. Data leaving the
//! portal as PDF, spreadsheet, CSV or JSON passes through one pipeline that
//! enforces KVKK redaction, an hourly quota, a size ceiling and an audit
//! trail.
//!
//! ## Overview
//!
//! - **Redacting** fields whose names mark personal or special-category data
//! - **Limiting** exports per rolling hour with persisted quota state
//! - **Gating** payloads above the configured size
//! - **Auditing** every export attempt as a structured record
//! - **Serializing** the sanitized value into the requested format
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export orchestration, rate limiting and serializers
//! - [`sanitization`] - Field classification, masking, redaction and audit
//! - [`adapters`] - Sources of the exported JSON documents
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use belediye_export::config::{load_config, RoleConfiguration};
//! use belediye_export::core::export::{ExportOrchestrator, ExportRequest};
//! use belediye_export::domain::ExportFormat;
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("belediye.toml")?;
//!     let role = RoleConfiguration::from_env(&config.export)?;
//!     let orchestrator = ExportOrchestrator::from_config(&config, role);
//!
//!     let request = ExportRequest::new(
//!         json!([{"ad": "Ahmet", "tcNo": "12345678901"}]),
//!         "basvurular",
//!         ExportFormat::Csv,
//!     );
//!     let artifact = orchestrator.run_export(request)?;
//!
//!     println!("{} ({} bytes)", artifact.file_name, artifact.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Setup code returns [`domain::PortalError`]. The export operation returns
//! [`domain::ExportError`], one variant per refusal reason:
//!
//! ```rust
//! use belediye_export::domain::ExportError;
//!
//! fn retry_later(err: &ExportError) -> bool {
//!     err.is_retryable()
//! }
//! ```
//!
//! ## Logging
//!
//! Structured logging uses the `tracing` crate. Audit entries are emitted on
//! the `audit` target:
//!
//! ```rust,no_run
//! tracing::info!(target: "audit", format = "csv", "Export audit");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod sanitization;
