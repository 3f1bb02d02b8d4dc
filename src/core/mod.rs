//! Core business logic for the export utility.
//!
//! # Modules
//!
//! - [`export`] - Export orchestration, size gate, artifacts and menu state
//! - [`ratelimit`] - Hourly quota with persisted state
//! - [`serialize`] - Format serializers and their registry
//!
//! # Example
//!
//! ```rust
//! use belediye_export::config::RoleConfiguration;
//! use belediye_export::core::export::{ExportOrchestrator, ExportRequest};
//! use belediye_export::core::ratelimit::MemoryStore;
//! use belediye_export::domain::{ExportFormat, UserRole};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let role = RoleConfiguration::new(false, UserRole::Citizen, 100, 10.0).unwrap();
//! let orchestrator = ExportOrchestrator::new(role, Arc::new(MemoryStore::new()));
//!
//! let request = ExportRequest::new(
//!     json!([{"ad": "Ayşe", "telefon": "05321234567"}]),
//!     "basvurular",
//!     ExportFormat::Csv,
//! );
//! let artifact = orchestrator.run_export(request).unwrap();
//!
//! assert_eq!(artifact.file_name, "basvurular.csv");
//! assert_eq!(orchestrator.rate_limit_status().remaining, 99);
//! ```

pub mod export;
pub mod ratelimit;
pub mod serialize;
