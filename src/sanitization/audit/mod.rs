//! Audit logging module
//!
//! Provides structured audit records for export attempts.

pub mod logger;

pub use logger::{AuditLogEntry, AuditLogger};
