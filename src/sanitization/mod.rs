//! Sanitization module
//!
//! This module removes personal data from export payloads before they leave
//! the portal, following KVKK (Kişisel Verilerin Korunması Kanunu).
//!
//! # Architecture
//!
//! The sanitization pipeline consists of:
//! - **Classification**: field names are matched against PII and KVKK marker tables
//! - **Masking**: sensitive values keep at most their first and last two characters
//! - **Redaction**: a structural walk applying the masking rule to classified fields
//! - **Audit**: one structured record per export attempt
//!
//! # Usage
//!
//! ```rust
//! use belediye_export::sanitization::{FieldClassifier, Redactor};
//! use serde_json::json;
//!
//! let redactor = Redactor::new(FieldClassifier::new());
//! let sanitized = redactor.redact(&json!({"email": "ali@example.com"}));
//! assert_eq!(sanitized["email"], "al***********om");
//! ```

pub mod audit;
pub mod classifier;
pub mod masking;
pub mod redactor;

// Re-export main types
pub use audit::{AuditLogEntry, AuditLogger};
pub use classifier::{FieldClass, FieldClassifier};
pub use masking::{mask_value, MASKED_TOKEN};
pub use redactor::Redactor;
