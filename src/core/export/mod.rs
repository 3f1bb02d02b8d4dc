//! Export pipeline
//!
//! [`ExportOrchestrator::run_export`] composes the rate limiter, the size
//! gate, the redactor, the audit logger and the format serializers into a
//! single operation returning an [`ExportArtifact`] or a typed
//! [`ExportError`](crate::domain::ExportError).

pub mod artifact;
pub mod menu;
pub mod orchestrator;
pub mod request;
pub mod size;

pub use artifact::{calculate_checksum_bytes, ExportArtifact};
pub use menu::{ExportMenu, ExportOption};
pub use orchestrator::ExportOrchestrator;
pub use request::ExportRequest;
pub use size::{SizeCheck, SizeValidator};
