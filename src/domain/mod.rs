//! Domain models and types for the export core.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ResourceId`])
//! - **Export vocabulary** ([`ExportFormat`], [`UserRole`])
//! - **Error types** ([`PortalError`], [`ExportError`], [`StorageError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! Fallible setup operations return [`Result<T, PortalError>`]. The export
//! pipeline itself returns `Result<ExportArtifact, ExportError>` so callers
//! can match on the failure taxonomy:
//!
//! ```rust
//! use belediye_export::domain::ExportError;
//!
//! fn message(err: &ExportError) -> &'static str {
//!     match err {
//!         ExportError::RateLimited { .. } => "Saatlik dışa aktarma sınırına ulaşıldı",
//!         ExportError::PayloadTooLarge { .. } => "Veri boyutu çok büyük",
//!         _ => "Dışa aktarma başarısız",
//!     }
//! }
//! ```

pub mod errors;
pub mod format;
pub mod ids;
pub mod result;
pub mod role;

// Re-export commonly used types for convenience
pub use errors::{ExportError, PortalError, StorageError};
pub use format::ExportFormat;
pub use ids::ResourceId;
pub use result::Result;
pub use role::UserRole;
