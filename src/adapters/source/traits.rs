//! Data source abstraction
//!
//! The portal's CRUD endpoints expose each resource as a whole JSON document
//! (`GET -> JSON`). Export callers read through this trait so a file, an HTTP
//! endpoint or a fixture can supply the payload.

use crate::domain::{ResourceId, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Producer of one exportable JSON document
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Resource recorded in the audit trail
    fn resource_id(&self) -> &ResourceId;

    /// Fetch the current document
    ///
    /// # Errors
    ///
    /// Returns a source error if the document cannot be read or is not JSON.
    async fn fetch(&self) -> Result<Value>;
}
