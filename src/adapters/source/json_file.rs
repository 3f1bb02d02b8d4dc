//! Flat-file data source
//!
//! Reads a whole JSON file, the same storage the portal's endpoints use.
//! Writers replace the file wholesale, so a read may observe any complete
//! version of it.

use super::traits::DataSource;
use crate::domain::{PortalError, ResourceId, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// JSON document on the local filesystem
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    resource_id: ResourceId,
}

impl JsonFileSource {
    /// Source named after the file stem (`data/duyurular.json` -> `duyurular`)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let resource_id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| ResourceId::new(stem).ok())
            .unwrap_or_else(ResourceId::unknown);

        Self { path, resource_id }
    }

    pub fn with_resource_id(mut self, resource_id: ResourceId) -> Self {
        self.resource_id = resource_id;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    fn resource_id(&self) -> &ResourceId {
        &self.resource_id
    }

    async fn fetch(&self) -> Result<Value> {
        let raw = tokio::fs::read(&self.path).await.map_err(|e| {
            PortalError::Source(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let value = serde_json::from_slice(&raw).map_err(|e| {
            PortalError::Source(format!("Invalid JSON in {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            resource_id = %self.resource_id,
            bytes = raw.len(),
            "Loaded export source"
        );

        Ok(value)
    }
}
