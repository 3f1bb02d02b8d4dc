//! Export request

use crate::domain::{ExportFormat, ResourceId};
use serde_json::Value;

/// Base name used when the caller supplies none
pub const DEFAULT_FILENAME: &str = "export";

/// One export invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub data: Value,
    /// User-facing base name, without extension
    pub filename: String,
    pub resource_id: Option<ResourceId>,
    pub format: ExportFormat,
}

impl ExportRequest {
    pub fn new(data: Value, filename: impl Into<String>, format: ExportFormat) -> Self {
        Self {
            data,
            filename: filename.into(),
            resource_id: None,
            format,
        }
    }

    pub fn with_resource_id(mut self, resource_id: ResourceId) -> Self {
        self.resource_id = Some(resource_id);
        self
    }

    /// Resource ID for the audit trail, `unknown` when absent
    pub fn resource_id_or_unknown(&self) -> ResourceId {
        self.resource_id.clone().unwrap_or_else(ResourceId::unknown)
    }

    /// File name for the artifact: the base name with path separators
    /// replaced, plus the serializer's extension
    pub fn file_name(&self, extension: &str) -> String {
        let base: String = self
            .filename
            .trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '\0' => '_',
                c => c,
            })
            .collect();
        let base = base.trim_start_matches('.');
        let base = if base.is_empty() {
            DEFAULT_FILENAME
        } else {
            base
        };
        format!("{base}.{extension}")
    }
}
