//! Export artifact and checksum helpers

use crate::core::serialize::SerializedExport;
use crate::domain::ExportFormat;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Downloadable result of a successful export
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArtifact {
    /// Correlates the artifact with its log lines
    pub export_id: Uuid,
    pub file_name: String,
    pub extension: &'static str,
    pub content_type: &'static str,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    /// Hex SHA-256 of `bytes`
    pub checksum: String,
    pub format: ExportFormat,
    pub sanitized: bool,
    pub created_at: DateTime<Utc>,
}

impl ExportArtifact {
    pub(crate) fn new(
        serialized: SerializedExport,
        file_name: String,
        format: ExportFormat,
        sanitized: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        let checksum = calculate_checksum_bytes(&serialized.bytes);

        Self {
            export_id: Uuid::new_v4(),
            file_name,
            extension: serialized.extension,
            content_type: serialized.content_type,
            bytes: serialized.bytes,
            checksum,
            format,
            sanitized,
            created_at,
        }
    }

    /// Artifact size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check the bytes still match the recorded checksum
    pub fn verify(&self) -> bool {
        calculate_checksum_bytes(&self.bytes) == self.checksum
    }
}

/// Calculate the hex SHA-256 checksum of raw bytes
pub fn calculate_checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{result:x}")
}
