//! JSON serializer

use super::{FormatSerializer, SerializedExport};
use crate::domain::ExportError;
use serde_json::Value;

/// Pretty-printed JSON in the value's own key order
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl FormatSerializer for JsonSerializer {
    fn serialize(&self, value: &Value) -> Result<SerializedExport, ExportError> {
        let bytes =
            serde_json::to_vec_pretty(value).map_err(|e| ExportError::Serialization(e.to_string()))?;

        Ok(SerializedExport {
            bytes,
            extension: "json",
            content_type: "application/json",
        })
    }
}
