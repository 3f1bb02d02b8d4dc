//! Plain-text report serializer, standing in for PDF output

use super::{FormatSerializer, SerializedExport};
use crate::domain::ExportError;
use serde_json::Value;

/// Writes the pretty-printed value as UTF-8 text
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSerializer;

impl FormatSerializer for PlainTextSerializer {
    fn serialize(&self, value: &Value) -> Result<SerializedExport, ExportError> {
        let mut text = serde_json::to_string_pretty(value)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        text.push('\n');

        Ok(SerializedExport {
            bytes: text.into_bytes(),
            extension: "txt",
            content_type: "text/plain; charset=utf-8",
        })
    }
}
