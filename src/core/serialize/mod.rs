//! Format serializers
//!
//! Serializers turn a sanitized value into downloadable bytes. They are
//! looked up in a [`SerializerRegistry`] keyed by [`ExportFormat`], so a real
//! spreadsheet or PDF encoder can replace the defaults:
//!
//! | Format | Default serializer      | Extension |
//! |--------|-------------------------|-----------|
//! | json   | [`JsonSerializer`]      | `json`    |
//! | csv    | [`CsvSerializer`]       | `csv`     |
//! | xlsx   | [`CsvSerializer`]       | `csv`     |
//! | pdf    | [`PlainTextSerializer`] | `txt`     |

pub mod csv;
pub mod json;
pub mod text;

use crate::domain::{ExportError, ExportFormat};
use serde_json::Value;
use std::collections::HashMap;

pub use self::csv::CsvSerializer;
pub use self::json::JsonSerializer;
pub use self::text::PlainTextSerializer;

/// Serialized artifact content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedExport {
    pub bytes: Vec<u8>,
    /// File extension without the dot
    pub extension: &'static str,
    pub content_type: &'static str,
}

/// Converts a sanitized value into artifact bytes
pub trait FormatSerializer: Send + Sync {
    fn serialize(&self, value: &Value) -> Result<SerializedExport, ExportError>;
}

/// Serializers keyed by format
pub struct SerializerRegistry {
    serializers: HashMap<ExportFormat, Box<dyn FormatSerializer>>,
}

impl SerializerRegistry {
    /// Registry with no serializers
    pub fn empty() -> Self {
        Self {
            serializers: HashMap::new(),
        }
    }

    /// Register or replace the serializer for a format
    pub fn register(&mut self, format: ExportFormat, serializer: Box<dyn FormatSerializer>) {
        self.serializers.insert(format, serializer);
    }

    pub fn get(&self, format: ExportFormat) -> Option<&dyn FormatSerializer> {
        self.serializers.get(&format).map(|s| s.as_ref())
    }

    /// Serialize with the registered serializer
    pub fn serialize(
        &self,
        format: ExportFormat,
        value: &Value,
    ) -> Result<SerializedExport, ExportError> {
        let serializer = self.get(format).ok_or_else(|| {
            ExportError::Serialization(format!("no serializer registered for {format}"))
        })?;
        serializer.serialize(value)
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(ExportFormat::Json, Box::new(JsonSerializer));
        registry.register(ExportFormat::Csv, Box::new(CsvSerializer::new()));
        registry.register(
            ExportFormat::Xlsx,
            Box::new(CsvSerializer::for_format(ExportFormat::Xlsx)),
        );
        registry.register(ExportFormat::Pdf, Box::new(PlainTextSerializer));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Fixed;

    impl FormatSerializer for Fixed {
        fn serialize(&self, _value: &Value) -> Result<SerializedExport, ExportError> {
            Ok(SerializedExport {
                bytes: b"%PDF-1.7".to_vec(),
                extension: "pdf",
                content_type: "application/pdf",
            })
        }
    }

    #[test]
    fn test_default_registry_covers_all_formats() {
        let registry = SerializerRegistry::default();
        for format in [
            ExportFormat::Pdf,
            ExportFormat::Xlsx,
            ExportFormat::Csv,
            ExportFormat::Json,
        ] {
            assert!(registry.get(format).is_some(), "missing {format}");
        }
    }

    #[test]
    fn test_degraded_extensions() {
        let registry = SerializerRegistry::default();
        let data = json!([{"a": 1}]);
        assert_eq!(registry.serialize(ExportFormat::Xlsx, &data).unwrap().extension, "csv");
        assert_eq!(registry.serialize(ExportFormat::Pdf, &data).unwrap().extension, "txt");
    }

    #[test]
    fn test_register_replaces_serializer() {
        let mut registry = SerializerRegistry::default();
        registry.register(ExportFormat::Pdf, Box::new(Fixed));
        let out = registry.serialize(ExportFormat::Pdf, &json!({})).unwrap();
        assert_eq!(out.extension, "pdf");
    }

    #[test]
    fn test_missing_serializer() {
        let registry = SerializerRegistry::empty();
        let err = registry.serialize(ExportFormat::Csv, &json!([])).unwrap_err();
        assert!(matches!(err, ExportError::Serialization(_)));
    }
}
