//! Delimited-text serializer
//!
//! Accepts a non-empty array of objects. The header is the key list of the
//! first object in its insertion order; later rows are aligned to it and
//! missing keys become empty cells. Cells containing a comma, quote or line
//! break are quoted with inner quotes doubled.

use super::{FormatSerializer, SerializedExport};
use crate::domain::{ExportError, ExportFormat};
use serde_json::{Map, Value};

/// CSV serializer, also used for the degraded XLSX path
#[derive(Debug, Clone, Copy)]
pub struct CsvSerializer {
    format: ExportFormat,
}

impl CsvSerializer {
    pub fn new() -> Self {
        Self {
            format: ExportFormat::Csv,
        }
    }

    /// CSV output reported under another format name in errors
    pub fn for_format(format: ExportFormat) -> Self {
        Self { format }
    }

    fn unsupported(&self, reason: impl Into<String>) -> ExportError {
        ExportError::UnsupportedShape {
            format: self.format.to_string(),
            reason: reason.into(),
        }
    }

    fn rows<'a>(&self, value: &'a Value) -> Result<Vec<&'a Map<String, Value>>, ExportError> {
        let items = match value {
            Value::Array(items) if !items.is_empty() => items,
            Value::Array(_) => return Err(self.unsupported("array is empty")),
            _ => return Err(self.unsupported("expected an array of records")),
        };

        items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                item.as_object()
                    .ok_or_else(|| self.unsupported(format!("element {idx} is not an object")))
            })
            .collect()
    }
}

impl Default for CsvSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatSerializer for CsvSerializer {
    fn serialize(&self, value: &Value) -> Result<SerializedExport, ExportError> {
        let rows = self.rows(value)?;
        let headers: Vec<&String> = rows[0].keys().collect();

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer
            .write_record(headers.iter().map(|h| h.as_str()))
            .map_err(|e| ExportError::Serialization(e.to_string()))?;

        for row in &rows {
            let cells: Vec<String> = headers
                .iter()
                .map(|h| row.get(h.as_str()).map(cell_text).unwrap_or_default())
                .collect();
            writer
                .write_record(&cells)
                .map_err(|e| ExportError::Serialization(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Serialization(e.to_string()))?;

        Ok(SerializedExport {
            bytes,
            extension: "csv",
            content_type: "text/csv; charset=utf-8",
        })
    }
}

/// Text of one cell; nested values are written as compact JSON
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let out = CsvSerializer::new().serialize(value).unwrap();
        String::from_utf8(out.bytes).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let data = json!([
            {"ad": "Ahmet", "mahalle": "Kızılay", "yas": 34},
            {"ad": "Zeynep", "mahalle": "Bahçelievler", "yas": 29}
        ]);
        assert_eq!(
            render(&data),
            "ad,mahalle,yas\nAhmet,Kızılay,34\nZeynep,Bahçelievler,29\n"
        );
    }

    #[test]
    fn test_rows_align_to_first_header() {
        let data = json!([
            {"a": 1, "b": 2},
            {"b": 3, "c": 4}
        ]);
        assert_eq!(render(&data), "a,b\n1,2\n,3\n");
    }

    #[test]
    fn test_comma_and_quote_escaping() {
        let data = json!([{"konu": "Su kesintisi, \"acil\"", "durum": "açık"}]);
        assert_eq!(
            render(&data),
            "konu,durum\n\"Su kesintisi, \"\"acil\"\"\",açık\n"
        );
    }

    #[test]
    fn test_cell_kinds() {
        let data = json!([{"n": null, "b": true, "o": {"x": 1}, "l": [1, 2]}]);
        assert_eq!(render(&data), "n,b,o,l\n,true,\"{\"\"x\"\":1}\",\"[1,2]\"\n");
    }

    #[test]
    fn test_rejects_non_array() {
        let err = CsvSerializer::new()
            .serialize(&json!({"tcNo": "12*******01"}))
            .unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedShape { ref format, .. } if format == "csv"));
    }

    #[test]
    fn test_rejects_empty_array() {
        let err = CsvSerializer::new().serialize(&json!([])).unwrap_err();
        assert_eq!(err.code(), "unsupported_shape");
    }

    #[test]
    fn test_rejects_non_object_elements() {
        let err = CsvSerializer::for_format(ExportFormat::Xlsx)
            .serialize(&json!([{"a": 1}, 2]))
            .unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedShape { ref format, .. } if format == "xlsx"));
    }
}
