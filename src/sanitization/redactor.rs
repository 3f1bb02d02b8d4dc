//! Structural redaction of JSON values
//!
//! The redactor rebuilds a value, masking every field whose name the
//! [`FieldClassifier`] marks as sensitive. It never fails: any
//! `serde_json::Value` is a valid input.

use super::classifier::FieldClassifier;
use super::masking::mask_value;
use crate::domain::{ExportFormat, UserRole};
use serde_json::{Map, Value};

/// Field-based redactor
///
/// # Examples
///
/// ```
/// use belediye_export::sanitization::Redactor;
/// use belediye_export::domain::{ExportFormat, UserRole};
/// use serde_json::json;
///
/// let redactor = Redactor::default();
/// let data = json!([{"tcNo": "12345678901", "ad": "Ahmet"}]);
///
/// let sanitized = redactor.sanitize(&data, ExportFormat::Csv, UserRole::Citizen);
/// assert_eq!(sanitized, json!([{"tcNo": "12*******01", "ad": "Ahmet"}]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Redactor {
    classifier: FieldClassifier,
}

impl Redactor {
    pub fn new(classifier: FieldClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &FieldClassifier {
        &self.classifier
    }

    /// Sanitize a value for export
    ///
    /// Developers exporting JSON receive the value unchanged; every other
    /// combination of role and format is redacted.
    pub fn sanitize(&self, value: &Value, format: ExportFormat, role: UserRole) -> Value {
        if role.bypasses_redaction(format) {
            tracing::debug!("Redaction bypassed for developer JSON export");
            return value.clone();
        }
        self.redact(value)
    }

    /// Redact a value unconditionally
    pub fn redact(&self, value: &Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(self.redact_object(map)),
            Value::Array(items) => Value::Array(self.redact_array(items)),
            _ => value.clone(),
        }
    }

    fn redact_object(&self, map: &Map<String, Value>) -> Map<String, Value> {
        map.iter()
            .map(|(key, value)| {
                let redacted = if self.classifier.is_sensitive(key) {
                    mask_value(value)
                } else {
                    self.redact(value)
                };
                (key.clone(), redacted)
            })
            .collect()
    }

    /// Only mapping elements are walked; nested arrays and scalars pass through
    fn redact_array(&self, items: &[Value]) -> Vec<Value> {
        items
            .iter()
            .map(|item| match item {
                Value::Object(map) => Value::Object(self.redact_object(map)),
                _ => item.clone(),
            })
            .collect()
    }
}
