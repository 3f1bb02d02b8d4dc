//! Payload size gate

use crate::domain::ExportError;
use serde::Serialize;
use serde_json::Value;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Outcome of a size check
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeCheck {
    pub valid: bool,
    pub size_mb: f64,
    pub max_size_mb: f64,
}

/// Compares the compact JSON size of a value against a ceiling in MB
#[derive(Debug, Clone, Copy)]
pub struct SizeValidator {
    max_size_mb: f64,
}

impl SizeValidator {
    pub fn new(max_size_mb: f64) -> Self {
        Self { max_size_mb }
    }

    pub fn max_size_mb(&self) -> f64 {
        self.max_size_mb
    }

    /// Measure `value`; the ceiling itself is still valid
    pub fn validate_size(&self, value: &Value) -> Result<SizeCheck, ExportError> {
        let size_mb = payload_size_mb(value)?;

        Ok(SizeCheck {
            valid: size_mb <= self.max_size_mb,
            size_mb,
            max_size_mb: self.max_size_mb,
        })
    }
}

/// UTF-8 byte length of the compact serialization, in MB
pub fn payload_size_mb(value: &Value) -> Result<f64, ExportError> {
    let bytes = serde_json::to_vec(value).map_err(|e| ExportError::Serialization(e.to_string()))?;
    Ok(bytes.len() as f64 / BYTES_PER_MB)
}
