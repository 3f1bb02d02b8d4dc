//! Export formats offered by the export menu

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Export format selected by the user
///
/// Serialized in lowercase (`"pdf"`, `"xlsx"`, `"csv"`, `"json"`), which is
/// also the form used in audit entries and configuration.
///
/// # Examples
///
/// ```
/// use belediye_export::domain::ExportFormat;
/// use std::str::FromStr;
///
/// let format = ExportFormat::from_str("CSV").unwrap();
/// assert_eq!(format, ExportFormat::Csv);
/// assert_eq!(format.to_string(), "csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Printable report
    Pdf,
    /// Spreadsheet
    Xlsx,
    /// Comma-separated values
    Csv,
    /// Raw JSON (role or flag gated)
    Json,
}

impl ExportFormat {
    /// Formats offered to every role, in menu order
    pub const BASE: [ExportFormat; 3] = [Self::Pdf, Self::Xlsx, Self::Csv];

    /// Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Menu label shown by the rendering layer
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Xlsx => "Excel",
            Self::Csv => "CSV",
            Self::Json => "JSON",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "Invalid export format '{other}'. Must be one of: pdf, xlsx, csv, json"
            )),
        }
    }
}
