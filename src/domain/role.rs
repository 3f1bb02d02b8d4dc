//! User roles

use super::format::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role the export core acts on behalf of
///
/// The role is static process configuration, not an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular portal visitor
    #[default]
    Citizen,
    /// API/debug consumer; receives unredacted JSON exports
    Developer,
    /// Municipal staff
    Admin,
}

impl UserRole {
    /// Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Developer => "developer",
            Self::Admin => "admin",
        }
    }

    /// Roles that may always export raw JSON
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Developer | Self::Admin)
    }

    /// Whether exports in `format` skip redaction
    ///
    /// Only developers exporting JSON receive the raw value.
    pub fn bypasses_redaction(&self, format: ExportFormat) -> bool {
        *self == Self::Developer && format == ExportFormat::Json
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "citizen" => Ok(Self::Citizen),
            "developer" => Ok(Self::Developer),
            "admin" => Ok(Self::Admin),
            other => Err(format!(
                "Invalid user role '{other}'. Must be one of: citizen, developer, admin"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_citizen() {
        assert_eq!(UserRole::default(), UserRole::Citizen);
    }

    #[test]
    fn test_privileged_roles() {
        assert!(!UserRole::Citizen.is_privileged());
        assert!(UserRole::Developer.is_privileged());
        assert!(UserRole::Admin.is_privileged());
    }

    #[test]
    fn test_redaction_bypass() {
        assert!(UserRole::Developer.bypasses_redaction(ExportFormat::Json));
        assert!(!UserRole::Developer.bypasses_redaction(ExportFormat::Csv));
        assert!(!UserRole::Admin.bypasses_redaction(ExportFormat::Json));
        assert!(!UserRole::Citizen.bypasses_redaction(ExportFormat::Json));
    }

    #[test]
    fn test_parse() {
        assert_eq!(UserRole::from_str("ADMIN").unwrap(), UserRole::Admin);
        assert!(UserRole::from_str("mayor").is_err());
    }
}
