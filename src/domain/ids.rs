//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of the exported resource (e.g. `"duyurular"`, `"sikayetler"`)
///
/// Recorded in audit entries so an export can be traced back to the page
/// or endpoint it came from.
///
/// # Examples
///
/// ```
/// use belediye_export::domain::ids::ResourceId;
/// use std::str::FromStr;
///
/// let id = ResourceId::from_str("vergi-borclari").unwrap();
/// assert_eq!(id.as_str(), "vergi-borclari");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(String);

impl ResourceId {
    /// Placeholder used when the caller does not name the resource
    pub const UNKNOWN: &'static str = "unknown";

    /// Creates a new ResourceId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(ResourceId)` if the ID is non-blank, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Resource ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// The placeholder resource ID
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    /// Returns the resource ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResourceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
