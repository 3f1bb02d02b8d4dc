//! Export menu state
//!
//! What the rendering layer needs to draw the export dropdown: the formats
//! the role may pick and whether the quota still allows a download.

use crate::config::RoleConfiguration;
use crate::core::ratelimit::RateLimitStatus;
use crate::domain::ExportFormat;
use serde::Serialize;

/// One entry of the export menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportOption {
    pub format: ExportFormat,
    pub label: &'static str,
    pub enabled: bool,
}

/// Snapshot of the export menu for one role and quota state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMenu {
    formats: Vec<ExportFormat>,
    status: RateLimitStatus,
}

impl ExportMenu {
    pub fn new(role: &RoleConfiguration, status: RateLimitStatus) -> Self {
        Self {
            formats: role.available_formats().to_vec(),
            status,
        }
    }

    /// Formats in display order; all disabled once the quota is spent
    pub fn options(&self) -> Vec<ExportOption> {
        self.formats
            .iter()
            .map(|&format| ExportOption {
                format,
                label: format.label(),
                enabled: self.status.allowed,
            })
            .collect()
    }

    pub fn status(&self) -> &RateLimitStatus {
        &self.status
    }

    pub fn remaining(&self) -> u32 {
        self.status.remaining
    }

    /// True when no export is possible until the window resets
    pub fn is_exhausted(&self) -> bool {
        !self.status.allowed
    }
}
