//! Audit logger for export operations

use crate::config::AuditConfig;
use crate::domain::{ExportFormat, ResourceId, UserRole};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Action recorded for every entry
pub const EXPORT_ACTION: &str = "export";

/// Audit log entry describing one export attempt
///
/// Serialized with camelCase keys. Contains no exported values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    /// RFC 3339 timestamp with millisecond precision
    pub timestamp: String,
    pub action: String,
    pub format: ExportFormat,
    pub resource_id: String,
    /// Raw payload size in MB
    pub data_size: f64,
    pub user_role: UserRole,
    pub user_agent: String,
    /// False only for developer JSON exports
    pub sanitized: bool,
}

/// Audit logger for export operations
///
/// Entries are emitted as structured `tracing` events on the `audit`
/// target and, when a log path is configured, appended to a file.
pub struct AuditLogger {
    user_role: UserRole,
    user_agent: String,
    log_path: Option<PathBuf>,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(user_role: UserRole, user_agent: impl Into<String>, config: &AuditConfig) -> Self {
        Self {
            user_role,
            user_agent: user_agent.into(),
            log_path: config.log_path.clone(),
            json_format: config.json_format,
            enabled: config.enabled,
        }
    }

    /// Logger that only emits tracing events
    pub fn tracing_only(user_role: UserRole, user_agent: impl Into<String>) -> Self {
        Self::new(user_role, user_agent, &AuditConfig::default())
    }

    /// Build the entry for one export attempt
    pub fn build_entry(
        &self,
        format: ExportFormat,
        resource_id: &ResourceId,
        data_size_mb: f64,
        now: DateTime<Utc>,
    ) -> AuditLogEntry {
        AuditLogEntry {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            action: EXPORT_ACTION.to_string(),
            format,
            resource_id: resource_id.to_string(),
            data_size: data_size_mb,
            user_role: self.user_role,
            user_agent: self.user_agent.clone(),
            sanitized: !self.user_role.bypasses_redaction(format),
        }
    }

    /// Emit an entry
    ///
    /// File write failures are logged and otherwise ignored; auditing never
    /// blocks an export.
    pub fn emit(&self, entry: &AuditLogEntry) {
        if !self.enabled {
            return;
        }

        tracing::info!(
            target: "audit",
            action = %entry.action,
            format = %entry.format,
            resource_id = %entry.resource_id,
            data_size_mb = entry.data_size,
            user_role = %entry.user_role,
            user_agent = %entry.user_agent,
            sanitized = entry.sanitized,
            timestamp = %entry.timestamp,
            "Export audit"
        );

        if let Err(e) = self.write_entry(entry) {
            tracing::warn!(error = %e, "Failed to write audit entry to file");
        }
    }

    /// Append an entry to the audit file, if one is configured
    fn write_entry(&self, entry: &AuditLogEntry) -> std::io::Result<()> {
        let Some(ref path) = self.log_path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        if self.json_format {
            let json_line = serde_json::to_string(entry)?;
            writeln!(file, "{json_line}")
        } else {
            writeln!(
                file,
                "[{}] {} | Resource: {} | Format: {} | Size: {:.4}MB | Role: {} | Sanitized: {}",
                entry.timestamp,
                entry.action,
                entry.resource_id,
                entry.format,
                entry.data_size,
                entry.user_role,
                entry.sanitized
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_build_entry_fields() {
        let logger = AuditLogger::tracing_only(UserRole::Citizen, "test-agent");
        let resource = ResourceId::new("vergi-borclari").unwrap();
        let entry = logger.build_entry(ExportFormat::Csv, &resource, 0.5, fixed_time());

        assert_eq!(entry.timestamp, "2025-03-14T09:30:00.000Z");
        assert_eq!(entry.action, "export");
        assert_eq!(entry.resource_id, "vergi-borclari");
        assert_eq!(entry.data_size, 0.5);
        assert_eq!(entry.user_agent, "test-agent");
        assert!(entry.sanitized);
    }

    #[test]
    fn test_sanitized_flag() {
        let resource = ResourceId::unknown();
        let dev = AuditLogger::tracing_only(UserRole::Developer, "a");
        assert!(!dev.build_entry(ExportFormat::Json, &resource, 0.0, fixed_time()).sanitized);
        assert!(dev.build_entry(ExportFormat::Pdf, &resource, 0.0, fixed_time()).sanitized);

        let admin = AuditLogger::tracing_only(UserRole::Admin, "a");
        assert!(admin.build_entry(ExportFormat::Json, &resource, 0.0, fixed_time()).sanitized);
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let logger = AuditLogger::tracing_only(UserRole::Admin, "a");
        let entry = logger.build_entry(ExportFormat::Json, &ResourceId::unknown(), 1.0, fixed_time());
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["resourceId"], "unknown");
        assert_eq!(json["userRole"], "admin");
        assert_eq!(json["format"], "json");
        assert!(json.get("dataSize").is_some());
    }

    #[test]
    fn test_emit_appends_json_lines() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit").join("export.log");
        let config = AuditConfig {
            enabled: true,
            log_path: Some(log_path.clone()),
            json_format: true,
        };
        let logger = AuditLogger::new(UserRole::Citizen, "a", &config);
        let resource = ResourceId::new("sikayetler").unwrap();

        logger.emit(&logger.build_entry(ExportFormat::Csv, &resource, 0.1, fixed_time()));
        logger.emit(&logger.build_entry(ExportFormat::Pdf, &resource, 0.2, fixed_time()));

        let content = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: AuditLogEntry = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.format, ExportFormat::Pdf);
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("export.log");
        let config = AuditConfig {
            enabled: false,
            log_path: Some(log_path.clone()),
            json_format: true,
        };
        let logger = AuditLogger::new(UserRole::Citizen, "a", &config);
        logger.emit(&logger.build_entry(ExportFormat::Csv, &ResourceId::unknown(), 0.1, fixed_time()));

        assert!(!log_path.exists());
    }
}
