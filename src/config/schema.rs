//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the
//! `belediye.toml` file. Every section is optional; missing sections fall
//! back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main portal export configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export limits
    #[serde(default)]
    pub export: ExportSettings,

    /// Field classifier vocabulary extensions
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Rate-limit state storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Audit log sink
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PortalConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.classifier.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// User agent recorded in audit entries
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Export limits applied to every role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Successful exports allowed per rolling hour
    #[serde(default = "default_rate_limit_per_hour")]
    pub rate_limit_per_hour: u32,

    /// Maximum raw payload size in MB
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: f64,

    /// Directory where the CLI writes artifacts
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            rate_limit_per_hour: default_rate_limit_per_hour(),
            max_file_size_mb: default_max_file_size_mb(),
            output_dir: default_output_dir(),
        }
    }
}

impl ExportSettings {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.rate_limit_per_hour == 0 {
            return Err("export.rate_limit_per_hour must be > 0".to_string());
        }
        if !self.max_file_size_mb.is_finite() || self.max_file_size_mb <= 0.0 {
            return Err(format!(
                "export.max_file_size_mb must be a positive number, got {}",
                self.max_file_size_mb
            ));
        }
        Ok(())
    }
}

/// Additional classifier markers
///
/// Extends the built-in PII/KVKK vocabulary without recompilation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Extra PII substrings (matched case-insensitively)
    #[serde(default)]
    pub extra_pii_markers: Vec<String>,

    /// Extra KVKK special-category substrings
    #[serde(default)]
    pub extra_kvkk_markers: Vec<String>,
}

impl ClassifierConfig {
    fn validate(&self) -> Result<(), String> {
        let blank = self
            .extra_pii_markers
            .iter()
            .chain(self.extra_kvkk_markers.iter())
            .any(|m| m.trim().is_empty());
        if blank {
            return Err("classifier markers cannot be empty strings".to_string());
        }
        Ok(())
    }
}

/// Rate-limit state storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the client-scoped key-value store
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,

    /// Key under which the rate-limit state is stored
    #[serde(default = "default_rate_limit_key")]
    pub rate_limit_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            rate_limit_key: default_rate_limit_key(),
        }
    }
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.rate_limit_key.trim().is_empty() {
            return Err("storage.rate_limit_key cannot be empty".to_string());
        }
        if self.path.as_os_str().is_empty() {
            return Err("storage.path cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Audit log sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Emit audit entries
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Optional JSON-lines file receiving a copy of every entry
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Use JSON format for the audit file
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_path: None,
            json_format: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_user_agent() -> String {
    format!("belediye-export/{}", env!("CARGO_PKG_VERSION"))
}

fn default_rate_limit_per_hour() -> u32 {
    100
}

fn default_max_file_size_mb() -> f64 {
    10.0
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./state/storage.json")
}

fn default_rate_limit_key() -> String {
    "export_rate_limit".to_string()
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
