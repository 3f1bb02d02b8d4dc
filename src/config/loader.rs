//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PortalConfig;
use crate::domain::errors::PortalError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PortalConfig
/// 4. Applies environment variable overrides (BELEDIYE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use belediye_export::config::loader::load_config;
///
/// let config = load_config("belediye.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PortalConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PortalError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PortalError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_str(&contents)
}

/// Loads configuration from TOML text
///
/// Same pipeline as [`load_config`] without the file read.
pub fn load_config_str(contents: &str) -> Result<PortalConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: PortalConfig = toml::from_str(&contents)
        .map_err(|e| PortalError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        PortalError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PortalError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PortalError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using BELEDIYE_* prefix
///
/// Environment variables follow the pattern: BELEDIYE_<SECTION>_<KEY>,
/// for example BELEDIYE_EXPORT_RATE_LIMIT_PER_HOUR.
fn apply_env_overrides(config: &mut PortalConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("BELEDIYE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("BELEDIYE_APPLICATION_USER_AGENT") {
        config.application.user_agent = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("BELEDIYE_EXPORT_RATE_LIMIT_PER_HOUR") {
        config.export.rate_limit_per_hour = val.parse().map_err(|_| {
            PortalError::Configuration(format!(
                "Invalid BELEDIYE_EXPORT_RATE_LIMIT_PER_HOUR value: {val}"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("BELEDIYE_EXPORT_MAX_FILE_SIZE_MB") {
        config.export.max_file_size_mb = val.parse().map_err(|_| {
            PortalError::Configuration(format!(
                "Invalid BELEDIYE_EXPORT_MAX_FILE_SIZE_MB value: {val}"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("BELEDIYE_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = PathBuf::from(val);
    }

    // Storage overrides
    if let Ok(val) = std::env::var("BELEDIYE_STORAGE_PATH") {
        config.storage.path = PathBuf::from(val);
    }

    // Audit overrides
    if let Ok(val) = std::env::var("BELEDIYE_AUDIT_ENABLED") {
        config.audit.enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("BELEDIYE_AUDIT_LOG_PATH") {
        config.audit.log_path = Some(PathBuf::from(val));
    }

    // Logging overrides
    if let Ok(val) = std::env::var("BELEDIYE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("BELEDIYE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
