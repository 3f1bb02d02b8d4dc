//! CLI command implementations
//!
//! Commands return a process exit code:
//! 0 success, 2 configuration error, 3 export refused, 5 fatal error.

pub mod export;
pub mod init;
pub mod status;
pub mod validate;

use crate::config::{load_config, PortalConfig, RoleConfiguration};

/// Load the configuration file and the environment role
///
/// Prints the failure and returns the configuration exit code on error.
fn load_settings(config_path: &str) -> Result<(PortalConfig, RoleConfiguration), i32> {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, config_path = %config_path, "Failed to load configuration");
            eprintln!("❌ Failed to load configuration file: {config_path}");
            eprintln!("   Error: {e}");
            return Err(2);
        }
    };

    let role = match RoleConfiguration::from_env(&config.export) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "Invalid role configuration");
            eprintln!("❌ Invalid role configuration");
            eprintln!("   Error: {e}");
            return Err(2);
        }
    };

    Ok((config, role))
}
