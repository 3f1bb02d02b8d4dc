//! Validate config command implementation

use crate::config::{load_config, RoleConfiguration};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after substitution and overrides
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let role = match RoleConfiguration::from_env(&config.export) {
            Ok(r) => r,
            Err(e) => {
                println!("❌ Invalid role environment");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let formats: Vec<&str> = role.available_formats().iter().map(|f| f.as_str()).collect();

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  User Agent: {}", config.application.user_agent);
        println!("  Role: {}", role.user_role());
        println!("  JSON Export Flag: {}", role.enable_json_export());
        println!("  Formats: {}", formats.join(", "));
        println!("  Rate Limit: {}/hour", role.rate_limit_per_hour());
        println!("  Max File Size: {} MB", role.max_file_size_mb());
        println!("  Output Directory: {}", config.export.output_dir.display());
        println!("  Quota Store: {}", config.storage.path.display());
        if !config.classifier.extra_pii_markers.is_empty()
            || !config.classifier.extra_kvkk_markers.is_empty()
        {
            println!(
                "  Extra Markers: PII {:?}, KVKK {:?}",
                config.classifier.extra_pii_markers, config.classifier.extra_kvkk_markers
            );
        }
        println!(
            "  Audit: {}",
            if config.audit.enabled { "enabled" } else { "disabled" }
        );

        Ok(0)
    }
}
