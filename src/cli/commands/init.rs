//! Init command implementation
//!
//! Writes a sample configuration file.

use clap::Args;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "belediye.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match tokio::fs::write(&self.output, sample_config()).await {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set USER_ROLE (citizen, developer, admin) in .env");
                println!("  3. Set PUBLIC_ENABLE_JSON_EXPORT=true to offer JSON to every role");
                println!("  4. Validate configuration: belediye-export validate-config");
                println!("  5. Run export: belediye-export export --input data.json --format csv");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}

/// Sample configuration with every section and its defaults
pub fn sample_config() -> &'static str {
    r#"# Belediye export configuration
#
# Values may reference environment variables as ${VAR_NAME}.
# BELEDIYE_<SECTION>_<KEY> environment variables override file values.
# The role is not configured here: set USER_ROLE and
# PUBLIC_ENABLE_JSON_EXPORT in the environment.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"
# Recorded in every audit entry
# user_agent = "belediye-portal/1.0"

[export]
# Successful exports allowed per rolling hour
rate_limit_per_hour = 100
# Ceiling on the raw payload, in MB (inclusive)
max_file_size_mb = 10.0
# Where the CLI writes artifacts
output_dir = "./exports"

[classifier]
# Extra field-name substrings treated as personal data
extra_pii_markers = []
# Extra field-name substrings treated as special-category data
extra_kvkk_markers = []

[storage]
# JSON file keeping the quota between runs; omit for in-memory state
path = "./state/storage.json"
rate_limit_key = "export_rate_limit"

[audit]
enabled = true
# JSON-lines copy of every audit entry
log_path = "./audit/export-audit.log"
json_format = true

[logging]
local_enabled = false
local_path = "./logs"
# daily | hourly
local_rotation = "daily"
"#
}
