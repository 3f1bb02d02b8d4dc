//! Status command implementation
//!
//! Shows the formats the configured role may export and the remaining
//! hourly quota.

use super::load_settings;
use crate::core::export::ExportOrchestrator;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Print the menu state as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking export status");

        let (config, role) = match load_settings(config_path) {
            Ok(settings) => settings,
            Err(code) => return Ok(code),
        };

        let orchestrator = ExportOrchestrator::from_config(&config, role);
        let menu = orchestrator.menu();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&menu)?);
            return Ok(0);
        }

        println!("📊 Export Status");
        println!();
        println!("  Role: {}", orchestrator.role().user_role());
        println!(
            "  Remaining: {}/{}",
            menu.remaining(),
            orchestrator.role().rate_limit_per_hour()
        );
        println!("  Resets at: {}", menu.status().reset_time.to_rfc3339());
        println!();
        println!("Formats:");
        for option in menu.options() {
            let marker = if option.enabled { "✅" } else { "⛔" };
            println!("  {marker} {:<5} {}", option.format.as_str(), option.label);
        }

        if menu.is_exhausted() {
            println!();
            println!("Hourly export limit reached.");
        }

        Ok(0)
    }
}
