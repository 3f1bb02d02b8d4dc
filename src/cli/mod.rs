//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Belediye export - sanitized, rate-limited data exports
#[derive(Parser, Debug)]
#[command(name = "belediye-export")]
#[command(version, about, long_about = None)]
#[command(author = "Belediye Portal Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "belediye.toml", env = "BELEDIYE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "BELEDIYE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a JSON document in the requested format
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show available formats and the remaining hourly quota
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
