//! Configuration management for the export core.
//!
//! # Overview
//!
//! Two configuration sources are combined:
//!
//! - a TOML file (`belediye.toml`) with `${VAR_NAME}` substitution and
//!   `BELEDIYE_*` environment overrides, loaded by [`load_config`];
//! - the environment keys `PUBLIC_ENABLE_JSON_EXPORT` and `USER_ROLE`, read
//!   once into a [`RoleConfiguration`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use belediye_export::config::{load_config, RoleConfiguration};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("belediye.toml")?;
//! let role = RoleConfiguration::from_env(&config.export)?;
//!
//! println!("Role: {}", role.user_role());
//! println!("Formats: {:?}", role.available_formats());
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! rate_limit_per_hour = 100
//! max_file_size_mb = 10
//!
//! [classifier]
//! extra_pii_markers = ["plaka"]
//!
//! [storage]
//! path = "./state/storage.json"
//!
//! [audit]
//! log_path = "./audit/export.log"
//! ```

pub mod loader;
pub mod role;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_str};
pub use role::RoleConfiguration;
pub use schema::{
    ApplicationConfig, AuditConfig, ClassifierConfig, ExportSettings, LoggingConfig,
    PortalConfig, StorageConfig,
};
