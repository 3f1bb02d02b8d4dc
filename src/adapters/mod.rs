//! External system integrations.
//!
//! - [`source`] - producers of the JSON documents that get exported
//!
//! Adapters isolate the export core from where its data comes from, so
//! tests can substitute fixtures for the portal's flat-file endpoints.
//!
//! ```rust,no_run
//! use belediye_export::adapters::source::{DataSource, JsonFileSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = JsonFileSource::new("data/duyurular.json");
//! let data = source.fetch().await?;
//! println!("{} -> {}", source.resource_id(), data);
//! # Ok(())
//! # }
//! ```

pub mod source;
