//! Export command implementation
//!
//! Reads a JSON document, runs it through the export pipeline and writes
//! the artifact to the output directory.

use super::load_settings;
use crate::adapters::source::{DataSource, JsonFileSource};
use crate::core::export::{ExportArtifact, ExportOrchestrator, ExportRequest};
use crate::domain::{ExportError, ExportFormat, ResourceId};
use chrono::SecondsFormat;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// JSON document to export
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format (pdf, xlsx, csv, json)
    #[arg(short, long)]
    pub format: ExportFormat,

    /// Base file name of the artifact, defaults to the resource ID
    #[arg(long)]
    pub filename: Option<String>,

    /// Resource ID for the audit trail, defaults to the input file stem
    #[arg(long)]
    pub resource_id: Option<String>,

    /// Directory for the artifact, overrides `[export] output_dir`
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), format = %self.format, "Starting export command");

        let (config, role) = match load_settings(config_path) {
            Ok(settings) => settings,
            Err(code) => return Ok(code),
        };

        let mut source = JsonFileSource::new(&self.input);
        if let Some(ref id) = self.resource_id {
            match ResourceId::new(id.as_str()) {
                Ok(id) => source = source.with_resource_id(id),
                Err(e) => {
                    eprintln!("❌ {e}");
                    return Ok(2);
                }
            }
        }

        let data = match source.fetch().await {
            Ok(data) => data,
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to read export source");
                eprintln!("❌ {e}");
                return Ok(5);
            }
        };

        let filename = self
            .filename
            .clone()
            .unwrap_or_else(|| source.resource_id().to_string());
        let request = ExportRequest::new(data, filename, self.format)
            .with_resource_id(source.resource_id().clone());

        let orchestrator = ExportOrchestrator::from_config(&config, role);
        let artifact = match orchestrator.run_export(request) {
            Ok(artifact) => artifact,
            Err(e) => {
                eprintln!("❌ Export refused ({})", e.code());
                eprintln!("   {e}");
                eprintln!("   {}", refusal_hint(&e));
                return Ok(3);
            }
        };

        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| config.export.output_dir.clone());
        let path = write_artifact(&output_dir, &artifact).await?;

        println!("✅ Export written: {}", path.display());
        println!("   Format: {} ({})", artifact.format.label(), artifact.content_type);
        println!("   Size: {} bytes", artifact.len());
        println!("   SHA-256: {}", artifact.checksum);
        println!("   Sanitized: {}", artifact.sanitized);
        println!(
            "   Remaining exports this hour: {}",
            orchestrator.rate_limit_status().remaining
        );

        Ok(0)
    }
}

/// Follow-up advice printed under a refused export
fn refusal_hint(error: &ExportError) -> String {
    match error {
        ExportError::RateLimited { reset_time } => format!(
            "Try again after {}",
            reset_time.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        e if e.is_retryable() => "Try again later".to_string(),
        _ => "Retrying the same request will fail again".to_string(),
    }
}

/// Write the artifact into `dir`, creating it if needed
async fn write_artifact(dir: &Path, artifact: &ExportArtifact) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(&artifact.file_name);
    tokio::fs::write(&path, &artifact.bytes).await?;

    tracing::info!(
        path = %path.display(),
        export_id = %artifact.export_id,
        "Artifact written"
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoleConfiguration;
    use crate::core::ratelimit::MemoryStore;
    use crate::domain::UserRole;
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_refusal_hint() {
        let reset_time = chrono::DateTime::parse_from_rfc3339("2025-06-02T15:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let limited = ExportError::RateLimited { reset_time };
        assert!(limited.is_retryable());
        assert_eq!(refusal_hint(&limited), "Try again after 2025-06-02T15:00:00Z");

        let denied = ExportError::FormatNotPermitted("json".to_string());
        assert!(!denied.is_retryable());
        assert_eq!(refusal_hint(&denied), "Retrying the same request will fail again");
    }

    #[tokio::test]
    async fn test_write_artifact_creates_directory() {
        let dir = TempDir::new().unwrap();
        let role = RoleConfiguration::new(false, UserRole::Citizen, 10, 10.0).unwrap();
        let orchestrator = ExportOrchestrator::new(role, Arc::new(MemoryStore::new()));
        let artifact = orchestrator
            .run_export(ExportRequest::new(
                json!([{"ad": "Ahmet"}]),
                "liste",
                ExportFormat::Csv,
            ))
            .unwrap();

        let out = dir.path().join("ciktilar");
        let path = write_artifact(&out, &artifact).await.unwrap();

        assert_eq!(path, out.join("liste.csv"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "ad\nAhmet\n");
    }
}
