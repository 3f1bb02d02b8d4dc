//! Export orchestrator - the single public export operation
//!
//! Steps, each short-circuiting on failure:
//!
//! 1. Rate-limit check
//! 2. Size validation on the raw payload
//! 3. Sanitization
//! 4. Audit entry
//! 5. Format gate and serialization
//! 6. Rate-limit increment
//!
//! The quota is only consumed by an export that produced an artifact.

use super::artifact::ExportArtifact;
use super::menu::ExportMenu;
use super::request::ExportRequest;
use super::size::SizeValidator;
use crate::config::{PortalConfig, RoleConfiguration};
use crate::core::ratelimit::{
    Clock, FileStore, KeyValueStore, RateLimitStatus, RateLimiter, SystemClock,
};
use crate::core::serialize::SerializerRegistry;
use crate::domain::ExportError;
use crate::sanitization::{AuditLogger, FieldClassifier, Redactor};
use crate::{log_export_complete, log_export_refused, log_export_start};
use std::sync::Arc;
use std::time::Instant;

/// Runs exports for one role configuration and quota store
pub struct ExportOrchestrator {
    role: RoleConfiguration,
    redactor: Redactor,
    size_validator: SizeValidator,
    rate_limiter: RateLimiter,
    audit: AuditLogger,
    serializers: SerializerRegistry,
    clock: Arc<dyn Clock>,
}

impl ExportOrchestrator {
    /// Orchestrator with the default classifier, serializers and a
    /// tracing-only audit logger
    pub fn new(role: RoleConfiguration, store: Arc<dyn KeyValueStore>) -> Self {
        let rate_limiter = RateLimiter::new(store, role.rate_limit_per_hour());
        let audit = AuditLogger::tracing_only(
            role.user_role(),
            crate::config::ApplicationConfig::default().user_agent,
        );

        Self {
            size_validator: SizeValidator::new(role.max_file_size_mb()),
            redactor: Redactor::default(),
            rate_limiter,
            audit,
            serializers: SerializerRegistry::default(),
            clock: Arc::new(SystemClock),
            role,
        }
    }

    /// Build from the loaded configuration
    ///
    /// Quota state is kept in the [`FileStore`] at `[storage] path`, so it
    /// carries over between processes.
    pub fn from_config(config: &PortalConfig, role: RoleConfiguration) -> Self {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.storage.path));

        let rate_limiter = RateLimiter::new(store, role.rate_limit_per_hour())
            .with_key(config.storage.rate_limit_key.clone());
        let audit = AuditLogger::new(
            role.user_role(),
            config.application.user_agent.clone(),
            &config.audit,
        );

        Self {
            size_validator: SizeValidator::new(role.max_file_size_mb()),
            redactor: Redactor::new(FieldClassifier::from_config(&config.classifier)),
            rate_limiter,
            audit,
            serializers: SerializerRegistry::default(),
            clock: Arc::new(SystemClock),
            role,
        }
    }

    /// Use `clock` for quota windows and timestamps
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.rate_limiter = self.rate_limiter.with_clock(clock.clone());
        self.clock = clock;
        self
    }

    pub fn with_redactor(mut self, redactor: Redactor) -> Self {
        self.redactor = redactor;
        self
    }

    pub fn with_audit_logger(mut self, audit: AuditLogger) -> Self {
        self.audit = audit;
        self
    }

    pub fn with_serializers(mut self, serializers: SerializerRegistry) -> Self {
        self.serializers = serializers;
        self
    }

    pub fn role(&self) -> &RoleConfiguration {
        &self.role
    }

    /// Current quota without consuming it
    pub fn rate_limit_status(&self) -> RateLimitStatus {
        self.rate_limiter.check()
    }

    /// Menu state for the rendering layer
    pub fn menu(&self) -> ExportMenu {
        ExportMenu::new(&self.role, self.rate_limiter.check())
    }

    /// Run one export
    ///
    /// # Errors
    ///
    /// Returns the typed [`ExportError`] of the first failing step. A failed
    /// export does not count against the quota.
    pub fn run_export(&self, request: ExportRequest) -> Result<ExportArtifact, ExportError> {
        let started = Instant::now();
        let format = request.format;
        let resource_id = request.resource_id_or_unknown();
        log_export_start!(format, resource_id);

        let status = self.rate_limiter.check();
        if !status.allowed {
            return Err(refuse(ExportError::RateLimited {
                reset_time: status.reset_time,
            }));
        }

        let size = self
            .size_validator
            .validate_size(&request.data)
            .map_err(refuse)?;
        if !size.valid {
            return Err(refuse(ExportError::PayloadTooLarge {
                size_mb: size.size_mb,
                max_size_mb: size.max_size_mb,
            }));
        }

        let sanitized = self
            .redactor
            .sanitize(&request.data, format, self.role.user_role());

        let now = self.clock.now();
        let entry = self
            .audit
            .build_entry(format, &resource_id, size.size_mb, now);
        self.audit.emit(&entry);

        if !self.role.is_format_available(format) {
            return Err(refuse(ExportError::FormatNotPermitted(format.to_string())));
        }

        let serialized = self
            .serializers
            .serialize(format, &sanitized)
            .map_err(refuse)?;

        self.rate_limiter.increment();

        let file_name = request.file_name(serialized.extension);
        let artifact = ExportArtifact::new(serialized, file_name, format, entry.sanitized, now);

        log_export_complete!(artifact.file_name, artifact.len(), started.elapsed());
        tracing::debug!(
            export_id = %artifact.export_id,
            checksum = %artifact.checksum,
            "Artifact ready"
        );

        Ok(artifact)
    }
}

fn refuse(error: ExportError) -> ExportError {
    log_export_refused!(error);
    error
}
