//! Role configuration derived from environment-style input
//!
//! Read once at startup and immutable afterwards. The JSON entitlement
//! invariant is enforced at construction: `json` is offered exactly when
//! `PUBLIC_ENABLE_JSON_EXPORT=true` or the role is developer/admin.

use super::schema::ExportSettings;
use crate::domain::errors::PortalError;
use crate::domain::result::Result;
use crate::domain::{ExportFormat, UserRole};
use std::str::FromStr;

/// Environment key enabling JSON export for every role
pub const ENABLE_JSON_EXPORT_VAR: &str = "PUBLIC_ENABLE_JSON_EXPORT";

/// Environment key selecting the user role
pub const USER_ROLE_VAR: &str = "USER_ROLE";

/// Process-wide role configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RoleConfiguration {
    enable_json_export: bool,
    user_role: UserRole,
    available_formats: Vec<ExportFormat>,
    rate_limit_per_hour: u32,
    max_file_size_mb: f64,
}

impl RoleConfiguration {
    /// Build a role configuration, deriving the available formats
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the rate limit is zero or the size
    /// ceiling is not a positive number.
    ///
    /// # Examples
    ///
    /// ```
    /// use belediye_export::config::RoleConfiguration;
    /// use belediye_export::domain::{ExportFormat, UserRole};
    ///
    /// let role = RoleConfiguration::new(false, UserRole::Admin, 100, 10.0).unwrap();
    /// assert!(role.can_export_json());
    /// assert_eq!(role.available_formats().last(), Some(&ExportFormat::Json));
    /// ```
    pub fn new(
        enable_json_export: bool,
        user_role: UserRole,
        rate_limit_per_hour: u32,
        max_file_size_mb: f64,
    ) -> Result<Self> {
        let limits = ExportSettings {
            rate_limit_per_hour,
            max_file_size_mb,
            ..ExportSettings::default()
        };
        limits.validate().map_err(PortalError::Configuration)?;

        let mut available_formats = ExportFormat::BASE.to_vec();
        if enable_json_export || user_role.is_privileged() {
            available_formats.push(ExportFormat::Json);
        }

        Ok(Self {
            enable_json_export,
            user_role,
            available_formats,
            rate_limit_per_hour,
            max_file_size_mb,
        })
    }

    /// Read `PUBLIC_ENABLE_JSON_EXPORT` and `USER_ROLE` from the process environment
    pub fn from_env(settings: &ExportSettings) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), settings)
    }

    /// Build from an arbitrary key/value lookup
    ///
    /// `PUBLIC_ENABLE_JSON_EXPORT` enables JSON only when exactly `"true"`.
    /// A missing `USER_ROLE` means citizen; an unrecognised one is an error.
    pub fn from_lookup<F>(lookup: F, settings: &ExportSettings) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let enable_json_export = lookup(ENABLE_JSON_EXPORT_VAR).as_deref() == Some("true");

        let user_role = match lookup(USER_ROLE_VAR) {
            Some(raw) if !raw.trim().is_empty() => UserRole::from_str(&raw)
                .map_err(|e| PortalError::Configuration(format!("{USER_ROLE_VAR}: {e}")))?,
            _ => UserRole::default(),
        };

        let role = Self::new(
            enable_json_export,
            user_role,
            settings.rate_limit_per_hour,
            settings.max_file_size_mb,
        )?;

        tracing::debug!(
            user_role = %role.user_role,
            enable_json_export = role.enable_json_export,
            formats = ?role.available_formats,
            "Role configuration loaded"
        );

        Ok(role)
    }

    pub fn enable_json_export(&self) -> bool {
        self.enable_json_export
    }

    pub fn user_role(&self) -> UserRole {
        self.user_role
    }

    /// Formats offered in the export menu, in display order
    pub fn available_formats(&self) -> &[ExportFormat] {
        &self.available_formats
    }

    pub fn rate_limit_per_hour(&self) -> u32 {
        self.rate_limit_per_hour
    }

    pub fn max_file_size_mb(&self) -> f64 {
        self.max_file_size_mb
    }

    /// Whether `json` is among the available formats
    pub fn can_export_json(&self) -> bool {
        self.is_format_available(ExportFormat::Json)
    }

    pub fn is_format_available(&self, format: ExportFormat) -> bool {
        self.available_formats.contains(&format)
    }

    /// Whether redaction is skipped for the given format
    pub fn bypasses_redaction(&self, format: ExportFormat) -> bool {
        self.user_role.bypasses_redaction(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test_case(false, UserRole::Citizen => false)]
    #[test_case(true, UserRole::Citizen => true)]
    #[test_case(false, UserRole::Developer => true)]
    #[test_case(false, UserRole::Admin => true)]
    #[test_case(true, UserRole::Admin => true)]
    fn test_json_entitlement(flag: bool, role: UserRole) -> bool {
        RoleConfiguration::new(flag, role, 100, 10.0)
            .unwrap()
            .can_export_json()
    }

    #[test]
    fn test_base_formats_always_available() {
        let role = RoleConfiguration::new(false, UserRole::Citizen, 100, 10.0).unwrap();
        assert_eq!(
            role.available_formats(),
            &[ExportFormat::Pdf, ExportFormat::Xlsx, ExportFormat::Csv]
        );
    }

    #[test]
    fn test_from_lookup_defaults() {
        let role =
            RoleConfiguration::from_lookup(lookup_from(&[]), &ExportSettings::default()).unwrap();
        assert_eq!(role.user_role(), UserRole::Citizen);
        assert!(!role.enable_json_export());
        assert_eq!(role.rate_limit_per_hour(), 100);
    }

    #[test]
    fn test_from_lookup_flag_requires_exact_true() {
        let settings = ExportSettings::default();
        let role = RoleConfiguration::from_lookup(
            lookup_from(&[(ENABLE_JSON_EXPORT_VAR, "TRUE")]),
            &settings,
        )
        .unwrap();
        assert!(!role.can_export_json());

        let role = RoleConfiguration::from_lookup(
            lookup_from(&[(ENABLE_JSON_EXPORT_VAR, "true")]),
            &settings,
        )
        .unwrap();
        assert!(role.can_export_json());
    }

    #[test]
    fn test_from_lookup_invalid_role() {
        let result = RoleConfiguration::from_lookup(
            lookup_from(&[(USER_ROLE_VAR, "superuser")]),
            &ExportSettings::default(),
        );
        assert!(matches!(result, Err(PortalError::Configuration(_))));
    }

    #[test]
    fn test_bypass_only_for_developer_json() {
        let dev = RoleConfiguration::new(false, UserRole::Developer, 100, 10.0).unwrap();
        assert!(dev.bypasses_redaction(ExportFormat::Json));
        assert!(!dev.bypasses_redaction(ExportFormat::Csv));

        let admin = RoleConfiguration::new(false, UserRole::Admin, 100, 10.0).unwrap();
        assert!(!admin.bypasses_redaction(ExportFormat::Json));
    }

    #[test]
    fn test_invalid_limits_rejected() {
        assert!(RoleConfiguration::new(false, UserRole::Citizen, 0, 10.0).is_err());
        assert!(RoleConfiguration::new(false, UserRole::Citizen, 100, -1.0).is_err());
    }
}
