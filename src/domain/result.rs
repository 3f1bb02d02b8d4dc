//! Result type alias for the export core

use super::errors::PortalError;

/// Result type alias for portal operations
///
/// Uses [`PortalError`] as the error type. Export pipeline failures have their
/// own typed result, see [`ExportError`](super::errors::ExportError).
///
/// # Examples
///
/// ```
/// use belediye_export::domain::result::Result;
/// use belediye_export::domain::errors::PortalError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PortalError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PortalError>;
