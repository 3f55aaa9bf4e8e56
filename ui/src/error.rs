use crate::config::ConfigValidationError;
use crate::presets::{PresetLoadError, PresetValidationError};
use server::{DecodeError, DirectoryError, ResolutionError};
use thiserror::Error;

/// Application-wide error type for the white-label front end.
///
/// Resolution itself never fails for the ordinary unbranded case; the errors
/// collected here come from the edges: configuration, files, the tenant
/// directory and explicit decode requests.
///
/// # Examples
///
/// ```no_run
/// use whitelabel::error::{AppError, AppResult};
///
/// fn read_payload(path: &std::path::Path) -> AppResult<String> {
///     Ok(std::fs::read_to_string(path)?)
/// }
///
/// match read_payload(std::path::Path::new("theme.json")) {
///     Err(AppError::Io(msg)) => eprintln!("cannot read payload: {msg}"),
///     Err(other) => eprintln!("{other}"),
///     Ok(_) => {}
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading and validation errors.
    ///
    /// Raised before anything is resolved; the process should report the
    /// message and exit.
    #[error("Configuration Error: {0}")]
    Config(String),

    /// File system failures while reading payloads, tenant files or presets.
    #[error("I/O Error: {0}")]
    Io(String),

    /// Tenant selection failures, including `TENANT_NOT_FOUND`.
    ///
    /// These are user-facing: the tenant-selection screen shows them instead
    /// of guessing a fallback tenant.
    #[error("Resolution Error [{code}]: {0}", code = .0.code())]
    Resolution(#[from] ResolutionError),

    /// A payload given explicitly for decoding could not be decoded.
    #[error("Decode Error [{kind}]: {0}", kind = .0.kind())]
    Decode(#[from] DecodeError),

    #[error("Preset Error: {0}")]
    Preset(#[from] PresetLoadError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        AppError::Resolution(ResolutionError::Directory(err))
    }
}

impl From<ConfigValidationError> for AppError {
    fn from(err: ConfigValidationError) -> Self {
        AppError::Config(err.user_message())
    }
}

impl From<PresetValidationError> for AppError {
    fn from(err: PresetValidationError) -> Self {
        AppError::Preset(PresetLoadError::Validation(err))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use server::tenant::TenantId;

    #[test]
    fn test_resolution_error_carries_code() {
        let error = AppError::from(ResolutionError::TenantNotFound(TenantId(9)));
        let message = error.to_string();

        assert!(message.starts_with("Resolution Error [TENANT_NOT_FOUND]"));
        assert!(message.contains('9'));
    }

    #[test]
    fn test_decode_error_carries_kind() {
        let error = AppError::from(DecodeError::MalformedJson("eof".to_string()));
        assert_eq!(error.to_string(), "Decode Error [MALFORMED_JSON]: malformed JSON: eof");
    }

    #[test]
    fn test_directory_error_becomes_resolution_error() {
        let error = AppError::from(DirectoryError::InvalidResponse("not json".to_string()));
        assert!(matches!(
            error,
            AppError::Resolution(ResolutionError::Directory(_))
        ));
    }
}
