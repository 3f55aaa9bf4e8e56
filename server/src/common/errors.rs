use crate::tenant::TenantId;
use thiserror::Error;

/// Errors raised by a tenant directory backend.
///
/// The resolver never interprets these beyond surfacing them: a directory
/// that cannot answer is different from a directory that answered "no such
/// tenant", which is [`ResolutionError::TenantNotFound`].
///
/// # Error Categories
///
/// ## Client Configuration Errors
/// - [`ClientCreation`] - HTTP client initialization failures
///
/// ## Request Execution Errors
/// - [`RequestFailed`] - transport failures and non-success status codes
/// - [`Timeout`] - lookups exceeding the configured timeout
/// - [`InvalidResponse`] - payloads that are not tenant records
///
/// # Examples
///
/// ```no_run
/// use server::common::errors::DirectoryError;
///
/// fn log_directory_error(error: &DirectoryError) {
///     match error {
///         DirectoryError::Timeout { url, millis } => {
///             log::warn!("Tenant lookup timed out: url={url}, after={millis}ms");
///         }
///         other => log::error!("Tenant directory error: {other}"),
///     }
/// }
/// ```
///
/// [`ClientCreation`]: DirectoryError::ClientCreation
/// [`RequestFailed`]: DirectoryError::RequestFailed
/// [`Timeout`]: DirectoryError::Timeout
/// [`InvalidResponse`]: DirectoryError::InvalidResponse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// HTTP client initialization failed.
    #[error("HTTP client creation failed: {reason}")]
    ClientCreation { reason: String },

    /// The request could not be completed or returned a non-success status.
    #[error("Request failed: {url} - {reason}")]
    RequestFailed { url: String, reason: String },

    /// The request took longer than the configured timeout.
    #[error("Request timeout after {millis}ms: {url}")]
    Timeout { url: String, millis: u64 },

    /// The directory answered with something that is not a tenant record.
    ///
    /// Also used by the in-memory directory when its seed data cannot be parsed.
    #[error("Invalid directory response: {0}")]
    InvalidResponse(String),
}

/// Errors surfaced to the caller of a tenant-selection flow.
///
/// Decode and schema errors never appear here: they are recovered inside the
/// resolver by falling back to the next layer. These errors have no safe
/// fallback and are meant to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// No active tenant with this id exists in the directory.
    #[error("Tenant {0} not found")]
    TenantNotFound(TenantId),

    /// The directory could not be queried.
    #[error("Tenant directory unavailable: {0}")]
    Directory(#[from] DirectoryError),
}

impl ResolutionError {
    /// Stable tag for the error, used in logs and user-facing error states.
    pub fn code(&self) -> &'static str {
        match self {
            ResolutionError::TenantNotFound(_) => "TENANT_NOT_FOUND",
            ResolutionError::Directory(_) => "TENANT_DIRECTORY_UNAVAILABLE",
        }
    }
}
