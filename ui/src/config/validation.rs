use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid logging.level: {configured}")]
    LogLevel { configured: String },
    #[error("Both tenants.file and tenants.api_url are set")]
    ConflictingTenantSources,
    #[error("Invalid tenants.api_url: {configured}")]
    TenantApiUrl { configured: String },
    #[error("Invalid tenants.lookup_timeout_ms: {configured} (min: {min_limit}, max: {max_limit})")]
    LookupTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level!\n\n\
                    Your configured value: {configured}\n\
                    Valid levels: trace, debug, info, warn, error"
                )
            }
            ConfigValidationError::ConflictingTenantSources => {
                "Two tenant sources configured!\n\n\
                Set either tenants.file or tenants.api_url in config.toml, not both."
                    .to_string()
            }
            ConfigValidationError::TenantApiUrl { configured } => {
                format!(
                    "Tenant API URL is not an http(s) URL!\n\n\
                    Your configured value: {configured}"
                )
            }
            ConfigValidationError::LookupTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Tenant lookup timeout out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update tenants.lookup_timeout_ms in config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug, Clone)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
