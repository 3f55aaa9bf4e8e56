use super::setup;
use super::validation::ConfigValidationError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 5_000;
pub const MIN_LOOKUP_TIMEOUT_MS: u64 = 1;
pub const MAX_LOOKUP_TIMEOUT_MS: u64 = 60_000;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    presets: PresetsConfig,
    #[serde(default)]
    tenants: TenantsConfig,
}

impl AppConfig {
    /// Validate the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if let Some(level) = self.logging.level.as_deref() {
            if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                errors.push(ConfigValidationError::LogLevel {
                    configured: level.to_string(),
                });
            }
        }

        if self.tenants.file.is_some() && self.tenants.api_url.is_some() {
            errors.push(ConfigValidationError::ConflictingTenantSources);
        }

        if let Some(url) = self.tenants.api_url.as_deref() {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                errors.push(ConfigValidationError::TenantApiUrl {
                    configured: url.to_string(),
                });
            }
        }

        if let Some(timeout) = self.tenants.lookup_timeout_ms {
            if !(MIN_LOOKUP_TIMEOUT_MS..=MAX_LOOKUP_TIMEOUT_MS).contains(&timeout) {
                errors.push(ConfigValidationError::LookupTimeout {
                    configured: timeout,
                    min_limit: MIN_LOOKUP_TIMEOUT_MS,
                    max_limit: MAX_LOOKUP_TIMEOUT_MS,
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn presets(&self) -> &PresetsConfig {
        &self.presets
    }

    pub fn tenants(&self) -> &TenantsConfig {
        &self.tenants
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PresetsConfig {
    directory: Option<String>,
}

impl PresetsConfig {
    /// Directory holding `<name>.toml` preset files; the platform presets
    /// directory unless one is configured.
    pub fn directory(&self) -> Option<PathBuf> {
        self.directory
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| setup::get_presets_dir().ok())
    }
}

/// Where tenants are read from: a JSON file, a directory API, or neither.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct TenantsConfig {
    file: Option<String>,
    api_url: Option<String>,
    lookup_timeout_ms: Option<u64>,
}

impl TenantsConfig {
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref().map(Path::new)
    }

    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms.unwrap_or(DEFAULT_LOOKUP_TIMEOUT_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> AppConfig {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.logging().level(), "info");
        assert_eq!(config.logging().file(), None);
        assert_eq!(config.presets().directory(), setup::get_presets_dir().ok());
        assert_eq!(
            config.tenants().lookup_timeout(),
            Duration::from_millis(DEFAULT_LOOKUP_TIMEOUT_MS)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_conflicting_tenant_sources() {
        let config = parse(
            r#"
            [tenants]
            file = "tenants.json"
            api_url = "https://wallet.example.com"
            "#,
        );

        let errors = config.validate().unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ConfigValidationError::ConflictingTenantSources]
        ));
    }

    #[test]
    fn test_collects_every_error() {
        let config = parse(
            r#"
            [logging]
            level = "loud"

            [tenants]
            api_url = "ftp://wallet.example.com"
            lookup_timeout_ms = 0
            "#,
        );

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigValidationError::LookupTimeout { configured: 0, .. }
        )));
    }

    #[test]
    fn test_timeout_bounds() {
        for (timeout, valid) in [(1, true), (60_000, true), (60_001, false)] {
            let config = parse(&format!("[tenants]\nlookup_timeout_ms = {timeout}\n"));
            assert_eq!(config.validate().is_ok(), valid, "timeout {timeout}");
        }
    }
}
