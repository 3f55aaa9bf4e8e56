use config::{Config, Environment, File};
use std::path::Path;

pub mod app;
pub mod setup;
pub mod validation;

pub use app::{AppConfig, LoggingConfig, PresetsConfig, TenantsConfig};
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Prefix of environment overrides, e.g. `WHITELABEL__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "WHITELABEL";

/// Loads the configuration.
///
/// With an explicit path that file must exist. Otherwise the platform config
/// file and then `./config.toml` are read when present. Environment variables
/// (after loading `.env`) override file values either way.
pub fn load_config(explicit: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder = Config::builder();
    match explicit {
        Some(path) => {
            builder = builder.add_source(File::from(path).required(true));
        }
        None => {
            match setup::get_config_file_path() {
                Ok(path) => builder = builder.add_source(File::from(path).required(false)),
                Err(e) => log::debug!("No platform config file: {e}"),
            }
            builder = builder.add_source(File::with_name("config.toml").required(false));
        }
    }
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__");

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}
