//! Deployment-time presets loaded from TOML files.

pub mod loader;
pub mod validation;

pub use loader::{PresetLoadError, PresetLoader};
pub use validation::{PresetNameValidator, PresetPathValidator, PresetValidationError};

use server::PresetCatalog;
use std::path::Path;
use std::sync::Arc;

/// Builds the preset catalog and installs it as the process-wide catalog.
///
/// Without a directory only the built-in presets are available. Returns the
/// installed catalog, which is the earlier one when a catalog was already
/// installed.
pub fn init_catalog(directory: Option<&Path>) -> Result<Arc<PresetCatalog>, PresetLoadError> {
    let catalog = match directory {
        Some(dir) => PresetLoader::new(dir).build_catalog()?,
        None => PresetCatalog::builtin(),
    };

    if PresetCatalog::install_global(catalog).is_err() {
        log::warn!("Preset catalog already installed, keeping the existing one");
    }
    Ok(PresetCatalog::global())
}
