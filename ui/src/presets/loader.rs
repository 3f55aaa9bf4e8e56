use crate::presets::validation::{PresetNameValidator, PresetPathValidator, PresetValidationError};
use server::PresetCatalog;
use server::theme::ThemeConfig;
use server::theme::validation::{ThemeValidationError, ThemeValidator};
use server::validation::Validator;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresetLoadError {
    #[error(transparent)]
    Validation(#[from] PresetValidationError),

    #[error("failed to read presets directory '{path}': {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read preset file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preset file '{path}': {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("preset '{name}' is not a valid configuration: {source}")]
    InvalidTheme {
        name: String,
        #[source]
        source: ThemeValidationError,
    },
}

/// Loads deployment-time presets: one complete configuration per `<name>.toml`.
pub struct PresetLoader {
    presets_dir: PathBuf,
    name_validator: PresetNameValidator,
    path_validator: PresetPathValidator,
    theme_validator: ThemeValidator,
}

impl PresetLoader {
    pub fn new(presets_dir: impl Into<PathBuf>) -> Self {
        Self {
            presets_dir: presets_dir.into(),
            name_validator: PresetNameValidator,
            path_validator: PresetPathValidator,
            theme_validator: ThemeValidator,
        }
    }

    pub fn presets_dir(&self) -> &Path {
        &self.presets_dir
    }

    pub fn load_preset(&self, name: &str) -> Result<ThemeConfig, PresetLoadError> {
        self.name_validator.validate(name)?;

        let path = self.presets_dir.join(format!("{name}.toml"));
        self.path_validator.validate(&path)?;

        let content = fs::read_to_string(&path).map_err(|source| PresetLoadError::Read {
            path: path.clone(),
            source,
        })?;

        let config: ThemeConfig = toml::from_str(&content).map_err(|e| PresetLoadError::Parse {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        self.theme_validator
            .validate(&config)
            .map_err(|source| PresetLoadError::InvalidTheme {
                name: name.to_string(),
                source,
            })?;

        Ok(config)
    }

    /// Names of the `.toml` files in the presets directory that carry a valid
    /// preset name, sorted. A missing directory holds no presets.
    pub fn discover_presets(&self) -> Result<Vec<String>, PresetLoadError> {
        if !self.presets_dir.exists() {
            log::info!(
                "Presets directory {} does not exist, no additional presets loaded",
                self.presets_dir.display()
            );
            return Ok(vec![]);
        }

        let read_dir_error = |source| PresetLoadError::Directory {
            path: self.presets_dir.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.presets_dir).map_err(read_dir_error)? {
            let path = entry.map_err(read_dir_error)?.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|n| n.to_str()) else {
                continue;
            };
            match self.name_validator.validate(name) {
                Ok(()) => names.push(name.to_string()),
                Err(e) => log::warn!("Skipping preset file {}: {e}", path.display()),
            }
        }

        names.sort();
        Ok(names)
    }

    /// Loads every discovered preset. Files that fail to load are skipped with
    /// a warning; only an unreadable directory is an error.
    pub fn load_all(&self) -> Result<Vec<(String, ThemeConfig)>, PresetLoadError> {
        let mut presets = Vec::new();
        for name in self.discover_presets()? {
            match self.load_preset(&name) {
                Ok(config) => presets.push((name, config)),
                Err(e) => log::warn!("Skipping preset '{name}': {e}"),
            }
        }
        Ok(presets)
    }

    /// The built-in catalog extended with the presets on disk.
    pub fn build_catalog(&self) -> Result<PresetCatalog, PresetLoadError> {
        let presets = self.load_all()?;
        log::info!(
            "Loaded {} preset file(s) from {}",
            presets.len(),
            self.presets_dir.display()
        );
        Ok(PresetCatalog::builtin().with_additional(presets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_matches, assert_ok};
    use server::theme::default_config;

    fn write_preset(dir: &Path, name: &str, brand: &str) {
        let mut config = default_config();
        config.brand.name = brand.into();
        let content = toml::to_string(&config).unwrap();
        fs::write(dir.join(format!("{name}.toml")), content).unwrap();
    }

    #[test]
    fn test_load_preset() {
        let dir = tempfile::tempdir().unwrap();
        write_preset(dir.path(), "acme", "Acme Pay");

        let loader = PresetLoader::new(dir.path());
        let config = assert_ok!(loader.load_preset("acme"));

        assert_eq!(config.brand.name.as_str(), "Acme Pay");
        assert_eq!(config.colors, default_config().colors);
    }

    #[test]
    fn test_missing_preset_errors() {
        let dir = tempfile::tempdir().unwrap();
        let loader = PresetLoader::new(dir.path());

        let error = assert_err!(loader.load_preset("nonexistent"));
        assert!(error.to_string().contains("nonexistent"));
        assert_matches!(
            assert_err!(loader.load_preset("../escape")),
            PresetLoadError::Validation(PresetValidationError::InvalidPresetName { .. })
        );
    }

    #[test]
    fn test_incomplete_and_unsafe_presets_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("partial.toml"), "[colors]\nprimary = \"#ff0000\"\n").unwrap();

        let mut hostile = default_config();
        hostile.components.card.padding = "1rem; background: url(x)".into();
        fs::write(
            dir.path().join("hostile.toml"),
            toml::to_string(&hostile).unwrap(),
        )
        .unwrap();

        let loader = PresetLoader::new(dir.path());
        assert_matches!(
            assert_err!(loader.load_preset("partial")),
            PresetLoadError::Parse { .. }
        );
        assert_matches!(
            assert_err!(loader.load_preset("hostile")),
            PresetLoadError::InvalidTheme { .. }
        );
        assert!(assert_ok!(loader.load_all()).is_empty());
    }

    #[test]
    fn test_discover_skips_invalid_names_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        write_preset(dir.path(), "zeta", "Zeta");
        write_preset(dir.path(), "alpha", "Alpha");
        write_preset(dir.path(), "-bad", "Bad");
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let loader = PresetLoader::new(dir.path());
        assert_eq!(assert_ok!(loader.discover_presets()), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_missing_directory_holds_no_presets() {
        let loader = PresetLoader::new("/definitely/not/a/presets/dir");
        assert!(assert_ok!(loader.discover_presets()).is_empty());
    }

    #[test]
    fn test_catalog_never_overrides_builtins() {
        let dir = tempfile::tempdir().unwrap();
        write_preset(dir.path(), "gaming", "Impostor");
        write_preset(dir.path(), "acme", "Acme Pay");

        let catalog = assert_ok!(PresetLoader::new(dir.path()).build_catalog());

        assert_ne!(catalog.lookup("gaming").unwrap().brand.name.as_str(), "Impostor");
        assert_eq!(catalog.lookup("acme").unwrap().brand.name.as_str(), "Acme Pay");
        assert_eq!(catalog.len(), PresetCatalog::builtin().len() + 1);
    }
}
