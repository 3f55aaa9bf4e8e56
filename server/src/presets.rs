//! Named, complete configurations selectable through `_hidden_brand_experience`.

use crate::palette::{branded, palette};
use crate::theme::{ThemeConfig, ThemeMode, default_config};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::sync::Arc;

static GLOBAL_CATALOG: OnceCell<Arc<PresetCatalog>> = OnceCell::new();

/// Immutable mapping from preset name to complete configuration.
///
/// Built once at startup, optionally extended with presets shipped as files
/// at deployment time, then installed process-wide with
/// [`PresetCatalog::install_global`].
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCatalog {
    presets: BTreeMap<String, ThemeConfig>,
}

impl PresetCatalog {
    /// Catalog containing only the built-in presets.
    pub fn builtin() -> Self {
        let mut presets = BTreeMap::new();
        presets.insert("default".to_string(), default_config());
        presets.insert(
            "gaming".to_string(),
            branded(
                palette("#a855f7", "#22d3ee", "#84cc16", ThemeMode::Dark),
                "Arcade Pay",
                "Top up, play on",
                ThemeMode::Dark,
            ),
        );
        presets.insert(
            "blue".to_string(),
            branded(
                palette("#1d4ed8", "#60a5fa", "#f59e0b", ThemeMode::Light),
                "Blue Horizon Wallet",
                "Your money, clearly",
                ThemeMode::Light,
            ),
        );
        presets.insert(
            "purple".to_string(),
            branded(
                palette("#6d28d9", "#a78bfa", "#ec4899", ThemeMode::Light),
                "Violet Wallet",
                "Payments with personality",
                ThemeMode::Light,
            ),
        );
        presets.insert(
            "green".to_string(),
            branded(
                palette("#15803d", "#4ade80", "#0ea5e9", ThemeMode::Light),
                "Evergreen Wallet",
                "Spend well, track your footprint",
                ThemeMode::Light,
            ),
        );
        presets.insert(
            "dark".to_string(),
            branded(
                palette("#6366f1", "#14b8a6", "#f59e0b", ThemeMode::Dark),
                "Midnight Wallet",
                "Pay, save and send in one place",
                ThemeMode::Dark,
            ),
        );
        Self { presets }
    }

    /// Adds deployment-time presets. Built-in names are never overridden.
    pub fn with_additional(mut self, extra: impl IntoIterator<Item = (String, ThemeConfig)>) -> Self {
        for (name, config) in extra {
            if self.presets.contains_key(&name) {
                log::warn!("Preset '{name}' already exists, keeping the existing definition");
                continue;
            }
            log::info!("Registered preset '{name}'");
            self.presets.insert(name, config);
        }
        self
    }

    /// Looks up a preset by its exact name.
    pub fn lookup(&self, name: &str) -> Option<&ThemeConfig> {
        self.presets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Installs the process-wide catalog. Fails with the rejected catalog if
    /// one was already installed or the built-in one was already used.
    pub fn install_global(catalog: PresetCatalog) -> Result<(), Arc<PresetCatalog>> {
        GLOBAL_CATALOG.set(Arc::new(catalog))?;
        log::info!("Global preset catalog installed");
        Ok(())
    }

    /// The process-wide catalog, falling back to the built-ins when nothing was installed.
    pub fn global() -> Arc<PresetCatalog> {
        GLOBAL_CATALOG
            .get_or_init(|| Arc::new(PresetCatalog::builtin()))
            .clone()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::validation::ThemeValidator;
    use crate::validation::Validator;

    #[test]
    fn test_builtin_presets_are_complete_and_valid() {
        let catalog = PresetCatalog::builtin();
        for name in ["default", "gaming", "blue", "purple", "green", "dark"] {
            let preset = catalog.lookup(name).unwrap();
            assert!(ThemeValidator.validate(preset).is_ok(), "preset {name}");
        }
        assert_eq!(catalog.lookup("gaming").unwrap().brand.name.as_str(), "Arcade Pay");
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = PresetCatalog::builtin();
        assert!(catalog.lookup("Gaming").is_none());
        assert!(catalog.lookup(" gaming").is_none());
        assert!(catalog.lookup("unknown").is_none());
    }

    #[test]
    fn test_additional_presets_never_replace_builtins() {
        let mut custom = default_config();
        custom.brand.name = "Custom".into();

        let catalog = PresetCatalog::builtin().with_additional([
            ("gaming".to_string(), custom.clone()),
            ("partner".to_string(), custom.clone()),
        ]);

        assert_eq!(catalog.lookup("gaming").unwrap().brand.name.as_str(), "Arcade Pay");
        assert_eq!(catalog.lookup("partner"), Some(&custom));
        assert_eq!(catalog.len(), 7);
    }
}
