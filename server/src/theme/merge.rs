//! Deep, field-scoped merging of partial configurations onto complete ones.
//!
//! Every section of [`ThemeConfig`] implements [`Mergeable`]. Sections merge
//! field by field and recurse into nested sections, so a patch that only sets
//! `components.button.borderRadius` leaves every sibling untouched. Leaves are
//! replaced outright, after validation for the leaf kinds that end up in a
//! style or markup sink.

use crate::theme::types::{
    Color, Density, DisplayText, LogoRef, PartialThemeConfig, StyleValue, ThemeConfig, ThemeMode,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// A configuration value that a patch of type [`Mergeable::Patch`] can be merged onto.
pub trait Mergeable: Clone {
    type Patch: Clone;

    /// Returns a new value with `patch` applied. Never mutates `self`.
    fn merge(&self, patch: &Self::Patch) -> Self;

    /// Expresses `self` as a patch that sets every leaf.
    fn to_patch(&self) -> Self::Patch;
}

/// Merges `patch` onto `base`, returning a new complete configuration.
pub fn merge(base: &ThemeConfig, patch: &PartialThemeConfig) -> ThemeConfig {
    base.merge(patch)
}

macro_rules! replace_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Mergeable for $ty {
                type Patch = $ty;

                fn merge(&self, patch: &$ty) -> Self {
                    patch.clone()
                }

                fn to_patch(&self) -> $ty {
                    self.clone()
                }
            }
        )*
    };
}

replace_leaf!(bool, u16, String, ThemeMode, Density);

macro_rules! validated_leaf {
    ($($ty:ty => $what:literal),* $(,)?) => {
        $(
            impl Mergeable for $ty {
                type Patch = $ty;

                fn merge(&self, patch: &$ty) -> Self {
                    match patch.check() {
                        Ok(()) => patch.clone(),
                        Err(e) => {
                            log::warn!("Ignoring invalid {} override {:?}: {}", $what, patch.as_str(), e);
                            self.clone()
                        }
                    }
                }

                fn to_patch(&self) -> $ty {
                    self.clone()
                }
            }
        )*
    };
}

validated_leaf!(
    Color => "color",
    StyleValue => "style",
    LogoRef => "logo",
    DisplayText => "display text",
);

/// Deserializes an optional patch field, dropping it instead of failing when
/// the value has the wrong shape. Lets the rest of the patch apply and the
/// dropped leaf fall back to the base value.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            log::debug!("Dropping theme override with unexpected shape: {e}");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::defaults::default_config;
    use crate::theme::types::{PartialBrand, PartialColors, PartialComponentStyle, PartialComponents};

    #[test]
    fn test_absent_patch_keeps_base() {
        let base = default_config();
        assert_eq!(merge(&base, &PartialThemeConfig::default()), base);
    }

    #[test]
    fn test_nested_component_leaf_keeps_siblings() {
        let base = default_config();
        let patch = PartialThemeConfig {
            components: Some(PartialComponents {
                button: Some(PartialComponentStyle {
                    border_radius: Some("999px".into()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = merge(&base, &patch);

        assert_eq!(merged.components.button.border_radius.as_str(), "999px");
        assert_eq!(merged.components.button.padding, base.components.button.padding);
        assert_eq!(merged.components.button.background, base.components.button.background);
        assert_eq!(merged.components.card, base.components.card);
        assert_eq!(merged.components.input, base.components.input);
        assert_eq!(merged.colors, base.colors);
    }

    #[test]
    fn test_invalid_leaves_fall_back_to_base() {
        let base = default_config();
        let patch = PartialThemeConfig {
            colors: Some(PartialColors {
                primary: Some("red;}body{display:none".into()),
                secondary: Some("#123456".into()),
                ..Default::default()
            }),
            brand: Some(PartialBrand {
                logo: Some("javascript:alert(1)".into()),
                name: Some("   ".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = merge(&base, &patch);

        assert_eq!(merged.colors.primary, base.colors.primary);
        assert_eq!(merged.colors.secondary.as_str(), "#123456");
        assert_eq!(merged.brand.logo, base.brand.logo);
        assert_eq!(merged.brand.name, base.brand.name);
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let base = default_config();
        let snapshot = base.clone();
        let patch = base.to_patch();
        let _ = merge(&base, &patch);
        assert_eq!(base, snapshot);
        assert_eq!(merge(&default_config(), &patch), snapshot);
    }

    #[test]
    fn test_lenient_patch_drops_wrong_types_only() {
        let patch: PartialThemeConfig = serde_json::from_value(serde_json::json!({
            "colors": { "primary": 42, "accent": "#00ff00" },
            "effects": { "shadows": "yes", "animations": false },
            "components": 7,
            "brand": { "name": "Acme", "theme": "sepia" },
            "somethingNew": { "nested": true }
        }))
        .unwrap();

        let colors = patch.colors.clone().unwrap();
        assert_eq!(colors.primary, None);
        assert_eq!(colors.accent, Some("#00ff00".into()));
        let effects = patch.effects.clone().unwrap();
        assert_eq!(effects.shadows, None);
        assert_eq!(effects.animations, Some(false));
        assert!(patch.components.is_none());
        let brand = patch.brand.clone().unwrap();
        assert_eq!(brand.name, Some("Acme".into()));
        assert_eq!(brand.theme, None);
    }
}
