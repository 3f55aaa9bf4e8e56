use crate::theme::defaults::{DEFAULT_LOGO, components_for, default_config};
use crate::theme::{Brand, Color, Colors, ThemeConfig, ThemeMode};

/// Builds a full color set from three brand colors, filling the neutral roles
/// from the light or dark base palette.
pub(crate) fn palette(primary: &str, secondary: &str, accent: &str, mode: ThemeMode) -> Colors {
    let neutral = |light: &str, dark: &str| -> Color {
        match mode {
            ThemeMode::Light => light.into(),
            ThemeMode::Dark => dark.into(),
        }
    };

    Colors {
        primary: primary.into(),
        secondary: secondary.into(),
        accent: accent.into(),
        background: neutral("#f8fafc", "#0b0f19"),
        surface: neutral("#ffffff", "#151b2c"),
        text: neutral("#0f172a", "#e2e8f0"),
        text_muted: neutral("#64748b", "#94a3b8"),
        border: neutral("#e2e8f0", "#273049"),
        success: neutral("#16a34a", "#22c55e"),
        warning: neutral("#d97706", "#fbbf24"),
        error: neutral("#dc2626", "#f87171"),
    }
}

/// A complete configuration with the given colors and brand on top of the
/// default typography, layout and effects.
pub(crate) fn branded(colors: Colors, name: &str, tagline: &str, theme: ThemeMode) -> ThemeConfig {
    let mut config = default_config();
    config.components = components_for(&colors);
    config.colors = colors;
    config.brand = Brand {
        name: name.into(),
        tagline: tagline.into(),
        logo: DEFAULT_LOGO.into(),
        theme,
    };
    config
}
