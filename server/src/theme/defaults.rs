use crate::theme::types::{
    Brand, Colors, ComponentStyle, Components, Density, Effects, FontWeights, Layout, ThemeConfig,
    ThemeMode, Typography,
};
use once_cell::sync::Lazy;

/// Inline wallet glyph used whenever no valid logo is configured.
pub const DEFAULT_LOGO: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCAyNCAyNCI+PHJlY3QgeD0iMiIgeT0iNSIgd2lkdGg9IjIwIiBoZWlnaHQ9IjE0IiByeD0iMyIgZmlsbD0iIzRmNDZlNSIvPjxjaXJjbGUgY3g9IjE3IiBjeT0iMTIiIHI9IjIiIGZpbGw9IiNmZmYiLz48L3N2Zz4=";

pub const DEFAULT_BRAND_NAME: &str = "Digital Wallet";
pub const DEFAULT_TAGLINE: &str = "Pay, save and send in one place";

static DEFAULT_CONFIG: Lazy<ThemeConfig> = Lazy::new(build_default_config);

/// The platform's own wallet identity, the bottom layer of every resolution.
pub fn default_config() -> ThemeConfig {
    DEFAULT_CONFIG.clone()
}

fn build_default_config() -> ThemeConfig {
    let colors = Colors {
        primary: "#4f46e5".into(),
        secondary: "#0ea5e9".into(),
        accent: "#f59e0b".into(),
        background: "#f8fafc".into(),
        surface: "#ffffff".into(),
        text: "#0f172a".into(),
        text_muted: "#64748b".into(),
        border: "#e2e8f0".into(),
        success: "#16a34a".into(),
        warning: "#d97706".into(),
        error: "#dc2626".into(),
    };

    ThemeConfig {
        components: components_for(&colors),
        colors,
        typography: Typography {
            font_family: "'Inter', system-ui, sans-serif".into(),
            heading_font_family: "'Inter', system-ui, sans-serif".into(),
            base_size: "16px".into(),
            line_height: "1.5".into(),
            weights: FontWeights {
                regular: 400,
                medium: 500,
                bold: 700,
            },
        },
        layout: Layout {
            spacing: "1rem".into(),
            border_radius: "0.75rem".into(),
            density: Density::Comfortable,
            max_content_width: "1200px".into(),
            sidebar_width: "260px".into(),
        },
        effects: Effects {
            shadows: true,
            animations: true,
            transitions: true,
            transition_duration: "200ms".into(),
        },
        brand: Brand {
            name: DEFAULT_BRAND_NAME.into(),
            tagline: DEFAULT_TAGLINE.into(),
            logo: DEFAULT_LOGO.into(),
            theme: ThemeMode::Light,
        },
    }
}

/// Widget styles derived from a palette. Used by the default config and the
/// built-in presets so their components stay consistent with their colors.
pub(crate) fn components_for(colors: &Colors) -> Components {
    Components {
        button: ComponentStyle {
            background: colors.primary.clone(),
            color: "#ffffff".into(),
            border_radius: "0.5rem".into(),
            padding: "0.625rem 1.25rem".into(),
            border: "none".into(),
            shadow: "0 1px 2px rgba(0,0,0,0.08)".into(),
        },
        card: ComponentStyle {
            background: colors.surface.clone(),
            color: colors.text.clone(),
            border_radius: "0.75rem".into(),
            padding: "1.5rem".into(),
            border: format!("1px solid {}", colors.border).into(),
            shadow: "0 4px 12px rgba(0,0,0,0.06)".into(),
        },
        input: ComponentStyle {
            background: colors.surface.clone(),
            color: colors.text.clone(),
            border_radius: "0.5rem".into(),
            padding: "0.5rem 0.75rem".into(),
            border: format!("1px solid {}", colors.border).into(),
            shadow: "none".into(),
        },
        navigation: ComponentStyle {
            background: colors.surface.clone(),
            color: colors.text_muted.clone(),
            border_radius: "0".into(),
            padding: "0.75rem 1rem".into(),
            border: format!("1px solid {}", colors.border).into(),
            shadow: "none".into(),
        },
    }
}
