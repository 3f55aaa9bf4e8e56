//! Projection of a [`ThemeConfig`] onto CSS custom properties.

use crate::theme::types::{ComponentStyle, ThemeConfig};
use crate::theme::validation::{FORBIDDEN_STYLE_CHARS, FORBIDDEN_STYLE_SEQUENCES};
use std::collections::BTreeMap;

/// Style variable name to value, ordered for stable output.
pub type StyleVariables = BTreeMap<String, String>;

/// Projects a complete configuration onto style variables.
///
/// Pure and total: every value goes through [`sanitize_style_value`], so the
/// result is safe to write into a style sink even for a configuration built
/// directly in code without validation.
pub fn to_style_variables(config: &ThemeConfig) -> StyleVariables {
    let mut vars = StyleVariables::new();
    let mut put = |name: String, value: &str| {
        vars.insert(name, sanitize_style_value(value));
    };

    for (role, color) in config.colors.entries() {
        put(format!("--color-{}", kebab(role)), color.as_str());
    }

    let typography = &config.typography;
    put("--font-family".into(), typography.font_family.as_str());
    put(
        "--font-family-heading".into(),
        typography.heading_font_family.as_str(),
    );
    put("--font-size-base".into(), typography.base_size.as_str());
    put("--line-height".into(), typography.line_height.as_str());
    put(
        "--font-weight-regular".into(),
        &typography.weights.regular.to_string(),
    );
    put(
        "--font-weight-medium".into(),
        &typography.weights.medium.to_string(),
    );
    put(
        "--font-weight-bold".into(),
        &typography.weights.bold.to_string(),
    );

    for (kind, style) in config.components.entries() {
        for (property, value) in component_properties(style) {
            put(format!("--{kind}-{property}"), value);
        }
    }

    let layout = &config.layout;
    put("--layout-spacing".into(), layout.spacing.as_str());
    put("--layout-border-radius".into(), layout.border_radius.as_str());
    put("--layout-density".into(), &layout.density.to_string());
    put(
        "--layout-max-content-width".into(),
        layout.max_content_width.as_str(),
    );
    put("--layout-sidebar-width".into(), layout.sidebar_width.as_str());

    let effects = &config.effects;
    put("--effect-shadows".into(), flag(effects.shadows));
    put("--effect-animations".into(), flag(effects.animations));
    put("--effect-transitions".into(), flag(effects.transitions));
    put(
        "--effect-transition-duration".into(),
        effects.transition_duration.as_str(),
    );

    put("--brand-theme".into(), &config.brand.theme.to_string());

    vars
}

/// Renders the style variables of `config` as a `:root` rule.
pub fn to_css(config: &ThemeConfig) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in to_style_variables(config) {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    css.push('}');
    css
}

/// Strips anything that could end a declaration, open markup or pull in a
/// remote resource. Valid values pass through unchanged.
pub fn sanitize_style_value(value: &str) -> String {
    let mut cleaned: String = value
        .chars()
        .filter(|c| !c.is_control() && !FORBIDDEN_STYLE_CHARS.contains(c))
        .collect();

    loop {
        let lower = cleaned.to_ascii_lowercase();
        let Some((start, len)) = FORBIDDEN_STYLE_SEQUENCES
            .iter()
            .filter_map(|sequence| lower.find(sequence).map(|start| (start, sequence.len())))
            .min()
        else {
            break;
        };
        cleaned.replace_range(start..start + len, "");
    }

    cleaned.trim().to_string()
}

fn component_properties(style: &ComponentStyle) -> [(&'static str, &str); 6] {
    [
        ("background", style.background.as_str()),
        ("color", style.color.as_str()),
        ("border-radius", style.border_radius.as_str()),
        ("padding", style.padding.as_str()),
        ("border", style.border.as_str()),
        ("shadow", style.shadow.as_str()),
    ]
}

fn flag(enabled: bool) -> &'static str {
    if enabled { "1" } else { "0" }
}

fn kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
