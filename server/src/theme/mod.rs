//! # Theme Model
//!
//! The canonical branding configuration and the operations every resolution
//! layer is built from.
//!
//! - [`ThemeConfig`] - the complete nested configuration (colors, typography,
//!   component styles, layout, effects, brand)
//! - [`PartialThemeConfig`] - the same schema with every leaf optional
//! - [`merge`] - deep, field-scoped merge of a partial onto a complete config
//! - [`to_style_variables`] - pure projection onto CSS custom properties
//! - [`validation`] - leaf and whole-config validators
//!
//! ## Merging
//!
//! ```no_run
//! use server::theme::{PartialThemeConfig, default_config, merge};
//!
//! let patch: PartialThemeConfig = serde_json::from_str(
//!     r##"{ "components": { "button": { "borderRadius": "999px" } } }"##,
//! )?;
//! let config = merge(&default_config(), &patch);
//! // Button padding, the other widgets and every color are still the defaults.
//! ```
//!
//! Leaves that reach a style or markup sink are validated as they are merged:
//! an invalid color, logo or style token in a patch is ignored and the base
//! value is kept.

pub mod defaults;
pub mod merge;
pub mod style_vars;
pub mod types;
pub mod validation;

pub use defaults::default_config;
pub use merge::{Mergeable, merge};
pub use style_vars::{StyleVariables, to_css, to_style_variables};
pub use types::{
    Brand, Color, Colors, ComponentStyle, Components, Density, DisplayText, Effects, FontWeights,
    Layout, LogoRef, PartialBrand, PartialColors, PartialComponentStyle,
    PartialComponents, PartialEffects, PartialFontWeights, PartialLayout, PartialThemeConfig,
    PartialTypography, StyleValue, ThemeConfig, ThemeMode, Typography,
};
