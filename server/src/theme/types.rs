use crate::theme::merge::{Mergeable, lenient};
use crate::theme::validation::{
    ColorValidator, DisplayTextValidator, LogoValidator, StyleValueValidator, ThemeValidationError,
};
use crate::validation::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines a complete configuration section, its all-optional patch form and
/// the field-by-field [`Mergeable`] implementation tying them together.
macro_rules! theme_section {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $partial:ident {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        #[doc = concat!("Patch form of [`", stringify!($name), "`]; absent fields keep the base value.")]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $partial {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
                pub $field: Option<<$ty as Mergeable>::Patch>,
            )*
        }

        impl Mergeable for $name {
            type Patch = $partial;

            fn merge(&self, patch: &$partial) -> Self {
                Self {
                    $(
                        $field: match &patch.$field {
                            Some(field_patch) => self.$field.merge(field_patch),
                            None => self.$field.clone(),
                        },
                    )*
                }
            }

            fn to_patch(&self) -> $partial {
                $partial {
                    $( $field: Some(self.$field.to_patch()), )*
                }
            }
        }

        impl From<&$name> for $partial {
            fn from(value: &$name) -> Self {
                value.to_patch()
            }
        }
    };
}

/// Defines a string leaf that is checked by `$validator` before it is merged.
macro_rules! checked_text {
    ($(#[$meta:meta])* $name:ident => $validator:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn check(&self) -> Result<(), ThemeValidationError> {
                $validator.validate(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

checked_text!(
    /// A CSS color string.
    Color => ColorValidator
);
checked_text!(
    /// A free-text style token such as `12px` or a font stack.
    StyleValue => StyleValueValidator
);
checked_text!(
    /// A logo reference: an absolute http(s) URL or an inline `data:image/` URI.
    LogoRef => LogoValidator
);
checked_text!(
    /// Text shown to the user: a document title, a splash caption.
    DisplayText => DisplayTextValidator
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    Comfortable,
    Spacious,
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Density::Compact => f.write_str("compact"),
            Density::Comfortable => f.write_str("comfortable"),
            Density::Spacious => f.write_str("spacious"),
        }
    }
}

theme_section! {
    /// The complete branding and style configuration used to render every screen.
    ///
    /// A value of this type is always complete; partial input arrives as a
    /// [`PartialThemeConfig`] and is merged onto a complete base.
    pub struct ThemeConfig / PartialThemeConfig {
        pub colors: Colors,
        pub typography: Typography,
        pub components: Components,
        pub layout: Layout,
        pub effects: Effects,
        pub brand: Brand,
    }
}

theme_section! {
    /// Named color roles.
    pub struct Colors / PartialColors {
        pub primary: Color,
        pub secondary: Color,
        pub accent: Color,
        pub background: Color,
        pub surface: Color,
        pub text: Color,
        pub text_muted: Color,
        pub border: Color,
        pub success: Color,
        pub warning: Color,
        pub error: Color,
    }
}

impl Colors {
    /// Color roles keyed by their serialized name.
    pub fn entries(&self) -> [(&'static str, &Color); 11] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("surface", &self.surface),
            ("text", &self.text),
            ("textMuted", &self.text_muted),
            ("border", &self.border),
            ("success", &self.success),
            ("warning", &self.warning),
            ("error", &self.error),
        ]
    }
}

theme_section! {
    pub struct Typography / PartialTypography {
        pub font_family: StyleValue,
        pub heading_font_family: StyleValue,
        pub base_size: StyleValue,
        pub line_height: StyleValue,
        pub weights: FontWeights,
    }
}

theme_section! {
    pub struct FontWeights / PartialFontWeights {
        pub regular: u16,
        pub medium: u16,
        pub bold: u16,
    }
}

theme_section! {
    /// Per-widget style overrides. Each widget kind merges independently.
    pub struct Components / PartialComponents {
        pub button: ComponentStyle,
        pub card: ComponentStyle,
        pub input: ComponentStyle,
        pub navigation: ComponentStyle,
    }
}

impl Components {
    /// Widget kinds keyed by their serialized name.
    pub fn entries(&self) -> [(&'static str, &ComponentStyle); 4] {
        [
            ("button", &self.button),
            ("card", &self.card),
            ("input", &self.input),
            ("navigation", &self.navigation),
        ]
    }
}

theme_section! {
    pub struct ComponentStyle / PartialComponentStyle {
        pub background: Color,
        pub color: Color,
        pub border_radius: StyleValue,
        pub padding: StyleValue,
        pub border: StyleValue,
        pub shadow: StyleValue,
    }
}

theme_section! {
    pub struct Layout / PartialLayout {
        pub spacing: StyleValue,
        pub border_radius: StyleValue,
        pub density: Density,
        pub max_content_width: StyleValue,
        pub sidebar_width: StyleValue,
    }
}

theme_section! {
    pub struct Effects / PartialEffects {
        pub shadows: bool,
        pub animations: bool,
        pub transitions: bool,
        pub transition_duration: StyleValue,
    }
}

theme_section! {
    /// Brand identity shown in titles, splash screens and the logo slot.
    pub struct Brand / PartialBrand {
        pub name: DisplayText,
        pub tagline: DisplayText,
        pub logo: LogoRef,
        pub theme: ThemeMode,
    }
}

impl ThemeConfig {
    /// Light or dark rendering mode of this configuration.
    pub fn theme(&self) -> ThemeMode {
        self.brand.theme
    }
}

impl PartialThemeConfig {
    /// True when the patch sets nothing at all.
    pub fn is_empty(&self) -> bool {
        *self == PartialThemeConfig::default()
    }
}
