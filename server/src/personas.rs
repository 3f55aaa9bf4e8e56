//! Built-in embeddable personas selected with the `appType` parameter.
//!
//! Personas predate the tenant directory. Each maps to exactly one
//! hard-coded branding record plus an icon that the logo component uses when
//! no image is shown.

use crate::palette::{branded, palette};
use crate::theme::{ThemeConfig, ThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
    Blue,
    Purple,
    Red,
}

impl AppType {
    pub const ALL: [AppType; 3] = [AppType::Blue, AppType::Purple, AppType::Red];

    /// Parses an `appType` parameter value, ignoring case.
    pub fn parse(value: &str) -> Option<AppType> {
        match value.trim().to_ascii_lowercase().as_str() {
            "blue" => Some(AppType::Blue),
            "purple" => Some(AppType::Purple),
            "red" => Some(AppType::Red),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::Blue => "blue",
            AppType::Purple => "purple",
            AppType::Red => "red",
        }
    }

    /// The persona this app type selects.
    pub fn persona(&self) -> &'static Persona {
        match self {
            AppType::Blue => &PERSONAS[0],
            AppType::Purple => &PERSONAS[1],
            AppType::Red => &PERSONAS[2],
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon shown for a persona when the logo slot renders a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaIcon {
    Car,
    Book,
    Game,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Persona {
    pub app_type: AppType,
    pub icon: PersonaIcon,
    pub config: ThemeConfig,
}

static PERSONAS: Lazy<[Persona; 3]> = Lazy::new(|| {
    [
        Persona {
            app_type: AppType::Blue,
            icon: PersonaIcon::Car,
            config: branded(
                palette("#2563eb", "#38bdf8", "#facc15", ThemeMode::Light),
                "BingGo Parking",
                "Park smarter, pay faster",
                ThemeMode::Light,
            ),
        },
        Persona {
            app_type: AppType::Purple,
            icon: PersonaIcon::Book,
            config: branded(
                palette("#7c3aed", "#c084fc", "#f472b6", ThemeMode::Light),
                "GiveGrove Donations",
                "Every coin counts",
                ThemeMode::Light,
            ),
        },
        Persona {
            app_type: AppType::Red,
            icon: PersonaIcon::Game,
            config: branded(
                palette("#dc2626", "#f97316", "#22d3ee", ThemeMode::Dark),
                "FusionForge Gaming",
                "Level up your wallet",
                ThemeMode::Dark,
            ),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::validation::ThemeValidator;
    use crate::validation::Validator;

    #[test]
    fn test_parse_app_type() {
        assert_eq!(AppType::parse("blue"), Some(AppType::Blue));
        assert_eq!(AppType::parse(" RED "), Some(AppType::Red));
        assert_eq!(AppType::parse("green"), None);
        assert_eq!(AppType::parse(""), None);
    }

    #[test]
    fn test_each_app_type_maps_to_its_persona() {
        for app_type in AppType::ALL {
            let persona = app_type.persona();
            assert_eq!(persona.app_type, app_type);
            assert!(ThemeValidator.validate(&persona.config).is_ok());
        }

        let red = AppType::Red.persona();
        assert_eq!(red.config.brand.name.as_str(), "FusionForge Gaming");
        assert_eq!(red.config.theme(), ThemeMode::Dark);
        assert_eq!(red.icon, PersonaIcon::Game);
        assert_eq!(AppType::Blue.persona().icon, PersonaIcon::Car);
    }
}
