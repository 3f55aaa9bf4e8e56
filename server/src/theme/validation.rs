use crate::theme::types::ThemeConfig;
use crate::validation::Validator;
use thiserror::Error;

/// Longest free-text style token accepted from an override.
const MAX_STYLE_VALUE_LEN: usize = 256;
/// Longest brand display name.
const MAX_DISPLAY_TEXT_LEN: usize = 120;

/// Substrings that may not appear in any value written into a style sink.
pub(crate) const FORBIDDEN_STYLE_SEQUENCES: [&str; 4] =
    ["url(", "expression(", "javascript:", "@import"];
/// Characters that could terminate a declaration or open markup.
pub(crate) const FORBIDDEN_STYLE_CHARS: [char; 7] = [';', '{', '}', '<', '>', '`', '\\'];

/// Characters that would open or close markup around display text.
const FORBIDDEN_TEXT_CHARS: [char; 2] = ['<', '>'];

/// Validation errors for theme leaves and complete configurations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeValidationError {
    #[error("invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("invalid logo reference: {reason}")]
    InvalidLogo { reason: String },

    #[error("unsafe style value '{value}': {reason}")]
    UnsafeStyleValue { value: String, reason: String },

    #[error("invalid display text: {reason}")]
    InvalidDisplayText { reason: String },

    #[error("{field}: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<ThemeValidationError>,
    },
}

impl ThemeValidationError {
    fn at(self, field: &str) -> Self {
        ThemeValidationError::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }
}

/// Validator for CSS color strings: hex, rgb/hsl functions or a bare color keyword.
pub struct ColorValidator;

impl Validator<str> for ColorValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| ThemeValidationError::InvalidColor {
            value: input.to_string(),
            reason: reason.to_string(),
        };
        let value = input.trim();

        if value.is_empty() {
            return Err(invalid("color cannot be empty"));
        }

        if let Some(hex) = value.strip_prefix('#') {
            if !matches!(hex.len(), 3 | 4 | 6 | 8) {
                return Err(invalid("hex colors need 3, 4, 6 or 8 digits"));
            }
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid("hex colors may only contain hex digits"));
            }
            return Ok(());
        }

        let lower = value.to_ascii_lowercase();
        for function in ["rgba(", "rgb(", "hsla(", "hsl("] {
            if let Some(rest) = lower.strip_prefix(function) {
                let Some(args) = rest.strip_suffix(')') else {
                    return Err(invalid("unterminated color function"));
                };
                let args = args.replace("deg", "");
                if args.trim().is_empty() {
                    return Err(invalid("color function has no arguments"));
                }
                if !args
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%' | '/' | '-' | ' '))
                {
                    return Err(invalid("color function arguments must be numeric"));
                }
                return Ok(());
            }
        }

        if value.len() <= 32 && value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(());
        }

        Err(invalid("not a hex, functional or named color"))
    }
}

/// Validator for brand logos: an absolute http(s) URL or an inline `data:image/` URI.
pub struct LogoValidator;

impl LogoValidator {
    fn validate_url(rest: &str) -> Result<(), ThemeValidationError> {
        let host_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let host = &rest[..host_end];
        if host.is_empty() {
            return Err(ThemeValidationError::InvalidLogo {
                reason: "URL has no host".to_string(),
            });
        }
        if !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':'))
        {
            return Err(ThemeValidationError::InvalidLogo {
                reason: "URL host contains invalid characters".to_string(),
            });
        }
        if rest
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '\\'))
        {
            return Err(ThemeValidationError::InvalidLogo {
                reason: "URL contains characters that must be percent-encoded".to_string(),
            });
        }
        Ok(())
    }

    fn validate_data_uri(rest: &str) -> Result<(), ThemeValidationError> {
        let Some((header, payload)) = rest.split_once(',') else {
            return Err(ThemeValidationError::InvalidLogo {
                reason: "data URI has no payload separator".to_string(),
            });
        };
        let mut parts = header.split(';');
        let subtype = parts.next().unwrap_or_default();
        if subtype.is_empty()
            || !subtype
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            return Err(ThemeValidationError::InvalidLogo {
                reason: format!("unsupported image subtype '{subtype}'"),
            });
        }
        if !parts.all(|param| {
            !param.is_empty()
                && param
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '=' | '-'))
        }) {
            return Err(ThemeValidationError::InvalidLogo {
                reason: "malformed data URI parameter".to_string(),
            });
        }
        if payload.is_empty() {
            return Err(ThemeValidationError::InvalidLogo {
                reason: "data URI payload is empty".to_string(),
            });
        }
        if payload.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '(' | ')')
        }) {
            return Err(ThemeValidationError::InvalidLogo {
                reason: "data URI payload contains invalid characters".to_string(),
            });
        }
        Ok(())
    }
}

impl Validator<str> for LogoValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let lower = input.to_ascii_lowercase();
        if lower.starts_with("https://") {
            Self::validate_url(&input["https://".len()..])
        } else if lower.starts_with("http://") {
            Self::validate_url(&input["http://".len()..])
        } else if lower.starts_with("data:image/") {
            Self::validate_data_uri(&input["data:image/".len()..])
        } else {
            Err(ThemeValidationError::InvalidLogo {
                reason: "expected an http(s) URL or a data:image URI".to_string(),
            })
        }
    }
}

/// Validator for free-text style tokens (sizes, font stacks, shadows, borders).
pub struct StyleValueValidator;

impl Validator<str> for StyleValueValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let unsafe_value = |reason: &str| ThemeValidationError::UnsafeStyleValue {
            value: input.to_string(),
            reason: reason.to_string(),
        };

        if input.trim().is_empty() {
            return Err(unsafe_value("value cannot be empty"));
        }
        if input.len() > MAX_STYLE_VALUE_LEN {
            return Err(unsafe_value("value too long"));
        }
        if input.chars().any(|c| c.is_control()) {
            return Err(unsafe_value("value contains control characters"));
        }
        if let Some(c) = input.chars().find(|c| FORBIDDEN_STYLE_CHARS.contains(c)) {
            return Err(unsafe_value(&format!("character '{c}' is not allowed")));
        }
        let lower = input.to_ascii_lowercase();
        if let Some(sequence) = FORBIDDEN_STYLE_SEQUENCES
            .iter()
            .find(|sequence| lower.contains(*sequence))
        {
            return Err(unsafe_value(&format!("'{sequence}' is not allowed")));
        }
        Ok(())
    }
}

/// Validator for display text shown as a title or caption (brand names, taglines).
pub struct DisplayTextValidator;

impl Validator<str> for DisplayTextValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.trim().is_empty() {
            return Err(ThemeValidationError::InvalidDisplayText {
                reason: "text cannot be empty".to_string(),
            });
        }
        if input.chars().count() > MAX_DISPLAY_TEXT_LEN {
            return Err(ThemeValidationError::InvalidDisplayText {
                reason: format!("text too long (max {MAX_DISPLAY_TEXT_LEN} characters)"),
            });
        }
        if input.chars().any(|c| c.is_control()) {
            return Err(ThemeValidationError::InvalidDisplayText {
                reason: "text contains control characters".to_string(),
            });
        }
        if let Some(c) = input.chars().find(|c| FORBIDDEN_TEXT_CHARS.contains(c)) {
            return Err(ThemeValidationError::InvalidDisplayText {
                reason: format!("character '{c}' is not allowed"),
            });
        }
        Ok(())
    }
}

/// Validator for a complete configuration, used on presets loaded from disk
/// and on every resolved value in debug builds.
pub struct ThemeValidator;

impl Validator<ThemeConfig> for ThemeValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &ThemeConfig) -> Result<(), Self::Error> {
        for (name, color) in input.colors.entries() {
            ColorValidator
                .validate(color.as_str())
                .map_err(|e| e.at(&format!("colors.{name}")))?;
        }

        for (kind, style) in input.components.entries() {
            for (name, color) in [("background", &style.background), ("color", &style.color)] {
                ColorValidator
                    .validate(color.as_str())
                    .map_err(|e| e.at(&format!("components.{kind}.{name}")))?;
            }
            for (name, value) in [
                ("borderRadius", &style.border_radius),
                ("padding", &style.padding),
                ("border", &style.border),
                ("shadow", &style.shadow),
            ] {
                StyleValueValidator
                    .validate(value.as_str())
                    .map_err(|e| e.at(&format!("components.{kind}.{name}")))?;
            }
        }

        let typography = &input.typography;
        let layout = &input.layout;
        for (field, value) in [
            ("typography.fontFamily", &typography.font_family),
            ("typography.headingFontFamily", &typography.heading_font_family),
            ("typography.baseSize", &typography.base_size),
            ("typography.lineHeight", &typography.line_height),
            ("layout.spacing", &layout.spacing),
            ("layout.borderRadius", &layout.border_radius),
            ("layout.maxContentWidth", &layout.max_content_width),
            ("layout.sidebarWidth", &layout.sidebar_width),
            ("effects.transitionDuration", &input.effects.transition_duration),
        ] {
            StyleValueValidator
                .validate(value.as_str())
                .map_err(|e| e.at(field))?;
        }

        LogoValidator
            .validate(input.brand.logo.as_str())
            .map_err(|e| e.at("brand.logo"))?;
        DisplayTextValidator
            .validate(input.brand.name.as_str())
            .map_err(|e| e.at("brand.name"))?;
        DisplayTextValidator
            .validate(input.brand.tagline.as_str())
            .map_err(|e| e.at("brand.tagline"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::defaults::default_config;

    #[test]
    fn test_color_validator() {
        let validator = ColorValidator;

        assert!(validator.validate("#fff").is_ok());
        assert!(validator.validate("#4F46E5").is_ok());
        assert!(validator.validate("#4f46e580").is_ok());
        assert!(validator.validate("rgb(10, 20, 30)").is_ok());
        assert!(validator.validate("rgba(10,20,30,0.5)").is_ok());
        assert!(validator.validate("hsl(210deg 40% 50%)").is_ok());
        assert!(validator.validate("transparent").is_ok());
        assert!(validator.validate("rebeccapurple").is_ok());

        assert!(validator.validate("").is_err());
        assert!(validator.validate("#ggg").is_err());
        assert!(validator.validate("#12345").is_err());
        assert!(validator.validate("red; background: url(x)").is_err());
        assert!(validator.validate("rgb(1,2,3").is_err());
        assert!(validator.validate("rgb(var(--x))").is_err());
        assert!(validator.validate("expression(alert(1))").is_err());
    }

    #[test]
    fn test_logo_validator() {
        let validator = LogoValidator;

        assert!(validator.validate("https://cdn.example.com/logo.png").is_ok());
        assert!(validator.validate("http://localhost:5000/logo.svg").is_ok());
        assert!(validator.validate("data:image/png;base64,iVBORw0KGgo=").is_ok());
        assert!(validator.validate("data:image/svg+xml;base64,PHN2Zz4=").is_ok());

        assert!(validator.validate("").is_err());
        assert!(validator.validate("logo.png").is_err());
        assert!(validator.validate("javascript:alert(1)").is_err());
        assert!(validator.validate("ftp://example.com/logo.png").is_err());
        assert!(validator.validate("https://").is_err());
        assert!(validator.validate("https://evil.com/\"onerror=\"x").is_err());
        assert!(validator.validate("data:text/html;base64,PGgxPg==").is_err());
        assert!(validator.validate("data:image/png;base64,").is_err());
    }

    #[test]
    fn test_style_value_validator() {
        let validator = StyleValueValidator;

        assert!(validator.validate("12px").is_ok());
        assert!(validator.validate("'Inter', system-ui, sans-serif").is_ok());
        assert!(validator.validate("0 4px 12px rgba(0,0,0,0.1)").is_ok());

        assert!(validator.validate("").is_err());
        assert!(validator.validate("12px; color: red").is_err());
        assert!(validator.validate("} body { display:none").is_err());
        assert!(validator.validate("URL(https://evil.example)").is_err());
        assert!(validator.validate("</style><script>").is_err());
        assert!(validator.validate(&"a".repeat(257)).is_err());
    }

    #[test]
    fn test_display_text_validator() {
        let validator = DisplayTextValidator;

        assert!(validator.validate("BingGo Parking").is_ok());
        assert!(validator.validate("   ").is_err());
        assert!(validator.validate("Bad\u{0007}Name").is_err());
        assert!(validator.validate("</style><script>alert(1)</script>").is_err());
        assert!(validator.validate("Acme >> Pay").is_err());
        assert!(validator.validate("Fish & Chips").is_ok());
    }

    #[test]
    fn test_theme_validator_reports_field_path() {
        assert!(ThemeValidator.validate(&default_config()).is_ok());

        let mut config = default_config();
        config.components.card.padding = "1rem; color: red".into();
        let error = ThemeValidator.validate(&config).unwrap_err();
        assert!(error.to_string().starts_with("components.card.padding"));
    }
}
