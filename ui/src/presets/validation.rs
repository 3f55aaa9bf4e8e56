use server::validation::Validator;
use std::path::Path;

const MAX_PRESET_NAME_LEN: usize = 50;

/// Validation errors for preset files found on disk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresetValidationError {
    #[error("invalid preset name '{name}': {reason}")]
    InvalidPresetName { name: String, reason: String },
    #[error("invalid preset path '{path}': {reason}")]
    InvalidPresetPath { path: String, reason: String },
    #[error("invalid file extension for '{path}', expected .{expected}")]
    InvalidFileExtension { path: String, expected: String },
}

impl PresetValidationError {
    pub fn user_message(&self) -> String {
        match self {
            PresetValidationError::InvalidPresetName { name, reason } => {
                format!(
                    "Invalid preset name: '{name}'\n\n\
                    Reason: {reason}\n\n\
                    Please name preset files with alphanumerics, hyphens and underscores only."
                )
            }
            PresetValidationError::InvalidPresetPath { path, reason } => {
                format!(
                    "Invalid preset path: '{path}'\n\n\
                    Reason: {reason}\n\n\
                    Please ensure the path exists and is a readable file."
                )
            }
            PresetValidationError::InvalidFileExtension { path, expected } => {
                format!(
                    "Invalid file extension for: '{path}'\n\n\
                    Expected: '{expected}' files"
                )
            }
        }
    }
}

/// Validator for preset names, taken from the preset file stem.
pub struct PresetNameValidator;

impl Validator<str> for PresetNameValidator {
    type Error = PresetValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| PresetValidationError::InvalidPresetName {
            name: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("Name cannot be empty"));
        }

        if input.chars().count() > MAX_PRESET_NAME_LEN {
            return Err(invalid("Name too long (max 50 characters)"));
        }

        if !input
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(invalid(
                "Name contains invalid characters (only alphanumeric, hyphens, and underscores allowed)",
            ));
        }

        if input.starts_with(['-', '_']) || input.ends_with(['-', '_']) {
            return Err(invalid("Name cannot start or end with hyphens or underscores"));
        }

        Ok(())
    }
}

/// Validator for preset file paths.
pub struct PresetPathValidator;

impl Validator<Path> for PresetPathValidator {
    type Error = PresetValidationError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        if !input.exists() {
            return Err(PresetValidationError::InvalidPresetPath {
                path: input.display().to_string(),
                reason: "Path does not exist".to_string(),
            });
        }

        if !input.is_file() {
            return Err(PresetValidationError::InvalidPresetPath {
                path: input.display().to_string(),
                reason: "Path is not a file".to_string(),
            });
        }

        if input.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(PresetValidationError::InvalidFileExtension {
                path: input.display().to_string(),
                expected: "toml".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_name_validator() {
        let validator = PresetNameValidator;

        // Valid names
        assert!(validator.validate("valid_preset").is_ok());
        assert!(validator.validate("acme-pay").is_ok());
        assert!(validator.validate("tenant42").is_ok());

        // Invalid names
        assert!(validator.validate("").is_err());
        assert!(validator.validate("_invalid").is_err());
        assert!(validator.validate("invalid-").is_err());
        assert!(validator.validate("invalid@preset").is_err());
        assert!(validator.validate("has space").is_err());
        assert!(validator.validate(&"a".repeat(51)).is_err());
        assert!(validator.validate(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_preset_path_validator() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("acme.toml");
        let json_path = dir.path().join("acme.json");
        std::fs::write(&toml_path, "").unwrap();
        std::fs::write(&json_path, "").unwrap();

        let validator = PresetPathValidator;
        assert!(validator.validate(toml_path.as_path()).is_ok());
        assert!(matches!(
            validator.validate(json_path.as_path()),
            Err(PresetValidationError::InvalidFileExtension { .. })
        ));
        assert!(matches!(
            validator.validate(dir.path()),
            Err(PresetValidationError::InvalidPresetPath { .. })
        ));
        assert!(validator.validate(&dir.path().join("missing.toml")).is_err());
    }
}
