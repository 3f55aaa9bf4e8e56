//! Interpretation of the untrusted `_hidden_brand_experience` parameter.
//!
//! The parameter either names a preset or carries a base64-encoded JSON
//! document describing a partial configuration. Decoding is data-only: the
//! payload is parsed as JSON and mapped onto the typed schema, nothing in it
//! is ever evaluated.

use crate::presets::PresetCatalog;
use crate::theme::PartialThemeConfig;
use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Largest encoded payload accepted, in bytes.
pub const MAX_ENCODED_LEN: usize = 64 * 1024;

/// Failure categories reported by [`ConfigDecoder::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    MalformedEncoding,
    MalformedJson,
    SchemaInvalid,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::MalformedEncoding => f.write_str("MALFORMED_ENCODING"),
            DecodeErrorKind::MalformedJson => f.write_str("MALFORMED_JSON"),
            DecodeErrorKind::SchemaInvalid => f.write_str("SCHEMA_INVALID"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    #[error("invalid theme schema: {0}")]
    SchemaInvalid(String),
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::MalformedEncoding(_) => DecodeErrorKind::MalformedEncoding,
            DecodeError::MalformedJson(_) => DecodeErrorKind::MalformedJson,
            DecodeError::SchemaInvalid(_) => DecodeErrorKind::SchemaInvalid,
        }
    }
}

/// What a custom-theme selector turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// The raw value is exactly the name of a catalog preset.
    Preset(String),
    /// The raw value decoded into a partial configuration.
    Custom(PartialThemeConfig),
}

/// Decoder bound to the preset catalog used for name matching.
pub struct ConfigDecoder<'c> {
    catalog: &'c PresetCatalog,
}

impl<'c> ConfigDecoder<'c> {
    pub fn new(catalog: &'c PresetCatalog) -> Self {
        Self { catalog }
    }

    /// True when `raw` exactly names a preset. Checked before any payload decoding.
    pub fn matches_preset(&self, raw: &str) -> bool {
        self.catalog.contains(raw)
    }

    /// Classifies `raw` as a preset selection or decodes it as a custom payload.
    pub fn interpret(&self, raw: &str) -> Result<Selector, DecodeError> {
        if self.matches_preset(raw) {
            return Ok(Selector::Preset(raw.to_string()));
        }
        Self::decode(raw).map(Selector::Custom)
    }

    /// Decodes an encoded payload into a partial configuration.
    ///
    /// Accepts the standard and URL-safe base64 alphabets with or without
    /// padding. Spaces are read back as `+`, undoing form-style query decoding.
    /// The decoded object must contain `colors` and `brand` objects; any other
    /// fields are optional and unknown fields are ignored.
    pub fn decode(raw: &str) -> Result<PartialThemeConfig, DecodeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DecodeError::MalformedEncoding("payload is empty".to_string()));
        }
        if trimmed.len() > MAX_ENCODED_LEN {
            return Err(DecodeError::MalformedEncoding(format!(
                "payload exceeds {MAX_ENCODED_LEN} bytes"
            )));
        }

        let normalized = trimmed.replace(' ', "+");
        let unpadded = normalized.trim_end_matches('=');
        let engine = if unpadded.contains(['-', '_']) {
            &URL_SAFE_NO_PAD
        } else {
            &STANDARD_NO_PAD
        };
        let bytes = engine
            .decode(unpadded)
            .map_err(|e| DecodeError::MalformedEncoding(e.to_string()))?;
        let text = String::from_utf8(bytes)
            .map_err(|_| DecodeError::MalformedEncoding("payload is not valid UTF-8".to_string()))?;

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| DecodeError::MalformedJson(e.to_string()))?;

        let Some(object) = value.as_object() else {
            return Err(DecodeError::SchemaInvalid(
                "payload is not a JSON object".to_string(),
            ));
        };
        for required in ["colors", "brand"] {
            if !object.get(required).is_some_and(serde_json::Value::is_object) {
                return Err(DecodeError::SchemaInvalid(format!(
                    "'{required}' must be an object"
                )));
            }
        }

        serde_json::from_value(value).map_err(|e| DecodeError::SchemaInvalid(e.to_string()))
    }
}

/// Encodes a configuration (complete or partial) into a selector value:
/// JSON, then URL-safe base64 without padding.
pub fn encode_config<T: Serialize>(config: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(config)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}
