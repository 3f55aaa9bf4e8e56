//! Turns a request context into one complete, resolved branding configuration.
//!
//! Sources are tried in a fixed order and exactly one of them supplies the
//! configuration layer:
//!
//! 1. `_hidden_brand_experience` - a preset name, or an encoded partial
//!    merged onto the defaults. A value that fails to decode falls back to the
//!    defaults and is logged.
//! 2. A tenant picked in the tenant-selection flow, merged onto the defaults.
//! 3. `appType` - one of the built-in personas.
//! 4. The platform defaults.
//!
//! Resolution is a recompute: nothing is updated in place, a changed context
//! produces a new [`ResolvedContext`] from scratch.

use crate::decoder::{ConfigDecoder, Selector};
use crate::personas::{AppType, PersonaIcon};
use crate::presets::PresetCatalog;
use crate::tenant::{Tenant, TenantId};
use crate::theme::validation::ThemeValidator;
use crate::theme::{ThemeConfig, default_config, merge};
use crate::validation::Validator;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Query parameter carrying a preset name or an encoded custom configuration.
pub const BRAND_EXPERIENCE_PARAM: &str = "_hidden_brand_experience";
pub const APP_TYPE_PARAM: &str = "appType";
pub const HIDE_SIDEBAR_PARAM: &str = "hideSidebar";
pub const EMBED_MODE_PARAM: &str = "embedMode";
pub const TENANT_ID_PARAM: &str = "tenantId";

/// The inputs of a resolution, parsed from request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RequestContext {
    pub brand_experience: Option<String>,
    pub app_type: Option<AppType>,
    pub hide_sidebar: bool,
    pub embed_mode: bool,
    pub tenant_id: Option<TenantId>,
}

impl RequestContext {
    /// Parses a raw query string (the leading `?` is optional).
    ///
    /// Keys and values are percent-decoded; `+` is kept as-is so base64
    /// payloads survive. The first occurrence of a parameter wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut pairs = Vec::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match (urlencoding::decode(key), urlencoding::decode(value)) {
                (Ok(key), Ok(value)) => pairs.push((key.into_owned(), value.into_owned())),
                _ => log::debug!("Skipping query parameter that is not valid UTF-8: {pair:?}"),
            }
        }
        Self::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Builds a context from already-decoded key/value pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut context = RequestContext::default();
        let mut seen = std::collections::HashSet::new();

        for (key, value) in pairs {
            if !seen.insert(key) {
                continue;
            }
            match key {
                BRAND_EXPERIENCE_PARAM => {
                    let value = value.trim();
                    if !value.is_empty() {
                        context.brand_experience = Some(value.to_string());
                    }
                }
                APP_TYPE_PARAM => {
                    context.app_type = AppType::parse(value);
                    if context.app_type.is_none() {
                        log::debug!("Ignoring unknown appType {value:?}");
                    }
                }
                HIDE_SIDEBAR_PARAM => {
                    context.hide_sidebar = value.eq_ignore_ascii_case("true") || value == "1";
                }
                EMBED_MODE_PARAM => {
                    context.embed_mode = value.eq_ignore_ascii_case("true");
                }
                TENANT_ID_PARAM => {
                    context.tenant_id = TenantId::parse(value);
                    if context.tenant_id.is_none() {
                        log::debug!("Ignoring invalid tenantId {value:?}");
                    }
                }
                _ => {}
            }
        }

        context
    }

    /// Either flag alone marks the session as embedded.
    pub fn is_embedded(&self) -> bool {
        self.hide_sidebar || self.embed_mode
    }
}

/// The layer that supplied a resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum BrandSource {
    Preset(String),
    CustomEncoded(String),
    Tenant(TenantId),
    Persona(AppType),
    Default,
}

impl fmt::Display for BrandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrandSource::Preset(name) => write!(f, "preset '{name}'"),
            BrandSource::CustomEncoded(raw) => write!(f, "custom config ({} bytes)", raw.len()),
            BrandSource::Tenant(id) => write!(f, "tenant {id}"),
            BrandSource::Persona(app_type) => write!(f, "persona '{app_type}'"),
            BrandSource::Default => f.write_str("defaults"),
        }
    }
}

/// Per-request resolution output. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedContext {
    pub config: ThemeConfig,
    pub app_type: Option<AppType>,
    pub is_embedded: bool,
    pub hide_sidebar: bool,
    pub source: BrandSource,
}

impl ResolvedContext {
    /// Icon for the logo slot when the active persona renders a glyph.
    pub fn persona_icon(&self) -> Option<PersonaIcon> {
        self.app_type.map(|app_type| app_type.persona().icon)
    }
}

/// Stateless resolver over a preset catalog.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    catalog: Arc<PresetCatalog>,
}

impl ConfigResolver {
    pub fn new(catalog: Arc<PresetCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolver over the process-wide preset catalog.
    pub fn global() -> Self {
        Self::new(PresetCatalog::global())
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    /// Resolves the plain (tenant-less) flow. Never fails.
    pub fn resolve(&self, context: &RequestContext) -> ResolvedContext {
        self.resolve_with_tenant(context, None)
    }

    /// Resolves with an already looked-up tenant, which takes precedence over
    /// personas but not over an explicit custom-theme selector.
    pub fn resolve_with_tenant(
        &self,
        context: &RequestContext,
        tenant: Option<&Tenant>,
    ) -> ResolvedContext {
        let (config, source) = self.base_layer(context, tenant);

        if cfg!(debug_assertions) {
            if let Err(e) = ThemeValidator.validate(&config) {
                log::error!("Resolved configuration from {source} failed validation: {e}");
            }
        }
        log::debug!("Resolved branding from {source}");

        ResolvedContext {
            config,
            app_type: context.app_type,
            is_embedded: context.is_embedded(),
            hide_sidebar: context.hide_sidebar,
            source,
        }
    }

    fn base_layer(
        &self,
        context: &RequestContext,
        tenant: Option<&Tenant>,
    ) -> (ThemeConfig, BrandSource) {
        if let Some(raw) = context.brand_experience.as_deref() {
            let decoder = ConfigDecoder::new(&self.catalog);
            return match decoder.interpret(raw) {
                Ok(Selector::Preset(name)) => match self.catalog.lookup(&name) {
                    Some(preset) => (preset.clone(), BrandSource::Preset(name)),
                    None => (default_config(), BrandSource::Default),
                },
                Ok(Selector::Custom(patch)) => (
                    merge(&default_config(), &patch),
                    BrandSource::CustomEncoded(raw.to_string()),
                ),
                Err(e) => {
                    log::warn!(
                        "Ignoring {} value [{}]: {e}; falling back to defaults",
                        BRAND_EXPERIENCE_PARAM,
                        e.kind()
                    );
                    (default_config(), BrandSource::Default)
                }
            };
        }

        if let Some(tenant) = tenant {
            return (
                merge(&default_config(), &tenant.theme_patch()),
                BrandSource::Tenant(tenant.id),
            );
        }

        if let Some(app_type) = context.app_type {
            return (
                app_type.persona().config.clone(),
                BrandSource::Persona(app_type),
            );
        }

        (default_config(), BrandSource::Default)
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new(Arc::new(PresetCatalog::builtin()))
    }
}
