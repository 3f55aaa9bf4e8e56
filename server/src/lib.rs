//! # Whitelabel Server Library
//!
//! Branding and embedding configuration resolution for white-label wallet
//! tenants. Given a request context (query parameters, selected tenant,
//! embed flags) it produces one complete, validated theme configuration
//! without any per-tenant build.
//!
//! ## Modules
//!
//! - [`theme`] - ThemeConfig model, deep merge, style variable projection, validation
//! - [`presets`] - Catalog of named, complete configurations
//! - [`personas`] - Built-in `appType` personas
//! - [`decoder`] - Decoding of untrusted encoded configurations
//! - [`resolver`] - Request context parsing and layered resolution
//! - [`session`] - Async tenant-selection flow with latest-navigation-wins semantics
//! - [`tenant`] - Tenant records and directory backends
//! - [`common`] - Error types shared across modules
//! - [`validation`] - The `Validator` trait

pub mod common;
pub mod decoder;
pub(crate) mod palette;
pub mod personas;
pub mod presets;
pub mod resolver;
pub mod session;
pub mod tenant;
pub mod theme;
pub mod validation;

pub use common::{DirectoryError, ResolutionError};
pub use decoder::{ConfigDecoder, DecodeError, DecodeErrorKind, encode_config};
pub use personas::{AppType, PersonaIcon};
pub use presets::PresetCatalog;
pub use resolver::{BrandSource, ConfigResolver, RequestContext, ResolvedContext};
pub use session::{BrandingSession, SessionOutcome, SessionState};
pub use theme::{PartialThemeConfig, ThemeConfig};
