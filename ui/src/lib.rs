//! # Whitelabel
//!
//! Presentation side of the white-label branding engine: applying resolved
//! configurations to a style surface, loading deployment-time presets,
//! configuration and logging for the `whitelabel` binary.
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Application error type
//! - [`logger`] - Logging setup
//! - [`presets`] - Preset files on disk
//! - [`style`] - Style surfaces and the scoped style applier
//! - [`tenants`] - Tenant directory selection
//!
//! Resolution itself lives in the `server` crate.

pub mod config;
pub mod error;
pub mod logger;
pub mod presets;
pub mod style;
pub mod tenants;

pub use error::{AppError, AppResult};
pub use style::{AppliedStyle, DocumentRoot, StyleApplier, StyleSurface};
