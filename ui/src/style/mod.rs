//! Applying resolved configurations to a presentation surface.

pub mod applier;
pub mod surface;

pub use applier::{AppliedStyle, StyleApplier};
pub use surface::{DocumentRoot, StyleSurface};
