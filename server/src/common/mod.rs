pub mod errors;

pub use errors::{DirectoryError, ResolutionError};
