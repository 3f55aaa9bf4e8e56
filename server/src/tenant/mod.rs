//! Tenants and the directory the resolver reads them from.

pub mod directory;
pub mod http;
pub mod types;

pub use directory::{InMemoryTenantDirectory, TenantDirectory};
pub use http::{DEFAULT_LOOKUP_TIMEOUT, HttpTenantDirectory};
pub use types::{Tenant, TenantId, TenantStatus};
