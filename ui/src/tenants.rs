use crate::config::TenantsConfig;
use crate::error::AppResult;
use server::tenant::{HttpTenantDirectory, InMemoryTenantDirectory, TenantDirectory};
use std::sync::Arc;

/// Builds the tenant directory selected by the configuration.
///
/// An API URL selects the HTTP directory, a file selects the in-memory
/// directory seeded from it, and with neither the directory is empty.
pub fn directory_from_config(config: &TenantsConfig) -> AppResult<Arc<dyn TenantDirectory>> {
    if let Some(api_url) = config.api_url() {
        log::info!("Using tenant directory at {api_url}");
        let directory = HttpTenantDirectory::new(api_url, config.lookup_timeout())?;
        return Ok(Arc::new(directory));
    }

    if let Some(path) = config.file() {
        return Ok(Arc::new(InMemoryTenantDirectory::from_file(path)?));
    }

    log::debug!("No tenant source configured, tenant directory is empty");
    Ok(Arc::new(InMemoryTenantDirectory::default()))
}
