use crate::common::errors::DirectoryError;
use crate::tenant::types::{Tenant, TenantId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;

/// Read access to the persistent store of tenants.
///
/// Implementations own the tenant lifecycle; the resolver only looks tenants
/// up by id and lists the active ones.
///
/// # Examples
///
/// ```no_run
/// use server::tenant::{InMemoryTenantDirectory, TenantDirectory, TenantId};
///
/// # async fn run() -> Result<(), server::common::DirectoryError> {
/// let directory = InMemoryTenantDirectory::from_json(r#"[{"id":1,"slug":"bingo","name":"BingGo"}]"#)?;
/// let tenant = directory.get(TenantId(1)).await?;
/// assert!(tenant.is_some());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    /// Fetches a tenant by id, `Ok(None)` when the directory has no such tenant.
    async fn get(&self, id: TenantId) -> Result<Option<Tenant>, DirectoryError>;

    /// Lists active tenants ordered by id.
    async fn list_active(&self) -> Result<Vec<Tenant>, DirectoryError>;
}

/// Directory backed by an in-process map, seeded from a JSON array of tenants.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTenantDirectory {
    tenants: BTreeMap<TenantId, Tenant>,
}

impl InMemoryTenantDirectory {
    pub fn new(tenants: impl IntoIterator<Item = Tenant>) -> Self {
        Self {
            tenants: tenants.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let tenants: Vec<Tenant> = serde_json::from_str(json)
            .map_err(|e| DirectoryError::InvalidResponse(format!("tenant list: {e}")))?;
        Ok(Self::new(tenants))
    }

    pub fn from_file(path: &Path) -> Result<Self, DirectoryError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DirectoryError::InvalidResponse(format!(
                "failed to read tenant file '{}': {e}",
                path.display()
            ))
        })?;
        let directory = Self::from_json(&content)?;
        log::info!(
            "Loaded {} tenants from {}",
            directory.tenants.len(),
            path.display()
        );
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }
}

#[async_trait]
impl TenantDirectory for InMemoryTenantDirectory {
    async fn get(&self, id: TenantId) -> Result<Option<Tenant>, DirectoryError> {
        Ok(self.tenants.get(&id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Tenant>, DirectoryError> {
        Ok(self
            .tenants
            .values()
            .filter(|t| t.is_active())
            .cloned()
            .collect())
    }
}
