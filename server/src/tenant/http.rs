use crate::common::errors::DirectoryError;
use crate::tenant::directory::TenantDirectory;
use crate::tenant::types::{Tenant, TenantId};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// Default timeout for a single directory request.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Tenant directory served by the platform's REST API.
///
/// - `GET {base}/api/tenants` lists tenants
/// - `GET {base}/api/tenants/{id}` fetches one tenant, 404 when unknown
pub struct HttpTenantDirectory {
    base_url: String,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl HttpTenantDirectory {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DirectoryError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DirectoryError::ClientCreation {
                reason: e.to_string(),
            })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tenants_url(&self) -> String {
        format!("{}/api/tenants", self.base_url)
    }

    fn request_error(&self, url: &str, error: reqwest::Error) -> DirectoryError {
        if error.is_timeout() {
            DirectoryError::Timeout {
                url: url.to_string(),
                millis: self.timeout.as_millis() as u64,
            }
        } else {
            DirectoryError::RequestFailed {
                url: url.to_string(),
                reason: error.to_string(),
            }
        }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Option<T>, DirectoryError> {
        log::debug!("Fetching {url}");
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| self.request_error(url, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::RequestFailed {
                url: url.to_string(),
                reason: format!("status {status}: {body}"),
            });
        }

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| DirectoryError::InvalidResponse(format!("{url}: {e}")))
    }
}

#[async_trait]
impl TenantDirectory for HttpTenantDirectory {
    async fn get(&self, id: TenantId) -> Result<Option<Tenant>, DirectoryError> {
        let url = format!("{}/{}", self.tenants_url(), id);
        self.fetch::<Tenant>(&url).await
    }

    async fn list_active(&self) -> Result<Vec<Tenant>, DirectoryError> {
        let url = self.tenants_url();
        let mut tenants = self
            .fetch::<Vec<Tenant>>(&url)
            .await?
            .ok_or_else(|| DirectoryError::RequestFailed {
                url: url.clone(),
                reason: "tenant listing endpoint not found".to_string(),
            })?;
        tenants.retain(Tenant::is_active);
        tenants.sort_by_key(|t| t.id);
        Ok(tenants)
    }
}
