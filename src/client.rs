//! Cumulocity HTTP client with logging integration.

use crate::{
    config::CumulocityConfig,
    error::{AgentError, AgentResult},
    options::{CurrentTenant, TenantOption, TenantOptionStore},
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info, instrument};

/// Authenticated handle to a Cumulocity tenant.
///
/// [`connect`](Self::connect) performs the platform handshake up front, so
/// holding a value of this type implies the credentials were accepted.
#[derive(Debug, Clone)]
pub struct CumulocityClient {
    config: CumulocityConfig,
    http: Client,
    tenant: String,
}

impl CumulocityClient {
    /// Connect to the platform and resolve the current tenant.
    ///
    /// # Errors
    ///
    /// Fails fast on any handshake problem: bad credentials, missing
    /// permissions, or an unreachable platform.
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub async fn connect(config: CumulocityConfig) -> AgentResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AgentError::Http)?;

        let url = format!("{}/tenant/currentTenant", config.base_url);
        let response = http
            .get(&url)
            .basic_auth(config.username(), Some(config.password()))
            .send()
            .await
            .map_err(|e| AgentError::unavailable(e.to_string()))?;

        let response = check_status(response, "tenant/currentTenant").await?;
        let current: CurrentTenant = response.json().await?;

        info!(tenant = %current.name, "Connected to Cumulocity");

        Ok(Self {
            config,
            http,
            tenant: current.name,
        })
    }

    /// Tenant ID resolved during the handshake.
    #[must_use]
    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    async fn get(&self, path: &str) -> AgentResult<Response> {
        let url = format!("{}/{}", self.config.base_url, path);
        self.http
            .get(&url)
            .basic_auth(self.config.username(), Some(self.config.password()))
            .send()
            .await
            .map_err(|e| AgentError::unavailable(e.to_string()))
    }
}

#[async_trait]
impl TenantOptionStore for CumulocityClient {
    #[instrument(skip(self))]
    async fn get_value(&self, category: &str, key: &str) -> AgentResult<Option<String>> {
        debug!(category, key, "Getting tenant option");

        let path = format!("tenant/options/{category}/{key}");
        let response = self.get(&path).await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(category, key, "Tenant option not configured");
            return Ok(None);
        }

        let response = check_status(response, &path).await?;
        let option: TenantOption = response.json().await?;
        Ok(Some(option.value))
    }
}

/// Map a non-success response to the agent error taxonomy.
async fn check_status(response: Response, path: &str) -> AgentResult<Response> {
    let status = response.status();
    match status {
        StatusCode::UNAUTHORIZED => {
            let text = response.text().await.unwrap_or_default();
            Err(AgentError::auth_failed(format!("{path}: {text}")))
        }
        StatusCode::FORBIDDEN => Err(AgentError::denied(path.to_string())),
        s if !s.is_success() => {
            let text = response.text().await.unwrap_or_default();
            Err(AgentError::unavailable(format!(
                "{path}: status {status}: {text}"
            )))
        }
        _ => Ok(response),
    }
}
