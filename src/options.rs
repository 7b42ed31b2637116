//! Tenant option wire types and the option store abstraction.

use crate::error::AgentResult;
use async_trait::async_trait;
use serde::Deserialize;

/// Body of `GET /tenant/options/{category}/{key}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantOption {
    /// Option category
    pub category: String,
    /// Option key within the category
    pub key: String,
    /// Stored value, returned verbatim
    pub value: String,
}

/// Body of `GET /tenant/currentTenant`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentTenant {
    /// Tenant ID
    pub name: String,
    /// Tenant domain
    #[serde(rename = "domainName", default)]
    pub domain_name: Option<String>,
}

/// Read access to a tenant-scoped key/value option store.
///
/// An absent option is `Ok(None)`; provider failures pass through as `Err`.
#[async_trait]
pub trait TenantOptionStore: Send + Sync {
    /// Look up the option stored under `category` / `key`.
    async fn get_value(&self, category: &str, key: &str) -> AgentResult<Option<String>>;
}
