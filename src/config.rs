//! Platform client configuration.
//!
//! All configuration is loaded from environment variables, with a local
//! `.env` file merged into the process environment first.

use crate::error::{AgentError, AgentResult};
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::time::Duration;

/// Cumulocity client configuration.
#[derive(Clone)]
pub struct CumulocityConfig {
    /// Platform base URL, without trailing slash
    pub base_url: String,
    /// Tenant ID; when set the wire username becomes `tenant/user`
    pub tenant: Option<String>,
    /// Platform username
    pub user: String,
    /// Platform password
    pub password: SecretString,
    /// Request timeout
    pub timeout: Duration,
}

impl CumulocityConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            tenant: None,
            user: user.into(),
            password: SecretString::from(password.into()),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the tenant ID.
    #[must_use]
    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// Reads `C8Y_BASEURL`, `C8Y_TENANT` (optional), `C8Y_USER` and
    /// `C8Y_PASSWORD`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidConfig`] when a required variable is
    /// missing.
    pub fn from_env() -> AgentResult<Self> {
        dotenvy::dotenv().ok();

        let base_url = require_env("C8Y_BASEURL")?;
        let user = require_env("C8Y_USER")?;
        let password = require_env("C8Y_PASSWORD")?;

        let mut config = Self::new(base_url, user, password);
        if let Ok(tenant) = env::var("C8Y_TENANT") {
            if !tenant.is_empty() {
                config = config.with_tenant(tenant);
            }
        }
        Ok(config)
    }

    /// Username sent on the wire: `tenant/user` when a tenant is set.
    #[must_use]
    pub fn username(&self) -> String {
        match &self.tenant {
            Some(tenant) => format!("{}/{}", tenant, self.user),
            None => self.user.clone(),
        }
    }

    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl std::fmt::Debug for CumulocityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CumulocityConfig")
            .field("base_url", &self.base_url)
            .field("tenant", &self.tenant)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Read a required environment variable.
fn require_env(name: &str) -> AgentResult<String> {
    match env::var(name) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(AgentError::config(format!("{name} is not set"))),
    }
}
