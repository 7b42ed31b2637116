//! Config agent caching the GitHub access token for the process lifetime.

use crate::{
    client::CumulocityClient,
    config::CumulocityConfig,
    error::AgentResult,
    options::TenantOptionStore,
};
use secrecy::SecretString;
use tracing::{info, instrument};

/// Tenant option category holding source-hosting credentials.
pub const GITHUB_CATEGORY: &str = "github";
/// Tenant option key holding the GitHub access token.
pub const GITHUB_TOKEN_KEY: &str = "credentials.access_token";

/// Process-wide holder of the GitHub access token.
///
/// The token is resolved exactly once, at construction, and is immutable
/// afterwards. Construction is fail-fast: any platform or lookup failure
/// propagates and no agent is produced.
pub struct ConfigAgent {
    github_access_token: Option<SecretString>,
}

impl ConfigAgent {
    /// Resolve the token from the given option store.
    ///
    /// Performs exactly one lookup of
    /// ([`GITHUB_CATEGORY`], [`GITHUB_TOKEN_KEY`]) and stores the outcome
    /// verbatim. An absent option is kept as `None`, not an error.
    ///
    /// # Errors
    ///
    /// Propagates any store failure unchanged.
    #[instrument(skip(store))]
    pub async fn bootstrap(store: &impl TenantOptionStore) -> AgentResult<Self> {
        let value = store.get_value(GITHUB_CATEGORY, GITHUB_TOKEN_KEY).await?;

        info!(configured = value.is_some(), "Resolved GitHub access token");

        Ok(Self {
            github_access_token: value.map(SecretString::from),
        })
    }

    /// Construct from the process environment.
    ///
    /// Loads configuration (including a local `.env` file), connects to the
    /// platform and resolves the token in one pass.
    ///
    /// # Errors
    ///
    /// Fails fast on missing configuration, a failed handshake, or a failed
    /// lookup.
    pub async fn from_env() -> AgentResult<Self> {
        let config = CumulocityConfig::from_env()?;
        let client = CumulocityClient::connect(config).await?;
        Self::bootstrap(&client).await
    }

    /// The token captured at construction time, if one was configured.
    #[must_use]
    pub fn github_access_token(&self) -> Option<&SecretString> {
        self.github_access_token.as_ref()
    }
}

impl std::fmt::Debug for ConfigAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigAgent")
            .field(
                "github_access_token",
                &self.github_access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
