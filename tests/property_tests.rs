//! Property-based tests for the config agent.
//!
//! Tests validate:
//! - tokens pass through construction verbatim, whatever their shape
//! - secret values never leak through Debug output

use async_trait::async_trait;
use c8y_config_agent::{AgentResult, ConfigAgent, CumulocityConfig, TenantOptionStore};
use proptest::prelude::*;
use secrecy::ExposeSecret;

/// Store returning a fixed value for every key.
struct FixedStore {
    value: Option<String>,
}

#[async_trait]
impl TenantOptionStore for FixedStore {
    async fn get_value(&self, _category: &str, _key: &str) -> AgentResult<Option<String>> {
        Ok(self.value.clone())
    }
}

// Strategy for generating token values
fn token_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{8,64}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* token the provider returns, the accessor returns exactly
    /// that value, unchanged, on every call.
    #[test]
    fn prop_token_passes_through_verbatim(token in token_strategy()) {
        let store = FixedStore { value: Some(token.clone()) };
        let agent = tokio_test::block_on(ConfigAgent::bootstrap(&store))?;

        for _ in 0..3 {
            let held = agent.github_access_token();
            prop_assert_eq!(held.map(ExposeSecret::expose_secret), Some(token.as_str()));
        }
    }

    /// *For any* token value, the agent's Debug output SHALL NOT contain
    /// the token, only [REDACTED].
    #[test]
    fn prop_token_not_exposed_in_debug(token in token_strategy()) {
        let store = FixedStore { value: Some(token.clone()) };
        let agent = tokio_test::block_on(ConfigAgent::bootstrap(&store))?;

        let debug_output = format!("{agent:?}");
        prop_assert!(
            !debug_output.contains(&token),
            "Debug output should not contain the token"
        );
        prop_assert!(
            debug_output.contains("[REDACTED]"),
            "Debug output should show [REDACTED]"
        );
    }

    /// *For any* password, the config's Debug output SHALL NOT expose it.
    #[test]
    fn prop_password_not_exposed_in_debug(password in "[A-Za-z0-9!@#$%^&*]{8,64}") {
        let config = CumulocityConfig::new("https://demo.cumulocity.com", "alice", password.clone());

        let debug_output = format!("{config:?}");
        prop_assert!(
            !debug_output.contains(&password),
            "Debug output should not contain the password"
        );
    }
}
