//! Cumulocity tenant-option agent for source-hosting credentials.
//!
//! Resolves the GitHub access token stored in the tenant option
//! `("github", "credentials.access_token")` once at startup and caches it
//! for the life of the process.

pub mod agent;
pub mod client;
pub mod config;
pub mod error;
pub mod options;

pub use agent::ConfigAgent;
pub use client::CumulocityClient;
pub use config::CumulocityConfig;
pub use error::{AgentError, AgentResult};
pub use options::TenantOptionStore;
