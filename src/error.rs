//! Agent error types using thiserror 2.0.
//!
//! Every failure during construction maps into this taxonomy and
//! propagates to the caller; there is no retry or local recovery.

use thiserror::Error;

/// Errors raised while connecting to the platform or resolving options.
#[derive(Error, Debug)]
pub enum AgentError {
    /// Invalid or missing configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Authentication against the platform failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Credentials are valid but lack access to the resource
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Platform unavailable or responded with a server error
    #[error("Platform unavailable: {0}")]
    Unavailable(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for agent operations.
pub type AgentResult<T> = Result<T, AgentError>;

impl AgentError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an authentication failed error.
    #[must_use]
    pub fn auth_failed(msg: impl Into<String>) -> Self {
        Self::AuthenticationFailed(msg.into())
    }

    /// Create a permission denied error.
    #[must_use]
    pub fn denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AgentError::unavailable("connection refused");
        assert_eq!(err.to_string(), "Platform unavailable: connection refused");

        let err = AgentError::config("C8Y_BASEURL is not set");
        assert_eq!(err.to_string(), "Invalid configuration: C8Y_BASEURL is not set");
    }

    #[test]
    fn test_from_serde_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AgentError = json_err.into();
        assert!(matches!(err, AgentError::Serialization(_)));
    }
}
