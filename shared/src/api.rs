//! API client types and trait definitions
//!
//! This module defines the contract with the externally-provided session
//! backend. The frontend implements it with gloo-net; tests implement it
//! with in-memory fakes.

use crate::{CurrentUser, LayoutConfig};

/// API error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),

    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Authentication required or the session is already invalid
    #[error("Auth error: {0}")]
    Auth(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => ApiError::Auth(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Server { status, message },
        }
    }

    /// True when the server no longer recognises the caller's session.
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}

/// API endpoint definitions
pub mod endpoints {
    pub const AUTH_ME: &str = "/api/auth/me";
    pub const AUTH_LOGOUT: &str = "/api/auth/logout";
    pub const LAYOUT_CONFIG: &str = "/api/config";
}

/// Trait defining the session backend API
///
/// All methods are async and return Result<T, ApiError>.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// Get the current user, or `None` when nobody is signed in
    async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError>;

    /// Invalidate the current session server-side
    async fn sign_out(&self) -> Result<(), ApiError>;

    /// Fetch the layout configuration served by the backend
    async fn layout_config(&self) -> Result<LayoutConfig, ApiError>;
}

/// Configuration for creating an API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base URL of the server (e.g., "http://localhost:3000")
    pub base_url: String,
    /// Optional bearer token for authenticated requests
    pub auth_token: Option<String>,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(format!("{}", err), "Server error (500): boom");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(format!("{}", err), "Network error: connection refused");
    }

    #[test]
    fn status_classification() {
        assert!(ApiError::from_status(401, "expired").is_session_invalid());
        assert!(ApiError::from_status(403, "forbidden").is_session_invalid());
        assert_eq!(
            ApiError::from_status(404, "gone"),
            ApiError::NotFound("gone".to_string())
        );
        assert_eq!(
            ApiError::from_status(502, "bad gateway"),
            ApiError::Server {
                status: 502,
                message: "bad gateway".to_string()
            }
        );
        assert!(!ApiError::Network("offline".into()).is_session_invalid());
    }

    #[test]
    fn client_config_builds_urls() {
        let config = ApiClientConfig::new("http://localhost:3000/");
        assert_eq!(
            config.url(endpoints::AUTH_ME),
            "http://localhost:3000/api/auth/me"
        );
        let config = config.with_token("abc");
        assert_eq!(config.auth_token.as_deref(), Some("abc"));
    }
}
