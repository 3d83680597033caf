mod middleware;

pub use middleware::require_auth;

use axum::http::{header, HeaderMap};

/// Capability gate for recipe creation. When no token is configured the gate
/// is disabled and /create is open to any caller.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    token: Option<String>,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            token: std::env::var("AUTH_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }

    pub fn enabled(&self) -> bool {
        self.token.is_some()
    }

    /// Checks the request's bearer token against the configured one.
    /// Always true while the gate is disabled.
    pub fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        let Some(expected) = self.token.as_deref() else {
            return true;
        };

        let Some(header) = headers.get(header::AUTHORIZATION) else {
            return false;
        };

        let Ok(value) = header.to_str() else {
            return false;
        };

        match value.strip_prefix("Bearer ") {
            Some(token) => token == expected,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn gated() -> AuthConfig {
        AuthConfig {
            token: Some("sesame".to_string()),
        }
    }

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn disabled_gate_lets_everything_through() {
        let auth = AuthConfig::default();
        assert!(!auth.enabled());
        assert!(auth.is_authenticated(&HeaderMap::new()));
    }

    #[test]
    fn missing_header_is_rejected() {
        assert!(!gated().is_authenticated(&HeaderMap::new()));
    }

    #[test]
    fn non_bearer_scheme_is_rejected() {
        let headers = headers_with_auth("Basic c2VzYW1l");
        assert!(!gated().is_authenticated(&headers));
    }

    #[test]
    fn wrong_token_is_rejected() {
        let headers = headers_with_auth("Bearer nope");
        assert!(!gated().is_authenticated(&headers));
    }

    #[test]
    fn matching_token_is_accepted() {
        let headers = headers_with_auth("Bearer sesame");
        assert!(gated().is_authenticated(&headers));
    }
}
