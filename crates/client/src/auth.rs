//! Pluggable request authentication
//!
//! The SDK never implements a token-acquisition protocol. An
//! [`Authenticator`] only attaches credentials to an outgoing request;
//! where those credentials come from is the caller's concern.

use std::sync::Arc;

use async_trait::async_trait;
use netacl_domain::{AuthConfig, NetAclError, Result};
use reqwest::RequestBuilder;

/// Attaches authentication material to outgoing requests.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Attach credentials to the request, returning the augmented builder.
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder>;
}

/// No-op authenticator for local stubs and tests.
#[derive(Debug, Clone, Default)]
pub struct NoAuthAuthenticator;

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request)
    }
}

/// Attaches a static bearer token as `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    token: String,
}

impl BearerTokenAuthenticator {
    /// # Errors
    /// Returns `NetAclError::Auth` when the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(NetAclError::Auth("bearer token must not be empty".to_string()));
        }
        Ok(Self { token })
    }
}

impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The token itself never reaches logs.
        f.debug_struct("BearerTokenAuthenticator").finish_non_exhaustive()
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request.bearer_auth(&self.token))
    }
}

/// Build the authenticator selected by the configuration.
pub fn from_config(auth: &AuthConfig) -> Result<Arc<dyn Authenticator>> {
    match auth {
        AuthConfig::None => Ok(Arc::new(NoAuthAuthenticator)),
        AuthConfig::Bearer { token } => Ok(Arc::new(BearerTokenAuthenticator::new(token.clone())?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_authenticator_rejects_empty_token() {
        let err = BearerTokenAuthenticator::new("  ").expect_err("empty token must be rejected");
        assert!(matches!(err, NetAclError::Auth(_)));
    }

    #[test]
    fn bearer_authenticator_debug_hides_token() {
        let authenticator = BearerTokenAuthenticator::new("super-secret").expect("valid token");
        let rendered = format!("{:?}", authenticator);
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn from_config_selects_noauth_by_default() {
        let authenticator = from_config(&AuthConfig::None).expect("should build");
        // Just exercise the trait object; NoAuth has no observable state.
        let _: Arc<dyn Authenticator> = authenticator;
    }
}
