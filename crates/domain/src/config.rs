//! Client configuration structures
//!
//! The structs here are pure data; loading them from the environment or from
//! a config file lives in `netacl-client`.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECONDS};

/// Connection settings for the NetAcl service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the service, without a trailing slash.
    pub service_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Authentication scheme used for outgoing requests.
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            auth: AuthConfig::default(),
        }
    }
}

/// Authentication scheme selection.
///
/// The SDK does not implement any token-acquisition protocol; a bearer token
/// is passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication headers are attached (testing, local stubs).
    #[default]
    None,
    /// A static bearer token attached as `Authorization: Bearer <token>`.
    Bearer { token: String },
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}
