//! Error types used throughout the SDK

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the NetAcl SDK
#[derive(Error, Debug)]
pub enum NetAclError {
    /// A required options value, or a required field inside one, is missing
    /// or malformed. Detected locally, before any network call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    /// Network or TLS failure reaching the service.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status. The parsed error payload
    /// is attached when the response body carried one.
    #[error("Service error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        payload: Option<ErrorEnvelope>,
    },

    /// The response body does not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, NetAclError>;

/// Error payload returned by the service alongside a non-2xx status.
///
/// The shape is decoded loosely: fields the server omits stay `None`, and
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Transaction id echoed back for support correlation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiErrorDetail>,
}

/// A single entry of an [`ErrorEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}
