//! # NetAcl Client
//!
//! HTTP client SDK for the NetAcl access-control admin API.
//!
//! This crate contains:
//! - The service facade ([`NetAclClient`]), one method per API operation
//! - Options builders with required-field validation
//! - The HTTP transport wrapper (timeout, bounded retry, default headers)
//! - Pluggable request authentication
//! - Configuration loading from environment variables or config files
//!
//! ## Architecture
//! - Model types come from `netacl-domain`
//! - Contains all "impure" code (network I/O, environment access)
//! - The mapping layer itself never retries; retry lives in the transport

pub mod auth;
pub mod config;
pub mod http;
pub mod options;
pub mod response;
pub mod service;

mod request;

// Re-export commonly used items
pub use auth::{Authenticator, BearerTokenAuthenticator, NoAuthAuthenticator};
pub use http::HttpClient;
pub use options::*;
pub use response::DetailedResponse;
pub use service::NetAclClient;
