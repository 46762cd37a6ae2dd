//! HTTP transport
//!
//! The transport collaborator owns everything the mapping layer does not:
//! timeouts, bounded retries with backoff, connection reuse, and TLS.

mod client;

pub use client::{HttpClient, HttpClientBuilder};
