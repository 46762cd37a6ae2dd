//! Typed response wrapper

use reqwest::header::{HeaderMap, ETAG};
use reqwest::StatusCode;

/// A decoded operation result plus the transport-level metadata callers need,
/// most importantly the `ETag` that feeds `if_match` on update calls.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    status: StatusCode,
    headers: HeaderMap,
    result: T,
}

impl<T> DetailedResponse<T> {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, result: T) -> Self {
        Self { status, headers, result }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The `ETag` response header, used as the concurrency token on updates.
    pub fn etag(&self) -> Option<&str> {
        self.headers.get(ETAG).and_then(|value| value.to_str().ok())
    }

    pub fn result(&self) -> &T {
        &self.result
    }

    pub fn into_result(self) -> T {
        self.result
    }
}
