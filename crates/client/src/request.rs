//! Request mapping helpers
//!
//! Pure, deterministic building blocks shared by every facade operation:
//! path-template substitution, sparse query assembly, and header assembly.

use netacl_domain::{NetAclError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, IF_MATCH};

/// Correlation header; sent only when the caller supplied a value, the
/// service generates one otherwise.
pub(crate) const HEADER_TRANSACTION_ID: &str = "Transaction-Id";

/// Substitute `{name}` placeholders in a path template with percent-encoded
/// values.
///
/// # Errors
/// - `NetAclError::InvalidArgument` when a parameter value is empty
/// - `NetAclError::Internal` when the template and the parameter list
///   disagree; the operation tables are static, so this can only be a bug in
///   the facade itself
pub(crate) fn resolve_path(template: &str, params: &[(&str, &str)]) -> Result<String> {
    let mut path = template.to_string();

    for (name, value) in params {
        if value.trim().is_empty() {
            return Err(NetAclError::InvalidArgument(format!(
                "path parameter `{name}` must not be empty"
            )));
        }

        let placeholder = format!("{{{name}}}");
        if !path.contains(&placeholder) {
            return Err(NetAclError::Internal(format!(
                "path template `{template}` has no `{placeholder}` placeholder"
            )));
        }

        path = path.replace(&placeholder, &urlencoding::encode(value));
    }

    if path.contains('{') {
        return Err(NetAclError::Internal(format!(
            "path template `{template}` has unresolved placeholders"
        )));
    }

    Ok(path)
}

/// Query parameters assembled from options fields.
///
/// Optional fields are added only when present; absence means "use the
/// server default", never "send an empty string".
#[derive(Debug, Default)]
pub(crate) struct QueryParams {
    entries: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.entries.push((name, value.into()));
    }

    pub(crate) fn push_opt(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.entries.push((name, value.to_string()));
        }
    }

    pub(crate) fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assemble the headers for one request.
///
/// Defaults first (`Accept`, correlation, concurrency token), then
/// caller-supplied custom headers, which override defaults of the same name.
///
/// # Errors
/// Returns `NetAclError::InvalidArgument` when a custom header name or value
/// is not a legal HTTP header.
pub(crate) fn build_headers(
    accept_json: bool,
    transaction_id: Option<&str>,
    if_match: Option<&str>,
    custom: &[(String, String)],
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    if accept_json {
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    }

    if let Some(transaction_id) = transaction_id {
        headers.insert(
            HeaderName::from_static("transaction-id"),
            header_value(HEADER_TRANSACTION_ID, transaction_id)?,
        );
    }

    if let Some(if_match) = if_match {
        headers.insert(IF_MATCH, header_value("If-Match", if_match)?);
    }

    for (name, value) in custom {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            NetAclError::InvalidArgument(format!("invalid header name `{name}`"))
        })?;
        let value = header_value(name.as_str(), value)?;
        headers.insert(name, value);
    }

    Ok(headers)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| {
        NetAclError::InvalidArgument(format!("invalid value for header `{name}`"))
    })
}
