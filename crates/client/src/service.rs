//! Service facade: one method per API operation
//!
//! Each operation composes the same pipeline: resolve the path template,
//! assemble headers and query parameters from the options value, serialize a
//! sparse body for mutating calls, hand the request to the authenticator and
//! the transport, then convert the response into a typed result.

use std::sync::Arc;
use std::time::Duration;

use netacl_domain::constants::SERVICE_NAME;
use netacl_domain::{
    AccountSettings, Address, ClientConfig, Environment, ErrorEnvelope, NetAclError, Policy,
    PolicyPage, Resource, Result, Zone, ZonePage,
};
use reqwest::header::HeaderMap;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::{self, Authenticator};
use crate::config;
use crate::http::HttpClient;
use crate::options::{
    CreatePolicyOptions, CreateZoneOptions, DeletePolicyOptions, DeleteZoneOptions,
    GetAccountSettingsOptions, GetPolicyOptions, GetZoneOptions, ListPoliciesOptions,
    ListZonesOptions, UpdatePolicyOptions, UpdateZoneOptions,
};
use crate::request::{self, QueryParams};
use crate::response::DetailedResponse;

/// Client for the NetAcl access-control admin API.
///
/// Stateless between calls: each operation is one request/response exchange,
/// and concurrent calls need no coordination. The only cross-call contract is
/// optimistic concurrency — updates must present the `ETag` of a prior
/// response as `if_match`, and staleness is detected by the server.
pub struct NetAclClient {
    service_url: String,
    http_client: HttpClient,
    authenticator: Arc<dyn Authenticator>,
}

impl std::fmt::Debug for NetAclClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetAclClient")
            .field("service_url", &self.service_url)
            .finish_non_exhaustive()
    }
}

impl NetAclClient {
    /// Create a client from explicit configuration.
    ///
    /// # Errors
    /// Returns `NetAclError::Config` for an invalid service URL and
    /// `NetAclError::Internal` if the transport cannot be constructed.
    pub fn new(config: &ClientConfig, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        let service_url = config::normalize_service_url(&config.service_url)?;
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(user_agent())
            .build()?;

        Ok(Self { service_url, http_client, authenticator })
    }

    /// Create a client from the environment (or a discovered config file),
    /// selecting the authenticator the configuration names.
    pub fn from_env() -> Result<Self> {
        let config = config::load()?;
        let authenticator = auth::from_config(&config.auth)?;
        Self::new(&config, authenticator)
    }

    /// Base URL this client targets, without a trailing slash.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /* ---------------------------------------------------------------- */
    /* Zones                                                            */
    /* ---------------------------------------------------------------- */

    /// Create a zone for the specified account.
    ///
    /// Passing `None` sends a request with no body at all, asking the
    /// service to create the zone from its defaults; `Some` sends exactly
    /// the fields that were set.
    pub async fn create_zone(
        &self,
        options: Option<&CreateZoneOptions>,
    ) -> Result<DetailedResponse<Zone>> {
        let headers = match options {
            Some(opts) => {
                request::build_headers(true, opts.transaction_id.as_deref(), None, &opts.headers)?
            }
            None => request::build_headers(true, None, None, &[])?,
        };
        let body = options.map(|opts| to_body(&ZoneWriteBody::from(opts))).transpose()?;

        let response =
            self.dispatch(Method::POST, "/v1/zones", headers, QueryParams::new(), body).await?;
        json_result(response).await
    }

    /// List zones for the specified account.
    pub async fn list_zones(&self, options: &ListZonesOptions) -> Result<DetailedResponse<ZonePage>> {
        let mut query = QueryParams::new();
        query.push("account_id", options.account_id.clone());
        query.push_opt("name", options.name.as_deref());
        query.push_opt("sort", options.sort.as_deref());

        let headers =
            request::build_headers(true, options.transaction_id.as_deref(), None, &options.headers)?;

        let response = self.dispatch(Method::GET, "/v1/zones", headers, query, None).await?;
        json_result(response).await
    }

    /// Get the zone with the specified ID.
    pub async fn get_zone(&self, options: &GetZoneOptions) -> Result<DetailedResponse<Zone>> {
        let path = request::resolve_path("/v1/zones/{zone_id}", &[("zone_id", &options.zone_id)])?;
        let headers =
            request::build_headers(true, options.transaction_id.as_deref(), None, &options.headers)?;

        let response = self.dispatch(Method::GET, &path, headers, QueryParams::new(), None).await?;
        json_result(response).await
    }

    /// Update the zone with the specified ID.
    ///
    /// The update is sparse: unset optional fields are omitted from the body
    /// and left untouched by the service. `if_match` is always sent.
    pub async fn update_zone(&self, options: &UpdateZoneOptions) -> Result<DetailedResponse<Zone>> {
        let path = request::resolve_path("/v1/zones/{zone_id}", &[("zone_id", &options.zone_id)])?;
        let headers = request::build_headers(
            true,
            options.transaction_id.as_deref(),
            Some(&options.if_match),
            &options.headers,
        )?;
        let body = to_body(&ZoneWriteBody::from(options))?;

        let response =
            self.dispatch(Method::PUT, &path, headers, QueryParams::new(), Some(body)).await?;
        json_result(response).await
    }

    /// Delete the zone with the specified ID. Success carries no result
    /// value; any response body is ignored.
    pub async fn delete_zone(&self, options: &DeleteZoneOptions) -> Result<DetailedResponse<()>> {
        let path = request::resolve_path("/v1/zones/{zone_id}", &[("zone_id", &options.zone_id)])?;
        let headers =
            request::build_headers(false, options.transaction_id.as_deref(), None, &options.headers)?;

        let response =
            self.dispatch(Method::DELETE, &path, headers, QueryParams::new(), None).await?;
        empty_result(response).await
    }

    /* ---------------------------------------------------------------- */
    /* Policies                                                         */
    /* ---------------------------------------------------------------- */

    /// Create a policy for the specified account.
    ///
    /// Passing `None` sends a request with no body at all, as with
    /// [`Self::create_zone`].
    pub async fn create_policy(
        &self,
        options: Option<&CreatePolicyOptions>,
    ) -> Result<DetailedResponse<Policy>> {
        let headers = match options {
            Some(opts) => {
                request::build_headers(true, opts.transaction_id.as_deref(), None, &opts.headers)?
            }
            None => request::build_headers(true, None, None, &[])?,
        };
        let body = options.map(|opts| to_body(&PolicyWriteBody::from(opts))).transpose()?;

        let response =
            self.dispatch(Method::POST, "/v1/policies", headers, QueryParams::new(), body).await?;
        json_result(response).await
    }

    /// List policies for the specified account, optionally filtered by
    /// resource attributes or by zone.
    pub async fn list_policies(
        &self,
        options: &ListPoliciesOptions,
    ) -> Result<DetailedResponse<PolicyPage>> {
        let mut query = QueryParams::new();
        query.push("account_id", options.account_id.clone());
        query.push_opt("region", options.region.as_deref());
        query.push_opt("resource", options.resource.as_deref());
        query.push_opt("resource_type", options.resource_type.as_deref());
        query.push_opt("service_instance", options.service_instance.as_deref());
        query.push_opt("service_name", options.service_name.as_deref());
        query.push_opt("service_type", options.service_type.as_deref());
        query.push_opt("zone_id", options.zone_id.as_deref());
        query.push_opt("sort", options.sort.as_deref());

        let headers =
            request::build_headers(true, options.transaction_id.as_deref(), None, &options.headers)?;

        let response = self.dispatch(Method::GET, "/v1/policies", headers, query, None).await?;
        json_result(response).await
    }

    /// Get the policy with the specified ID.
    pub async fn get_policy(&self, options: &GetPolicyOptions) -> Result<DetailedResponse<Policy>> {
        let path =
            request::resolve_path("/v1/policies/{policy_id}", &[("policy_id", &options.policy_id)])?;
        let headers =
            request::build_headers(true, options.transaction_id.as_deref(), None, &options.headers)?;

        let response = self.dispatch(Method::GET, &path, headers, QueryParams::new(), None).await?;
        json_result(response).await
    }

    /// Update the policy with the specified ID. Sparse, like
    /// [`Self::update_zone`].
    pub async fn update_policy(
        &self,
        options: &UpdatePolicyOptions,
    ) -> Result<DetailedResponse<Policy>> {
        let path =
            request::resolve_path("/v1/policies/{policy_id}", &[("policy_id", &options.policy_id)])?;
        let headers = request::build_headers(
            true,
            options.transaction_id.as_deref(),
            Some(&options.if_match),
            &options.headers,
        )?;
        let body = to_body(&PolicyWriteBody::from(options))?;

        let response =
            self.dispatch(Method::PUT, &path, headers, QueryParams::new(), Some(body)).await?;
        json_result(response).await
    }

    /// Delete the policy with the specified ID. Success carries no result
    /// value; any response body is ignored.
    pub async fn delete_policy(
        &self,
        options: &DeletePolicyOptions,
    ) -> Result<DetailedResponse<()>> {
        let path =
            request::resolve_path("/v1/policies/{policy_id}", &[("policy_id", &options.policy_id)])?;
        let headers =
            request::build_headers(false, options.transaction_id.as_deref(), None, &options.headers)?;

        let response =
            self.dispatch(Method::DELETE, &path, headers, QueryParams::new(), None).await?;
        empty_result(response).await
    }

    /* ---------------------------------------------------------------- */
    /* Account settings                                                  */
    /* ---------------------------------------------------------------- */

    /// Get the settings for the specified account ID. Read-only.
    pub async fn get_account_settings(
        &self,
        options: &GetAccountSettingsOptions,
    ) -> Result<DetailedResponse<AccountSettings>> {
        let path = request::resolve_path(
            "/v1/account_settings/{account_id}",
            &[("account_id", &options.account_id)],
        )?;
        let headers =
            request::build_headers(true, options.transaction_id.as_deref(), None, &options.headers)?;

        let response = self.dispatch(Method::GET, &path, headers, QueryParams::new(), None).await?;
        json_result(response).await
    }

    /* ---------------------------------------------------------------- */
    /* Plumbing                                                          */
    /* ---------------------------------------------------------------- */

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        query: QueryParams,
        body: Option<serde_json::Value>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.service_url, path);

        let mut builder = self.http_client.request(method.clone(), &url).headers(headers);
        if !query.is_empty() {
            builder = builder.query(query.entries());
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let builder = self.authenticator.authenticate(builder).await?;

        debug!(%method, url, "dispatching request");
        self.http_client.send(builder).await
    }
}

fn user_agent() -> String {
    format!("{SERVICE_NAME}-sdk-rust/{}", env!("CARGO_PKG_VERSION"))
}

async fn json_result<T: DeserializeOwned>(response: Response) -> Result<DetailedResponse<T>> {
    let status = response.status();
    if !status.is_success() {
        return Err(protocol_error(response).await);
    }

    let headers = response.headers().clone();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| NetAclError::Network(format!("failed to read response body: {e}")))?;
    let result = serde_json::from_slice(&bytes).map_err(|e| {
        NetAclError::Decode(format!("response body does not match the expected shape: {e}"))
    })?;

    Ok(DetailedResponse::new(status, headers, result))
}

async fn empty_result(response: Response) -> Result<DetailedResponse<()>> {
    let status = response.status();
    if !status.is_success() {
        return Err(protocol_error(response).await);
    }

    // Success on void endpoints is signaled by the status alone.
    let headers = response.headers().clone();
    Ok(DetailedResponse::new(status, headers, ()))
}

async fn protocol_error(response: Response) -> NetAclError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let payload: Option<ErrorEnvelope> = serde_json::from_str(&text).ok();

    let message = payload
        .as_ref()
        .and_then(|envelope| envelope.errors.first())
        .and_then(|detail| detail.message.clone())
        .unwrap_or_else(|| {
            status.canonical_reason().unwrap_or("unexpected status").to_string()
        });

    warn!(status = status.as_u16(), %message, "service returned an error");
    NetAclError::Api { status: status.as_u16(), message, payload }
}

fn to_body<T: Serialize>(body: &T) -> Result<serde_json::Value> {
    serde_json::to_value(body)
        .map_err(|e| NetAclError::Internal(format!("failed to serialize request body: {e}")))
}

/* -------------------------------------------------------------------- */
/* Wire bodies                                                           */
/* -------------------------------------------------------------------- */

/// Sparse create/update body for zones. Unset fields are omitted entirely,
/// never emitted as `null`.
#[derive(Debug, Serialize)]
struct ZoneWriteBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    addresses: Option<&'a [Address]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    excluded: Option<&'a [Address]>,
}

impl<'a> From<&'a CreateZoneOptions> for ZoneWriteBody<'a> {
    fn from(options: &'a CreateZoneOptions) -> Self {
        Self {
            name: options.name.as_deref(),
            account_id: options.account_id.as_deref(),
            addresses: options.addresses.as_deref(),
            description: options.description.as_deref(),
            excluded: options.excluded.as_deref(),
        }
    }
}

impl<'a> From<&'a UpdateZoneOptions> for ZoneWriteBody<'a> {
    fn from(options: &'a UpdateZoneOptions) -> Self {
        Self {
            name: options.name.as_deref(),
            account_id: options.account_id.as_deref(),
            addresses: options.addresses.as_deref(),
            description: options.description.as_deref(),
            excluded: options.excluded.as_deref(),
        }
    }
}

/// Sparse create/update body for policies.
#[derive(Debug, Serialize)]
struct PolicyWriteBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    environments: Option<&'a [Environment]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resources: Option<&'a [Resource]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

impl<'a> From<&'a CreatePolicyOptions> for PolicyWriteBody<'a> {
    fn from(options: &'a CreatePolicyOptions) -> Self {
        Self {
            environments: options.environments.as_deref(),
            resources: options.resources.as_deref(),
            description: options.description.as_deref(),
        }
    }
}

impl<'a> From<&'a UpdatePolicyOptions> for PolicyWriteBody<'a> {
    fn from(options: &'a UpdatePolicyOptions) -> Self {
        Self {
            environments: options.environments.as_deref(),
            resources: options.resources.as_deref(),
            description: options.description.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use netacl_domain::AuthConfig;

    use crate::auth::NoAuthAuthenticator;

    use super::*;

    #[test]
    fn new_strips_trailing_slash_from_service_url() {
        let config = ClientConfig {
            service_url: "https://stub.local/".to_string(),
            timeout_seconds: 5,
            auth: AuthConfig::None,
        };

        let client =
            NetAclClient::new(&config, Arc::new(NoAuthAuthenticator)).expect("valid config");
        assert_eq!(client.service_url(), "https://stub.local");
    }

    #[test]
    fn new_rejects_invalid_service_url() {
        let config = ClientConfig {
            service_url: "not a url".to_string(),
            timeout_seconds: 5,
            auth: AuthConfig::None,
        };

        let err = NetAclClient::new(&config, Arc::new(NoAuthAuthenticator))
            .expect_err("invalid url must fail");
        assert!(matches!(err, NetAclError::Config(_)));
    }

    #[test]
    fn user_agent_names_the_sdk() {
        assert!(user_agent().starts_with("netacl-sdk-rust/"));
    }

    #[test]
    fn zone_write_body_omits_unset_fields() {
        let options = CreateZoneOptions::builder().name("an example of zone").build().expect("ok");
        let body = to_body(&ZoneWriteBody::from(&options)).expect("serializable");

        assert_eq!(body, serde_json::json!({"name": "an example of zone"}));
    }

    #[test]
    fn zone_write_body_preserves_address_order() {
        let options = CreateZoneOptions::builder()
            .name("an example of zone")
            .account_id("12ab34cd56ef78ab90cd12ef34ab56cd")
            .addresses(vec![
                Address::ip_address("169.23.56.234"),
                Address::subnet("192.0.2.0/24"),
            ])
            .build()
            .expect("ok");
        let body = to_body(&ZoneWriteBody::from(&options)).expect("serializable");

        assert_eq!(body["addresses"][0]["type"], "ipAddress");
        assert_eq!(body["addresses"][1]["type"], "subnet");
    }

    #[test]
    fn policy_write_body_omits_unset_fields() {
        let options = CreatePolicyOptions::builder()
            .description("this is an example of policy")
            .build()
            .expect("ok");
        let body = to_body(&PolicyWriteBody::from(&options)).expect("serializable");

        assert_eq!(body, serde_json::json!({"description": "this is an example of policy"}));
    }
}
