//! Shared helpers for the wire-level integration tests

use std::sync::Arc;

use netacl_client::{NetAclClient, NoAuthAuthenticator};
use netacl_domain::{AuthConfig, ClientConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Install a test subscriber once so `RUST_LOG`-style filtering works when
/// debugging a failing wire test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Build a client pointed at the mock server, without authentication.
pub fn client_for(server: &MockServer) -> NetAclClient {
    init_tracing();

    let config = ClientConfig {
        service_url: server.uri(),
        timeout_seconds: 5,
        auth: AuthConfig::None,
    };

    NetAclClient::new(&config, Arc::new(NoAuthAuthenticator)).expect("client should build")
}

/// A full zone payload as the service returns it from create/get/update.
pub fn zone_json() -> Value {
    json!({
        "id": "65810ac7-6200-4f22-ac19-f8f8edf70a34",
        "crn": "crn:v1:staging:public:network-acl::a/12ab34cd56ef78ab90cd12ef34ab56cd::zone:65810ac7",
        "name": "an example of zone",
        "account_id": "12ab34cd56ef78ab90cd12ef34ab56cd",
        "description": "this is an example of zone",
        "addresses": [{"type": "ipAddress", "value": "169.23.56.234"}],
        "href": "https://netacl-admin-api.cloud.example.com/v1/zones/65810ac7",
        "created_at": "2021-03-10T05:57:21.823Z",
        "created_by_id": "IBMid-550006YKB9",
        "last_modified_at": "2021-03-10T05:57:21.823Z",
        "last_modified_by_id": "IBMid-550006YKB9"
    })
}

/// A single-entry zone page with the condensed summary representation.
pub fn zone_page_json() -> Value {
    json!({
        "count": 1,
        "zones": [{
            "id": "65810ac7-6200-4f22-ac19-f8f8edf70a34",
            "crn": "crn:v1:staging:public:network-acl::a/12ab34cd56ef78ab90cd12ef34ab56cd::zone:65810ac7",
            "name": "an example of zone",
            "description": "this is an example of zone",
            "addresses_preview": [{"type": "ipAddress", "value": "169.23.56.234"}],
            "address_count": 1,
            "excluded_count": 0,
            "href": "https://netacl-admin-api.cloud.example.com/v1/zones/65810ac7",
            "created_at": "2021-03-10T05:57:21.823Z",
            "created_by_id": "IBMid-550006YKB9",
            "last_modified_at": "2021-03-10T05:57:21.823Z",
            "last_modified_by_id": "IBMid-550006YKB9"
        }]
    })
}

/// A full policy payload as the service returns it from create/get/update.
pub fn policy_json() -> Value {
    json!({
        "id": "ea1d5e33-5be4-41c2-9122-fd197c654c85",
        "crn": "crn:v1:staging:public:network-acl::a/12ab34cd56ef78ab90cd12ef34ab56cd::policy:ea1d5e33",
        "description": "this is an example of policy",
        "environments": [{
            "attributes": [{"name": "networkZoneId", "value": "65810ac7-6200-4f22-ac19-f8f8edf70a34"}]
        }],
        "resources": [{
            "attributes": [{"name": "accountId", "value": "12ab34cd56ef78ab90cd12ef34ab56cd"}]
        }],
        "href": "https://netacl-admin-api.cloud.example.com/v1/policies/ea1d5e33",
        "created_at": "2021-03-10T05:57:21.823Z",
        "created_by_id": "IBMid-550006YKB9",
        "last_modified_at": "2021-03-10T05:57:21.823Z",
        "last_modified_by_id": "IBMid-550006YKB9"
    })
}

/// A single-entry policy page.
pub fn policy_page_json() -> Value {
    json!({
        "count": 1,
        "policies": [policy_json()]
    })
}

/// An account settings payload.
pub fn account_settings_json() -> Value {
    json!({
        "id": "aa1d5e33-5be4-41c2-9122-fd197c654c85",
        "crn": "crn:v1:staging:public:network-acl::a/12ab34cd56ef78ab90cd12ef34ab56cd::account-settings:aa1d5e33",
        "policy_count_limit": 20,
        "zone_count_limit": 30,
        "current_policy_count": 4,
        "current_zone_count": 7,
        "href": "https://netacl-admin-api.cloud.example.com/v1/account_settings/12ab34cd56ef78ab90cd12ef34ab56cd",
        "created_at": "2021-03-10T05:57:21.823Z",
        "created_by_id": "IBMid-550006YKB9",
        "last_modified_at": "2021-03-10T05:57:21.823Z",
        "last_modified_by_id": "IBMid-550006YKB9"
    })
}
