//! Zone address matchers

use serde::{Deserialize, Serialize};

/// A single address matcher inside a zone.
///
/// Closed set of variants discriminated by the wire-level `type` field.
/// Decoding dispatches on that tag; a payload with an unknown tag fails to
/// decode instead of being coerced into a near-miss variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Address {
    /// A single IP address.
    #[serde(rename = "ipAddress")]
    IpAddress { value: String },

    /// An IP range in `<first-ip>-<last-ip>` format.
    #[serde(rename = "ipRange")]
    IpRange { value: String },

    /// A subnet in CIDR format.
    #[serde(rename = "subnet")]
    Subnet { value: String },

    /// A VPC, referenced by CRN.
    #[serde(rename = "vpc")]
    Vpc { value: String },

    /// A reference to a platform service.
    #[serde(rename = "serviceRef")]
    ServiceRef { value: ServiceRefValue },
}

impl Address {
    pub fn ip_address(value: impl Into<String>) -> Self {
        Self::IpAddress { value: value.into() }
    }

    pub fn ip_range(value: impl Into<String>) -> Self {
        Self::IpRange { value: value.into() }
    }

    pub fn subnet(value: impl Into<String>) -> Self {
        Self::Subnet { value: value.into() }
    }

    pub fn vpc(value: impl Into<String>) -> Self {
        Self::Vpc { value: value.into() }
    }

    pub fn service_ref(value: ServiceRefValue) -> Self {
        Self::ServiceRef { value }
    }
}

/// Target of a service-reference address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRefValue {
    /// The referenced service name.
    pub service_name: String,
    /// The account owning the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// A specific service instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_instance: Option<String>,
}

impl ServiceRefValue {
    /// Create a service reference to the named service.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            account_id: None,
            service_instance: None,
        }
    }

    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn with_service_instance(mut self, service_instance: impl Into<String>) -> Self {
        self.service_instance = Some(service_instance.into());
        self
    }
}
