//! Policy models
//!
//! Environment and resource conditions carry no wire-level discriminant;
//! they are decoded by field shape (`name`/`value`/optional `operator`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{NetAclError, Result};

/// A policy as returned by the create, get, and update operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// The globally unique ID of the policy.
    pub id: String,
    /// The policy CRN.
    pub crn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The environments this policy applies to, in server order.
    pub environments: Vec<Environment>,
    /// The resources this policy applies to, in server order.
    pub resources: Vec<Resource>,
    /// The href link to the resource.
    pub href: String,
    pub created_at: DateTime<Utc>,
    /// IAM ID of the user or service which created the resource.
    pub created_by_id: String,
    pub last_modified_at: DateTime<Utc>,
    /// IAM ID of the user or service which last modified the resource.
    pub last_modified_by_id: String,
}

/// Response page of the list-policies operation. Single page, no cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyPage {
    /// The number of returned results.
    pub count: i64,
    /// The returned policies, in server order.
    pub policies: Vec<Policy>,
}

/// A policy environment: the context conditions a request must match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// The context attributes. Never empty.
    pub attributes: Vec<EnvironmentAttribute>,
}

impl Environment {
    /// Build an environment from its attributes.
    ///
    /// # Errors
    /// Returns `NetAclError::InvalidArgument` when `attributes` is empty; an
    /// environment with no conditions would match nothing meaningful and the
    /// service rejects it.
    pub fn new(attributes: Vec<EnvironmentAttribute>) -> Result<Self> {
        if attributes.is_empty() {
            return Err(NetAclError::InvalidArgument(
                "environment requires at least one attribute".to_string(),
            ));
        }
        Ok(Self { attributes })
    }
}

/// A single environment condition, e.g. `networkZoneId = <zone id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentAttribute {
    /// The attribute name.
    pub name: String,
    /// The attribute value.
    pub value: String,
}

impl EnvironmentAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// A policy resource: the target conditions a request must match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// The resource attributes. Never empty.
    pub attributes: Vec<ResourceAttribute>,
    /// The optional resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ResourceTagAttribute>>,
}

impl Resource {
    /// Build a resource from its attributes.
    ///
    /// # Errors
    /// Returns `NetAclError::InvalidArgument` when `attributes` is empty.
    pub fn new(attributes: Vec<ResourceAttribute>) -> Result<Self> {
        if attributes.is_empty() {
            return Err(NetAclError::InvalidArgument(
                "resource requires at least one attribute".to_string(),
            ));
        }
        Ok(Self { attributes, tags: None })
    }

    pub fn with_tags(mut self, tags: Vec<ResourceTagAttribute>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// A single resource condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAttribute {
    /// The attribute name.
    pub name: String,
    /// The attribute value.
    pub value: String,
    /// The comparison operator; equality when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

impl ResourceAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), operator: None }
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }
}

/// A single resource tag condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTagAttribute {
    /// The tag name.
    pub name: String,
    /// The tag value.
    pub value: String,
    /// The comparison operator; equality when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

impl ResourceTagAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), operator: None }
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_requires_attributes() {
        let err = Environment::new(vec![]).expect_err("empty attributes should be rejected");
        assert!(matches!(err, NetAclError::InvalidArgument(_)));
    }

    #[test]
    fn environment_round_trips() {
        let environment = Environment::new(vec![EnvironmentAttribute::new(
            "networkZoneId",
            "65810ac7-6200-4f22-ac19-f8f8edf70a34",
        )])
        .expect("non-empty attributes");

        let encoded = serde_json::to_string(&environment).expect("should encode");
        let decoded: Environment = serde_json::from_str(&encoded).expect("should decode");
        assert_eq!(decoded, environment);
    }

    #[test]
    fn resource_requires_attributes() {
        let err = Resource::new(vec![]).expect_err("empty attributes should be rejected");
        assert!(matches!(err, NetAclError::InvalidArgument(_)));
    }

    #[test]
    fn resource_attribute_omits_operator_when_unset() {
        let attribute = ResourceAttribute::new("accountId", "12ab34cd56ef78ab90cd12ef34ab56cd");
        let json = serde_json::to_value(&attribute).expect("should encode");

        assert_eq!(json["name"], "accountId");
        assert!(json.get("operator").is_none());
    }

    #[test]
    fn resource_round_trips_with_tags_and_operator() {
        let resource = Resource::new(vec![
            ResourceAttribute::new("accountId", "12ab34cd56ef78ab90cd12ef34ab56cd"),
            ResourceAttribute::new("serviceName", "cloud-object-storage").with_operator("stringEquals"),
        ])
        .expect("non-empty attributes")
        .with_tags(vec![ResourceTagAttribute::new("env", "prod")]);

        let encoded = serde_json::to_string(&resource).expect("should encode");
        let decoded: Resource = serde_json::from_str(&encoded).expect("should decode");
        assert_eq!(decoded, resource);
    }

    #[test]
    fn policy_decodes_sample_payload() {
        let raw = r#"{
            "id": "ea1d5e33-5be4-41c2-9122-fd197c654c85",
            "crn": "crn:v1:staging:public:network-acl::a/12ab::policy:ea1d5e33",
            "description": "this is an example of policy",
            "environments": [
                {"attributes": [{"name": "networkZoneId", "value": "65810ac7-6200-4f22-ac19-f8f8edf70a34"}]}
            ],
            "resources": [
                {"attributes": [{"name": "accountId", "value": "12ab34cd56ef78ab90cd12ef34ab56cd"}]}
            ],
            "href": "https://netacl-admin-api.cloud.example.com/v1/policies/ea1d5e33",
            "created_at": "2021-03-10T05:57:21.823Z",
            "created_by_id": "IBMid-550006YKB9",
            "last_modified_at": "2021-03-10T05:57:21.823Z",
            "last_modified_by_id": "IBMid-550006YKB9"
        }"#;

        let policy: Policy = serde_json::from_str(raw).expect("should decode");
        assert_eq!(policy.environments.len(), 1);
        assert_eq!(policy.environments[0].attributes[0].name, "networkZoneId");
        assert_eq!(policy.resources[0].tags, None);
    }
}
