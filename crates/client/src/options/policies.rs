//! Options for the policy operations

use netacl_domain::{Environment, Resource, Result};

use super::required;

/// Options for the create-policy operation. Every field is optional; passing
/// `None` to [`crate::NetAclClient::create_policy`] instead of an options
/// value sends no request body at all.
#[derive(Debug, Clone, Default)]
pub struct CreatePolicyOptions {
    /// The environments this policy applies to.
    pub environments: Option<Vec<Environment>>,
    /// The resources this policy applies to.
    pub resources: Option<Vec<Resource>>,
    /// The description of the policy.
    pub description: Option<String>,
    /// Correlation id; the service generates one when absent.
    pub transaction_id: Option<String>,
    /// Extra headers for this call, overriding SDK defaults.
    pub headers: Vec<(String, String)>,
}

impl CreatePolicyOptions {
    pub fn builder() -> CreatePolicyOptionsBuilder {
        CreatePolicyOptionsBuilder::default()
    }
}

/// Builder for [`CreatePolicyOptions`].
#[derive(Debug, Clone, Default)]
pub struct CreatePolicyOptionsBuilder {
    environments: Option<Vec<Environment>>,
    resources: Option<Vec<Resource>>,
    description: Option<String>,
    transaction_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl CreatePolicyOptionsBuilder {
    pub fn environments(mut self, environments: Vec<Environment>) -> Self {
        self.environments = Some(environments);
        self
    }

    pub fn resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<CreatePolicyOptions> {
        Ok(CreatePolicyOptions {
            environments: self.environments,
            resources: self.resources,
            description: self.description,
            transaction_id: self.transaction_id,
            headers: self.headers,
        })
    }
}

/// Options for the list-policies operation.
///
/// Every filter maps to one query parameter and is sent only when set.
#[derive(Debug, Clone)]
pub struct ListPoliciesOptions {
    /// The ID of the managing account.
    pub account_id: String,
    /// The `region` resource attribute.
    pub region: Option<String>,
    /// The `resource` resource attribute.
    pub resource: Option<String>,
    /// The `resourceType` resource attribute.
    pub resource_type: Option<String>,
    /// The `serviceInstance` resource attribute.
    pub service_instance: Option<String>,
    /// The `serviceName` resource attribute.
    pub service_name: Option<String>,
    /// The `serviceType` resource attribute.
    pub service_type: Option<String>,
    /// Filter by the globally unique ID of a zone.
    pub zone_id: Option<String>,
    /// Sort field.
    pub sort: Option<String>,
    pub transaction_id: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl ListPoliciesOptions {
    pub fn builder() -> ListPoliciesOptionsBuilder {
        ListPoliciesOptionsBuilder::default()
    }
}

/// Builder for [`ListPoliciesOptions`].
#[derive(Debug, Clone, Default)]
pub struct ListPoliciesOptionsBuilder {
    account_id: Option<String>,
    region: Option<String>,
    resource: Option<String>,
    resource_type: Option<String>,
    service_instance: Option<String>,
    service_name: Option<String>,
    service_type: Option<String>,
    zone_id: Option<String>,
    sort: Option<String>,
    transaction_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl ListPoliciesOptionsBuilder {
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn service_instance(mut self, service_instance: impl Into<String>) -> Self {
        self.service_instance = Some(service_instance.into());
        self
    }

    pub fn service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    pub fn service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    pub fn zone_id(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// # Errors
    /// Returns `NetAclError::InvalidArgument` when `account_id` is unset.
    pub fn build(self) -> Result<ListPoliciesOptions> {
        Ok(ListPoliciesOptions {
            account_id: required(self.account_id, "account_id")?,
            region: self.region,
            resource: self.resource,
            resource_type: self.resource_type,
            service_instance: self.service_instance,
            service_name: self.service_name,
            service_type: self.service_type,
            zone_id: self.zone_id,
            sort: self.sort,
            transaction_id: self.transaction_id,
            headers: self.headers,
        })
    }
}

/// Options for the get-policy operation.
#[derive(Debug, Clone)]
pub struct GetPolicyOptions {
    /// The ID of a policy.
    pub policy_id: String,
    pub transaction_id: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl GetPolicyOptions {
    pub fn builder() -> GetPolicyOptionsBuilder {
        GetPolicyOptionsBuilder::default()
    }
}

/// Builder for [`GetPolicyOptions`].
#[derive(Debug, Clone, Default)]
pub struct GetPolicyOptionsBuilder {
    policy_id: Option<String>,
    transaction_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl GetPolicyOptionsBuilder {
    pub fn policy_id(mut self, policy_id: impl Into<String>) -> Self {
        self.policy_id = Some(policy_id.into());
        self
    }

    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// # Errors
    /// Returns `NetAclError::InvalidArgument` when `policy_id` is unset.
    pub fn build(self) -> Result<GetPolicyOptions> {
        Ok(GetPolicyOptions {
            policy_id: required(self.policy_id, "policy_id")?,
            transaction_id: self.transaction_id,
            headers: self.headers,
        })
    }
}

/// Options for the update-policy operation.
///
/// Updates are sparse: only the fields set here are sent. `if_match` must
/// carry the ETag from a prior create/get/update response.
#[derive(Debug, Clone)]
pub struct UpdatePolicyOptions {
    /// The ID of a policy.
    pub policy_id: String,
    /// The current revision of the policy, from the ETag response header.
    pub if_match: String,
    pub environments: Option<Vec<Environment>>,
    pub resources: Option<Vec<Resource>>,
    pub description: Option<String>,
    pub transaction_id: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl UpdatePolicyOptions {
    pub fn builder() -> UpdatePolicyOptionsBuilder {
        UpdatePolicyOptionsBuilder::default()
    }
}

/// Builder for [`UpdatePolicyOptions`].
#[derive(Debug, Clone, Default)]
pub struct UpdatePolicyOptionsBuilder {
    policy_id: Option<String>,
    if_match: Option<String>,
    environments: Option<Vec<Environment>>,
    resources: Option<Vec<Resource>>,
    description: Option<String>,
    transaction_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl UpdatePolicyOptionsBuilder {
    pub fn policy_id(mut self, policy_id: impl Into<String>) -> Self {
        self.policy_id = Some(policy_id.into());
        self
    }

    pub fn if_match(mut self, if_match: impl Into<String>) -> Self {
        self.if_match = Some(if_match.into());
        self
    }

    pub fn environments(mut self, environments: Vec<Environment>) -> Self {
        self.environments = Some(environments);
        self
    }

    pub fn resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// # Errors
    /// Returns `NetAclError::InvalidArgument` when `policy_id` or `if_match`
    /// is unset.
    pub fn build(self) -> Result<UpdatePolicyOptions> {
        Ok(UpdatePolicyOptions {
            policy_id: required(self.policy_id, "policy_id")?,
            if_match: required(self.if_match, "if_match")?,
            environments: self.environments,
            resources: self.resources,
            description: self.description,
            transaction_id: self.transaction_id,
            headers: self.headers,
        })
    }
}

/// Options for the delete-policy operation.
#[derive(Debug, Clone)]
pub struct DeletePolicyOptions {
    /// The ID of a policy.
    pub policy_id: String,
    pub transaction_id: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl DeletePolicyOptions {
    pub fn builder() -> DeletePolicyOptionsBuilder {
        DeletePolicyOptionsBuilder::default()
    }
}

/// Builder for [`DeletePolicyOptions`].
#[derive(Debug, Clone, Default)]
pub struct DeletePolicyOptionsBuilder {
    policy_id: Option<String>,
    transaction_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl DeletePolicyOptionsBuilder {
    pub fn policy_id(mut self, policy_id: impl Into<String>) -> Self {
        self.policy_id = Some(policy_id.into());
        self
    }

    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// # Errors
    /// Returns `NetAclError::InvalidArgument` when `policy_id` is unset.
    pub fn build(self) -> Result<DeletePolicyOptions> {
        Ok(DeletePolicyOptions {
            policy_id: required(self.policy_id, "policy_id")?,
            transaction_id: self.transaction_id,
            headers: self.headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use netacl_domain::{EnvironmentAttribute, NetAclError, ResourceAttribute};

    use super::*;

    #[test]
    fn get_policy_requires_policy_id() {
        let err = GetPolicyOptions::builder().build().expect_err("policy_id is required");
        assert!(matches!(err, NetAclError::InvalidArgument(_)));
    }

    #[test]
    fn update_policy_requires_if_match() {
        let err = UpdatePolicyOptions::builder()
            .policy_id("ea1d5e33-5be4-41c2-9122-fd197c654c85")
            .build()
            .expect_err("if_match is required");
        assert!(matches!(err, NetAclError::InvalidArgument(_)));
    }

    #[test]
    fn list_policies_requires_account_id() {
        let err = ListPoliciesOptions::builder()
            .region("us-south")
            .build()
            .expect_err("account_id is required");
        assert!(matches!(err, NetAclError::InvalidArgument(_)));
    }

    #[test]
    fn create_policy_options_carry_conditions_in_order() {
        let environments = vec![Environment::new(vec![EnvironmentAttribute::new(
            "networkZoneId",
            "65810ac7-6200-4f22-ac19-f8f8edf70a34",
        )])
        .expect("non-empty attributes")];
        let resources = vec![Resource::new(vec![ResourceAttribute::new(
            "accountId",
            "12ab34cd56ef78ab90cd12ef34ab56cd",
        )])
        .expect("non-empty attributes")];

        let options = CreatePolicyOptions::builder()
            .environments(environments.clone())
            .resources(resources.clone())
            .description("this is an example of policy")
            .build()
            .expect("valid options");

        assert_eq!(options.environments, Some(environments));
        assert_eq!(options.resources, Some(resources));
    }
}
