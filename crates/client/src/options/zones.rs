//! Options for the zone operations

use netacl_domain::{Address, Result};

use super::required;

/// Options for the create-zone operation. Every field is optional; passing
/// `None` to [`crate::NetAclClient::create_zone`] instead of an options value
/// sends no request body at all.
#[derive(Debug, Clone, Default)]
pub struct CreateZoneOptions {
    /// The name of the zone.
    pub name: Option<String>,
    /// The id of the account owning this zone.
    pub account_id: Option<String>,
    /// The list of addresses in the zone.
    pub addresses: Option<Vec<Address>>,
    /// The description of the zone.
    pub description: Option<String>,
    /// The list of excluded addresses in the zone.
    pub excluded: Option<Vec<Address>>,
    /// Correlation id; the service generates one when absent.
    pub transaction_id: Option<String>,
    /// Extra headers for this call, overriding SDK defaults.
    pub headers: Vec<(String, String)>,
}

impl CreateZoneOptions {
    pub fn builder() -> CreateZoneOptionsBuilder {
        CreateZoneOptionsBuilder::default()
    }
}

/// Builder for [`CreateZoneOptions`].
#[derive(Debug, Clone, Default)]
pub struct CreateZoneOptionsBuilder {
    name: Option<String>,
    account_id: Option<String>,
    addresses: Option<Vec<Address>>,
    description: Option<String>,
    excluded: Option<Vec<Address>>,
    transaction_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl CreateZoneOptionsBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn addresses(mut self, addresses: Vec<Address>) -> Self {
        self.addresses = Some(addresses);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn excluded(mut self, excluded: Vec<Address>) -> Self {
        self.excluded = Some(excluded);
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

    pub fn build(self) -> Result<CreateZoneOptions> {
        Ok(CreateZoneOptions {
            name: self.name,
            account_id: self.account_id,
            addresses: self.addresses,
            description: self.description,
            excluded: self.excluded,
            transaction_id: self.transaction_id,
            headers: self.headers,
        })
    }
}

/// Options for the list-zones operation.
#[derive(Debug, Clone)]
pub struct ListZonesOptions {
    /// The ID of the managing account.
    pub account_id: String,
    /// Filter by zone name.
    pub name: Option<String>,
    /// Sort field.
    pub sort: Option<String>,
    pub transaction_id: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl ListZonesOptions {
    pub fn builder() -> ListZonesOptionsBuilder {
        ListZonesOptionsBuilder::default()
    }
}

/// Builder for [`ListZonesOptions`].
#[derive(Debug, Clone, Default)]
pub struct ListZonesOptionsBuilder {
    account_id: Option<String>,
    name: Option<String>,
    sort: Option<String>,
    transaction_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl ListZonesOptionsBuilder {
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
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
    pub fn build(self) -> Result<ListZonesOptions> {
        Ok(ListZonesOptions {
            account_id: required(self.account_id, "account_id")?,
            name: self.name,
            sort: self.sort,
            transaction_id: self.transaction_id,
            headers: self.headers,
        })
    }
}

/// Options for the get-zone operation.
#[derive(Debug, Clone)]
pub struct GetZoneOptions {
    /// The ID of a zone.
    pub zone_id: String,
    pub transaction_id: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl GetZoneOptions {
    pub fn builder() -> GetZoneOptionsBuilder {
        GetZoneOptionsBuilder::default()
    }
}

/// Builder for [`GetZoneOptions`].
#[derive(Debug, Clone, Default)]
pub struct GetZoneOptionsBuilder {
    zone_id: Option<String>,
    transaction_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl GetZoneOptionsBuilder {
    pub fn zone_id(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
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
    /// Returns `NetAclError::InvalidArgument` when `zone_id` is unset.
    pub fn build(self) -> Result<GetZoneOptions> {
        Ok(GetZoneOptions {
            zone_id: required(self.zone_id, "zone_id")?,
            transaction_id: self.transaction_id,
            headers: self.headers,
        })
    }
}

/// Options for the update-zone operation.
///
/// Updates are sparse: only the fields set here are sent, and the service
/// leaves the rest untouched. `if_match` must carry the ETag from a prior
/// create/get/update response.
#[derive(Debug, Clone)]
pub struct UpdateZoneOptions {
    /// The ID of a zone.
    pub zone_id: String,
    /// The current revision of the zone, from the ETag response header.
    pub if_match: String,
    pub name: Option<String>,
    pub account_id: Option<String>,
    pub addresses: Option<Vec<Address>>,
    pub description: Option<String>,
    pub excluded: Option<Vec<Address>>,
    pub transaction_id: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl UpdateZoneOptions {
    pub fn builder() -> UpdateZoneOptionsBuilder {
        UpdateZoneOptionsBuilder::default()
    }
}

/// Builder for [`UpdateZoneOptions`].
#[derive(Debug, Clone, Default)]
pub struct UpdateZoneOptionsBuilder {
    zone_id: Option<String>,
    if_match: Option<String>,
    name: Option<String>,
    account_id: Option<String>,
    addresses: Option<Vec<Address>>,
    description: Option<String>,
    excluded: Option<Vec<Address>>,
    transaction_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl UpdateZoneOptionsBuilder {
    pub fn zone_id(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
        self
    }

    pub fn if_match(mut self, if_match: impl Into<String>) -> Self {
        self.if_match = Some(if_match.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn addresses(mut self, addresses: Vec<Address>) -> Self {
        self.addresses = Some(addresses);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn excluded(mut self, excluded: Vec<Address>) -> Self {
        self.excluded = Some(excluded);
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
    /// Returns `NetAclError::InvalidArgument` when `zone_id` or `if_match`
    /// is unset.
    pub fn build(self) -> Result<UpdateZoneOptions> {
        Ok(UpdateZoneOptions {
            zone_id: required(self.zone_id, "zone_id")?,
            if_match: required(self.if_match, "if_match")?,
            name: self.name,
            account_id: self.account_id,
            addresses: self.addresses,
            description: self.description,
            excluded: self.excluded,
            transaction_id: self.transaction_id,
            headers: self.headers,
        })
    }
}

/// Options for the delete-zone operation.
#[derive(Debug, Clone)]
pub struct DeleteZoneOptions {
    /// The ID of a zone.
    pub zone_id: String,
    pub transaction_id: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl DeleteZoneOptions {
    pub fn builder() -> DeleteZoneOptionsBuilder {
        DeleteZoneOptionsBuilder::default()
    }
}

/// Builder for [`DeleteZoneOptions`].
#[derive(Debug, Clone, Default)]
pub struct DeleteZoneOptionsBuilder {
    zone_id: Option<String>,
    transaction_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl DeleteZoneOptionsBuilder {
    pub fn zone_id(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
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
    /// Returns `NetAclError::InvalidArgument` when `zone_id` is unset.
    pub fn build(self) -> Result<DeleteZoneOptions> {
        Ok(DeleteZoneOptions {
            zone_id: required(self.zone_id, "zone_id")?,
            transaction_id: self.transaction_id,
            headers: self.headers,
        })
    }
}
