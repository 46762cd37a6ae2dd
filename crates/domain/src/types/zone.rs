//! Zone models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::Address;

/// A zone as returned by the create, get, and update operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// The globally unique ID of the zone.
    pub id: String,
    /// The zone CRN.
    pub crn: String,
    /// The name of the zone.
    pub name: String,
    /// The id of the account owning this zone.
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The list of addresses in the zone, in server order.
    pub addresses: Vec<Address>,
    /// The list of excluded addresses, absent when the zone has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded: Option<Vec<Address>>,
    /// The href link to the resource.
    pub href: String,
    pub created_at: DateTime<Utc>,
    /// IAM ID of the user or service which created the resource.
    pub created_by_id: String,
    pub last_modified_at: DateTime<Utc>,
    /// IAM ID of the user or service which last modified the resource.
    pub last_modified_by_id: String,
}

/// Condensed zone representation returned by the list operation.
///
/// The server sends a preview of at most three addresses plus counters
/// instead of the full matcher lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub id: String,
    pub crn: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A preview of addresses in the zone (3 addresses maximum).
    pub addresses_preview: Vec<Address>,
    /// The total number of addresses in the zone.
    pub address_count: i64,
    /// The number of excluded addresses in the zone.
    pub excluded_count: i64,
    pub href: String,
    pub created_at: DateTime<Utc>,
    pub created_by_id: String,
    pub last_modified_at: DateTime<Utc>,
    pub last_modified_by_id: String,
}

/// Response page of the list-zones operation. Single page, no cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonePage {
    /// The number of returned results.
    pub count: i64,
    /// The returned zones, in server order.
    pub zones: Vec<ZoneSummary>,
}
