//! Account settings model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only resource limits and usage counters for an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    /// The globally unique ID of the account settings.
    pub id: String,
    /// The account settings CRN.
    pub crn: String,
    /// The maximum number of policies allowed for the account.
    pub policy_count_limit: i64,
    /// The maximum number of zones allowed for the account.
    pub zone_count_limit: i64,
    /// The current number of policies used by the account.
    pub current_policy_count: i64,
    /// The current number of zones used by the account.
    pub current_zone_count: i64,
    /// The href link to the resource.
    pub href: String,
    pub created_at: DateTime<Utc>,
    pub created_by_id: String,
    pub last_modified_at: DateTime<Utc>,
    pub last_modified_by_id: String,
}
