//! Options objects, one per API operation
//!
//! Every operation takes a dedicated options value produced by a builder.
//! Builders hold each field as "unset or set" and validate the
//! documented-required fields at `build()` time, so an incomplete options
//! value fails with `InvalidArgument` before any network interaction.
//! Custom headers supplied here override the SDK defaults for that call.

mod account;
mod policies;
mod zones;

pub use account::{GetAccountSettingsOptions, GetAccountSettingsOptionsBuilder};
pub use policies::{
    CreatePolicyOptions, CreatePolicyOptionsBuilder, DeletePolicyOptions,
    DeletePolicyOptionsBuilder, GetPolicyOptions, GetPolicyOptionsBuilder, ListPoliciesOptions,
    ListPoliciesOptionsBuilder, UpdatePolicyOptions, UpdatePolicyOptionsBuilder,
};
pub use zones::{
    CreateZoneOptions, CreateZoneOptionsBuilder, DeleteZoneOptions, DeleteZoneOptionsBuilder,
    GetZoneOptions, GetZoneOptionsBuilder, ListZonesOptions, ListZonesOptionsBuilder,
    UpdateZoneOptions, UpdateZoneOptionsBuilder,
};

use netacl_domain::{NetAclError, Result};

/// Unwrap a required builder field, rejecting unset and blank values.
pub(crate) fn required(field: Option<String>, name: &str) -> Result<String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => {
            Err(NetAclError::InvalidArgument(format!("parameter `{name}` must not be empty")))
        }
        None => Err(NetAclError::InvalidArgument(format!("missing required parameter `{name}`"))),
    }
}
