//! Wire-level data model for the access-control admin API
//!
//! Every type here mirrors a documented request or response shape. Response
//! models decode tolerantly: unknown fields are ignored and server-omitted
//! optional fields stay `None` rather than collapsing to a zero value.

pub mod account_settings;
pub mod address;
pub mod policy;
pub mod zone;

// Re-export model types for convenience
pub use account_settings::AccountSettings;
pub use address::{Address, ServiceRefValue};
pub use policy::{
    Environment, EnvironmentAttribute, Policy, PolicyPage, Resource, ResourceAttribute,
    ResourceTagAttribute,
};
pub use zone::{Zone, ZonePage, ZoneSummary};
