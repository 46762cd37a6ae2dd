//! Options for the account-settings operations

use netacl_domain::Result;

use super::required;

/// Options for the get-account-settings operation.
#[derive(Debug, Clone)]
pub struct GetAccountSettingsOptions {
    /// The ID of the account the settings are for.
    pub account_id: String,
    pub transaction_id: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl GetAccountSettingsOptions {
    pub fn builder() -> GetAccountSettingsOptionsBuilder {
        GetAccountSettingsOptionsBuilder::default()
    }
}

/// Builder for [`GetAccountSettingsOptions`].
#[derive(Debug, Clone, Default)]
pub struct GetAccountSettingsOptionsBuilder {
    account_id: Option<String>,
    transaction_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl GetAccountSettingsOptionsBuilder {
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
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
    pub fn build(self) -> Result<GetAccountSettingsOptions> {
        Ok(GetAccountSettingsOptions {
            account_id: required(self.account_id, "account_id")?,
            transaction_id: self.transaction_id,
            headers: self.headers,
        })
    }
}
