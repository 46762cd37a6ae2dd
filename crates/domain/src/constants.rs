//! Domain constants

/// Service name, also the prefix for configuration environment variables.
pub const SERVICE_NAME: &str = "netacl";

/// Base URL used when no service URL is configured.
pub const DEFAULT_SERVICE_URL: &str = "https://netacl-admin-api.cloud.example.com";

/// Request timeout applied when the configuration does not set one.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
