//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If any `NETACL_*` environment variable is set, the environment wins
//!    (errors there are fatal, not silently papered over)
//! 2. Otherwise, probes for a `netacl.toml` / `netacl.json` config file
//! 3. Otherwise, falls back to the built-in defaults
//!
//! ## Environment Variables
//! - `NETACL_SERVICE_URL`: Base URL of the service
//! - `NETACL_TIMEOUT_SECONDS`: Request timeout in seconds
//! - `NETACL_AUTH_TYPE`: Authentication scheme, `none` or `bearer`
//! - `NETACL_BEARER_TOKEN`: Token for the `bearer` scheme
//!
//! ## File Locations
//! The loader probes `netacl.toml` and `netacl.json` in the current working
//! directory and its parent, in that order.

use std::path::{Path, PathBuf};

use netacl_domain::constants::DEFAULT_SERVICE_URL;
use netacl_domain::{AuthConfig, ClientConfig, NetAclError, Result};
use url::Url;

const ENV_SERVICE_URL: &str = "NETACL_SERVICE_URL";
const ENV_TIMEOUT_SECONDS: &str = "NETACL_TIMEOUT_SECONDS";
const ENV_AUTH_TYPE: &str = "NETACL_AUTH_TYPE";
const ENV_BEARER_TOKEN: &str = "NETACL_BEARER_TOKEN";

/// Load configuration with automatic fallback strategy.
///
/// # Errors
/// Returns `NetAclError::Config` if the environment or a discovered config
/// file is present but invalid.
pub fn load() -> Result<ClientConfig> {
    dotenvy::dotenv().ok();

    if env_present() {
        let config = load_from_env()?;
        tracing::debug!("configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration from file");
            load_from_file(Some(path))
        }
        None => {
            tracing::debug!("no configuration found, using defaults");
            Ok(ClientConfig::default())
        }
    }
}

/// Load configuration from environment variables.
///
/// Unset variables take their defaults; present-but-invalid values are
/// errors.
///
/// # Errors
/// Returns `NetAclError::Config` for an invalid URL or timeout, an unknown
/// auth type, or a `bearer` auth type without a token.
pub fn load_from_env() -> Result<ClientConfig> {
    let service_url = std::env::var(ENV_SERVICE_URL)
        .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
    let service_url = normalize_service_url(&service_url)?;

    let timeout_seconds = match std::env::var(ENV_TIMEOUT_SECONDS) {
        Ok(raw) => raw.parse::<u64>().map_err(|e| {
            NetAclError::Config(format!("Invalid {ENV_TIMEOUT_SECONDS}: {e}"))
        })?,
        Err(_) => ClientConfig::default().timeout_seconds,
    };

    let auth = match std::env::var(ENV_AUTH_TYPE).as_deref() {
        Err(_) | Ok("none") => AuthConfig::None,
        Ok("bearer") => {
            let token = std::env::var(ENV_BEARER_TOKEN).map_err(|_| {
                NetAclError::Config(format!(
                    "{ENV_BEARER_TOKEN} is required when {ENV_AUTH_TYPE}=bearer"
                ))
            })?;
            AuthConfig::Bearer { token }
        }
        Ok(other) => {
            return Err(NetAclError::Config(format!(
                "Unknown {ENV_AUTH_TYPE} `{other}` (expected `none` or `bearer`)"
            )));
        }
    };

    Ok(ClientConfig { service_url, timeout_seconds, auth })
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations. Supports TOML and
/// JSON, detected by file extension.
///
/// # Errors
/// Returns `NetAclError::Config` if the file is missing, unreadable, or
/// invalid.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(NetAclError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            NetAclError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| NetAclError::Config(format!("Failed to read config file: {e}")))?;

    let mut config = parse_config(&contents, &config_path)?;
    config.service_url = normalize_service_url(&config.service_url)?;
    Ok(config)
}

/// Probe the standard locations for a configuration file.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let candidates = [
        cwd.join("netacl.toml"),
        cwd.join("netacl.json"),
        cwd.join("../netacl.toml"),
        cwd.join("../netacl.json"),
    ];

    candidates.into_iter().find(|path| path.exists())
}

/// Parse configuration from string content; format is detected by extension.
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| NetAclError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| NetAclError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(NetAclError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Validate a service URL and strip any trailing slash.
///
/// # Errors
/// Returns `NetAclError::Config` for unparsable URLs or non-HTTP schemes.
pub(crate) fn normalize_service_url(service_url: &str) -> Result<String> {
    let parsed = Url::parse(service_url)
        .map_err(|e| NetAclError::Config(format!("Invalid service URL `{service_url}`: {e}")))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(NetAclError::Config(format!(
            "Invalid service URL `{service_url}`: expected http or https"
        )));
    }

    Ok(service_url.trim_end_matches('/').to_string())
}

fn env_present() -> bool {
    [ENV_SERVICE_URL, ENV_TIMEOUT_SECONDS, ENV_AUTH_TYPE, ENV_BEARER_TOKEN]
        .iter()
        .any(|key| std::env::var_os(key).is_some())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        for key in [ENV_SERVICE_URL, ENV_TIMEOUT_SECONDS, ENV_AUTH_TYPE, ENV_BEARER_TOKEN] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn load_from_env_with_bearer_auth() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_SERVICE_URL, "https://stub.local/");
        std::env::set_var(ENV_TIMEOUT_SECONDS, "10");
        std::env::set_var(ENV_AUTH_TYPE, "bearer");
        std::env::set_var(ENV_BEARER_TOKEN, "secret");

        let config = load_from_env().expect("should load");
        assert_eq!(config.service_url, "https://stub.local");
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.auth, AuthConfig::Bearer { token: "secret".to_string() });

        clear_env();
    }

    #[test]
    fn load_from_env_defaults_when_unset() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let config = load_from_env().expect("should load");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn bearer_auth_without_token_is_rejected() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_AUTH_TYPE, "bearer");

        let err = load_from_env().expect_err("missing token must fail");
        assert!(matches!(err, NetAclError::Config(_)));

        clear_env();
    }

    #[test]
    fn unknown_auth_type_is_rejected() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_AUTH_TYPE, "kerberos");

        let err = load_from_env().expect_err("unknown auth type must fail");
        assert!(matches!(err, NetAclError::Config(_)));

        clear_env();
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_TIMEOUT_SECONDS, "not-a-number");

        let err = load_from_env().expect_err("invalid timeout must fail");
        assert!(matches!(err, NetAclError::Config(_)));

        clear_env();
    }

    #[test]
    fn normalize_rejects_non_http_schemes() {
        let err = normalize_service_url("ftp://stub.local").expect_err("ftp must be rejected");
        assert!(matches!(err, NetAclError::Config(_)));
    }

    #[test]
    fn normalize_strips_trailing_slash() {
        let url = normalize_service_url("https://stub.local/").expect("valid url");
        assert_eq!(url, "https://stub.local");
    }

    #[test]
    fn parse_config_toml() {
        let contents = r#"
service_url = "https://stub.local"
timeout_seconds = 15

[auth]
type = "bearer"
token = "secret"
"#;

        let config = parse_config(contents, Path::new("netacl.toml")).expect("should parse");
        assert_eq!(config.timeout_seconds, 15);
        assert_eq!(config.auth, AuthConfig::Bearer { token: "secret".to_string() });
    }

    #[test]
    fn parse_config_json() {
        let contents = r#"{"service_url": "https://stub.local"}"#;

        let config = parse_config(contents, Path::new("netacl.json")).expect("should parse");
        assert_eq!(config.service_url, "https://stub.local");
        assert_eq!(config.auth, AuthConfig::None);
    }

    #[test]
    fn parse_config_unsupported_format() {
        let result = parse_config("service_url: x", Path::new("netacl.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
