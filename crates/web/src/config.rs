//! Tracker configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `REDLINE_SALES_CSV_URL` - CSV export URL of the shared sales ledger sheet
//! - `REDLINE_USERS_CSV_URL` - CSV export URL of the users (password) sheet
//!
//! ## Optional
//! - `REDLINE_MASTER_PASSWORD` - Master password unlocking the full-ledger
//!   view (unset or empty disables it)
//! - `REDLINE_HOST` - Bind address (default: 127.0.0.1)
//! - `REDLINE_PORT` - Listen port (default: 3000)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Tracker application configuration.
///
/// Passed explicitly into the components that need it; nothing reads the
/// environment after startup, so tests run against fixture values.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Sheet export endpoints
    pub sheets: SheetSourceConfig,
    /// Master password unlocking the full-ledger view
    pub master_password: Option<SecretString>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Endpoints of the two sheet CSV exports.
#[derive(Debug, Clone)]
pub struct SheetSourceConfig {
    /// CSV export URL of the sales ledger sheet
    pub sales_url: String,
    /// CSV export URL of the users sheet
    pub users_url: String,
}

impl TrackerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("REDLINE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("REDLINE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("REDLINE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("REDLINE_PORT".to_string(), e.to_string()))?;

        let sheets = SheetSourceConfig::from_env()?;
        let master_password = master_password_from(get_optional_env("REDLINE_MASTER_PASSWORD"));
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            sheets,
            master_password,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl SheetSourceConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            sales_url: get_sheet_url("REDLINE_SALES_CSV_URL")?,
            users_url: get_sheet_url("REDLINE_USERS_CSV_URL")?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load and validate a sheet export URL.
fn get_sheet_url(key: &str) -> Result<String, ConfigError> {
    let value = get_required_env(key)?;
    validate_sheet_url(&value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e))?;
    Ok(value)
}

/// Validate that a value is an http(s) URL.
fn validate_sheet_url(value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{other}'")),
    }
}

/// Normalize the master password: an empty value disables the master login.
fn master_password_from(value: Option<String>) -> Option<SecretString> {
    value.filter(|v| !v.is_empty()).map(SecretString::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sheet_url_accepts_https() {
        assert!(validate_sheet_url("https://docs.google.com/spreadsheets/d/abc/export?format=csv").is_ok());
        assert!(validate_sheet_url("http://localhost:8000/sales.csv").is_ok());
    }

    #[test]
    fn test_validate_sheet_url_rejects_non_http() {
        assert!(validate_sheet_url("file:///tmp/sales.csv").is_err());
        assert!(validate_sheet_url("not a url").is_err());
    }

    #[test]
    fn test_master_password_empty_is_unset() {
        assert!(master_password_from(None).is_none());
        assert!(master_password_from(Some(String::new())).is_none());
        assert!(master_password_from(Some("root".into())).is_some());
    }

    #[test]
    fn test_socket_addr() {
        let config = TrackerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            sheets: SheetSourceConfig {
                sales_url: "https://example.com/sales.csv".to_string(),
                users_url: "https://example.com/users.csv".to_string(),
            },
            master_password: None,
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_config_debug_redacts_master_password() {
        let config = TrackerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            sheets: SheetSourceConfig {
                sales_url: "https://example.com/sales.csv".to_string(),
                users_url: "https://example.com/users.csv".to_string(),
            },
            master_password: master_password_from(Some("super-secret-master".into())),
            sentry_dsn: None,
        };

        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("super-secret-master"));
    }
}
