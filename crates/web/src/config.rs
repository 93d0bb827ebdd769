//! Web application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults suit local development.
//!
//! - `WEB_HOST` - Bind address (default: 127.0.0.1)
//! - `WEB_PORT` - Listen port (default: 3000)
//! - `WEB_BASE_URL` - Public URL for the site (default: <http://localhost:3000>)
//! - `SENTRY_DSN` - Sentry error tracking DSN (error tracking disabled if unset)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Web application configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("WEB_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("WEB_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("WEB_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("WEB_PORT".to_owned(), e.to_string()))?;

        let base_url = get_env_or_default("WEB_BASE_URL", "http://localhost:3000");
        url::Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("WEB_BASE_URL".to_owned(), e.to_string()))?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
// set_var is unsafe in edition 2024; tests touch only uniquely-named vars
#[allow(clippy::unwrap_used, unsafe_code)]
mod tests {
    use super::*;

    // Env var tests use unique names to avoid races with parallel tests.

    #[test]
    fn test_get_env_or_default_set() {
        let key = "__TEST_RR_CONFIG_SET__";
        unsafe { std::env::set_var(key, "value") };
        assert_eq!(get_env_or_default(key, "default"), "value");
        unsafe { std::env::remove_var(key) };
    }

    #[test]
    fn test_get_env_or_default_unset() {
        assert_eq!(
            get_env_or_default("__TEST_RR_CONFIG_SURELY_UNSET__", "default"),
            "default"
        );
    }

    #[test]
    fn test_get_optional_env() {
        let key = "__TEST_RR_CONFIG_OPTIONAL__";
        assert_eq!(get_optional_env(key), None);
        unsafe { std::env::set_var(key, "dsn") };
        assert_eq!(get_optional_env(key), Some("dsn".to_owned()));
        unsafe { std::env::remove_var(key) };
    }

    #[test]
    fn test_socket_addr() {
        let config = WebConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_owned(),
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_invalid_host_rejected() {
        assert!("not-an-ip".parse::<IpAddr>().is_err());
    }

    #[test]
    fn test_base_url_must_parse() {
        assert!(url::Url::parse("http://localhost:3000").is_ok());
        assert!(url::Url::parse("not a url").is_err());
    }
}
