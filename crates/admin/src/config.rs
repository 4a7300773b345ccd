//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CAFE_HOST` - Bind address (default: 127.0.0.1)
//! - `CAFE_PORT` - Listen port (default: 3000)
//! - `CAFE_SEED_FILE` - YAML file with seed orders and menu items (default: built-in seed)
//! - `CAFE_NOTIFICATION_LIMIT` - Maximum queued toasts (default: 20)
//! - `CAFE_LOG_FORMAT` - `text` or `json` (default: text)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 0.0)
//!
//! ## Optional (TLS)
//! - `CAFE_TLS_CERT` - PEM-encoded certificate chain
//! - `CAFE_TLS_KEY` - PEM-encoded private key

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_NOTIFICATION_LIMIT: usize = 20;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Seed file to load instead of the built-in seed
    pub seed_file: Option<PathBuf>,
    /// Maximum number of pending notifications kept for display
    pub notification_limit: usize,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
    /// TLS configuration for HTTPS (optional)
    pub tls: Option<TlsConfig>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            seed_file: None,
            notification_limit: DEFAULT_NOTIFICATION_LIMIT,
            log_format: LogFormat::Text,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
            tls: None,
        }
    }
}

/// TLS configuration for HTTPS.
#[derive(Clone)]
pub struct TlsConfig {
    /// PEM-encoded certificate chain
    pub cert_pem: String,
    /// PEM-encoded private key
    pub key_pem: SecretString,
}

impl std::fmt::Debug for TlsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsConfig")
            .field("cert_pem", &"[CERTIFICATE]")
            .field("key_pem", &"[REDACTED]")
            .finish()
    }
}

impl TlsConfig {
    fn from_vars(vars: &impl Fn(&str) -> Option<String>) -> Result<Option<Self>, ConfigError> {
        match (vars("CAFE_TLS_CERT"), vars("CAFE_TLS_KEY")) {
            (Some(cert), Some(key)) => Ok(Some(Self {
                cert_pem: cert,
                key_pem: SecretString::from(key),
            })),
            (None, None) => Ok(None),
            _ => Err(ConfigError::InvalidEnvVar(
                "CAFE_TLS_*".to_string(),
                "Both CAFE_TLS_CERT and CAFE_TLS_KEY must be set together".to_string(),
            )),
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_vars(vars: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = or_default(&vars, "CAFE_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CAFE_HOST".to_string(), e.to_string()))?;
        let port = or_default(&vars, "CAFE_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CAFE_PORT".to_string(), e.to_string()))?;
        let seed_file = vars("CAFE_SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let notification_limit = match vars("CAFE_NOTIFICATION_LIMIT") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidEnvVar(
                        "CAFE_NOTIFICATION_LIMIT".to_string(),
                        "must be at least 1".to_string(),
                    ));
                }
                Ok(limit) => limit,
                Err(e) => {
                    return Err(ConfigError::InvalidEnvVar(
                        "CAFE_NOTIFICATION_LIMIT".to_string(),
                        e.to_string(),
                    ));
                }
            },
            None => DEFAULT_NOTIFICATION_LIMIT,
        };

        let log_format = match or_default(&vars, "CAFE_LOG_FORMAT", "text")
            .to_ascii_lowercase()
            .as_str()
        {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "CAFE_LOG_FORMAT".to_string(),
                    format!("expected 'text' or 'json', got '{other}'"),
                ));
            }
        };

        let sentry_dsn = vars("SENTRY_DSN");
        let sentry_environment = vars("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = vars("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = vars("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.0);
        let tls = TlsConfig::from_vars(&vars)?;

        Ok(Self {
            host,
            port,
            seed_file,
            notification_limit,
            log_format,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
            tls,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a variable with a default value.
fn or_default(vars: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    vars(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<AdminConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AdminConfig::from_vars(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.notification_limit, 20);
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.seed_file.is_none());
        assert!(config.tls.is_none());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("CAFE_HOST", "0.0.0.0"),
            ("CAFE_PORT", "8080"),
            ("CAFE_SEED_FILE", "seed/demo.yaml"),
            ("CAFE_NOTIFICATION_LIMIT", "5"),
            ("CAFE_LOG_FORMAT", "JSON"),
            ("SENTRY_SAMPLE_RATE", "0.5"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.seed_file, Some(PathBuf::from("seed/demo.yaml")));
        assert_eq!(config.notification_limit, 5);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!((config.sentry_sample_rate - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("CAFE_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "CAFE_PORT"));
    }

    #[test]
    fn test_zero_notification_limit_rejected() {
        assert!(load(&[("CAFE_NOTIFICATION_LIMIT", "0")]).is_err());
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        assert!(load(&[("CAFE_LOG_FORMAT", "xml")]).is_err());
    }

    #[test]
    fn test_tls_requires_both_halves() {
        assert!(load(&[("CAFE_TLS_CERT", "cert")]).is_err());
        let config = load(&[("CAFE_TLS_CERT", "cert"), ("CAFE_TLS_KEY", "key")]).unwrap();
        let tls = config.tls.unwrap();
        assert_eq!(tls.key_pem.expose_secret(), "key");
    }

    #[test]
    fn test_tls_debug_redacts_key() {
        let tls = TlsConfig {
            cert_pem: "-----BEGIN CERTIFICATE-----".to_string(),
            key_pem: SecretString::from("super_secret_private_key"),
        };
        let debug_output = format!("{tls:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_private_key"));
    }
}
