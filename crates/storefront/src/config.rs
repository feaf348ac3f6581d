//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `COFFEE_SHOP_DATA_DIR` - Root directory for file-backed secure storage (default: .coffee-shop)
//! - `COFFEE_SHOP_SESSION_KEY` - Secure storage slot holding the signed-in user (default: user)
//! - `COFFEE_SHOP_DELIVERY_FEE` - Flat delivery fee in dollars (default: 1.00)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0 to 1.0 (default: 1.0)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use secrecy::SecretString;
use thiserror::Error;

use coffee_shop_core::Price;

use crate::session::keys;

const DEFAULT_DATA_DIR: &str = ".coffee-shop";
const DEFAULT_DELIVERY_FEE: &str = "1.00";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Root directory for file-backed secure storage
    pub data_dir: PathBuf,
    /// Secure storage slot holding the signed-in user
    pub session_key: String,
    /// Flat fee added to delivered orders
    pub delivery_fee: Price,
    /// Sentry error tracking configuration
    pub sentry: SentryConfig,
}

/// Sentry error tracking configuration.
///
/// Implements `Debug` manually to redact the DSN.
#[derive(Clone)]
pub struct SentryConfig {
    /// Sentry DSN (contains the project key)
    pub dsn: Option<SecretString>,
    /// Environment tag attached to events
    pub environment: Option<String>,
    /// Error event sample rate
    pub sample_rate: f32,
}

impl std::fmt::Debug for SentryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentryConfig")
            .field("dsn", &self.dsn.as_ref().map(|_| "[REDACTED]"))
            .field("environment", &self.environment)
            .field("sample_rate", &self.sample_rate)
            .finish()
    }
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: None,
            sample_rate: 1.0,
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            session_key: keys::CURRENT_USER.to_owned(),
            delivery_fee: Price::from_cents(100),
            sentry: SentryConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(get_or_default(&lookup, "COFFEE_SHOP_DATA_DIR", DEFAULT_DATA_DIR));

        let session_key = get_or_default(&lookup, "COFFEE_SHOP_SESSION_KEY", keys::CURRENT_USER);
        if session_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "COFFEE_SHOP_SESSION_KEY".to_string(),
                "cannot be empty".to_string(),
            ));
        }

        let fee: Decimal = parse_var(&lookup, "COFFEE_SHOP_DELIVERY_FEE", DEFAULT_DELIVERY_FEE)?;
        let delivery_fee = Price::usd(fee).map_err(|e| {
            ConfigError::InvalidEnvVar("COFFEE_SHOP_DELIVERY_FEE".to_string(), e.to_string())
        })?;

        let sentry = SentryConfig::from_lookup(&lookup)?;

        Ok(Self {
            data_dir,
            session_key,
            delivery_fee,
            sentry,
        })
    }
}

impl SentryConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let sample_rate: f32 = parse_var(lookup, "SENTRY_SAMPLE_RATE", "1.0")?;
        if !(0.0..=1.0).contains(&sample_rate) {
            return Err(ConfigError::InvalidEnvVar(
                "SENTRY_SAMPLE_RATE".to_string(),
                format!("must be between 0.0 and 1.0 (got {sample_rate})"),
            ));
        }

        Ok(Self {
            dsn: get_optional(lookup, "SENTRY_DSN").map(SecretString::from),
            environment: get_optional(lookup, "SENTRY_ENVIRONMENT"),
            sample_rate,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating blank values as unset.
fn get_optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional(lookup, key).unwrap_or_else(|| default.to_string())
}

/// Parse a variable (or its default) into `T`.
fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_or_default(lookup, key, default)
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(".coffee-shop"));
        assert_eq!(config.session_key, "user");
        assert_eq!(config.delivery_fee, Price::from_cents(100));
        assert!(config.sentry.dsn.is_none());
        assert!((config.sentry.sample_rate - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("COFFEE_SHOP_DATA_DIR", "/tmp/cs"),
            ("COFFEE_SHOP_SESSION_KEY", "session"),
            ("COFFEE_SHOP_DELIVERY_FEE", "2.50"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
            ("SENTRY_SAMPLE_RATE", "0.25"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/cs"));
        assert_eq!(config.session_key, "session");
        assert_eq!(config.delivery_fee.display(), "$2.50");
        assert_eq!(
            config.sentry.dsn.as_ref().unwrap().expose_secret(),
            "https://key@sentry.example/1"
        );
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config =
            StorefrontConfig::from_lookup(lookup(&[("COFFEE_SHOP_SESSION_KEY", "  ")])).unwrap();
        assert_eq!(config.session_key, "user");
    }

    #[test]
    fn test_negative_delivery_fee_rejected() {
        let result = StorefrontConfig::from_lookup(lookup(&[("COFFEE_SHOP_DELIVERY_FEE", "-1")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(key, _)) if key == "COFFEE_SHOP_DELIVERY_FEE"));
    }

    #[test]
    fn test_unparseable_delivery_fee_rejected() {
        let result = StorefrontConfig::from_lookup(lookup(&[("COFFEE_SHOP_DELIVERY_FEE", "free")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_sample_rate_out_of_range() {
        let result = StorefrontConfig::from_lookup(lookup(&[("SENTRY_SAMPLE_RATE", "1.5")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_sentry_config_debug_redacts_dsn() {
        let config = SentryConfig {
            dsn: Some(SecretString::from("https://super_secret_key@sentry.example/1")),
            environment: Some("staging".to_string()),
            sample_rate: 1.0,
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("staging"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_key"));
    }
}
