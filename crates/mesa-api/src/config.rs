//! Server configuration
//!
//! Everything comes from the environment: port, database path, the admin
//! token, the restaurant identity the emails speak for, and the optional
//! mail provider credentials. A missing provider key is not an error - it
//! selects the no-op transport and the server runs without outbound email.

use mesa_core::errors::{MesaError, Result};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (`MESA_PORT`, default 3000)
    pub port: u16,

    /// SQLite database path (`MESA_DB`, default `mesa.db`)
    pub database_path: PathBuf,

    /// Shared secret for the admin endpoints (`MESA_ADMIN_TOKEN`)
    pub admin_token: String,

    /// Restaurant name used in email subjects (`MESA_RESTAURANT_NAME`)
    pub restaurant_name: String,

    /// Address receiving new-reservation notifications (`MESA_OPERATOR_EMAIL`)
    pub operator_email: String,

    /// Verified sender address (`MESA_FROM_EMAIL`)
    pub from_email: String,

    /// Mail provider key (`SENDGRID_API_KEY`); absent disables dispatch
    pub sendgrid_api_key: Option<String>,

    /// Mail provider base URL override (`SENDGRID_API_BASE`)
    pub sendgrid_api_base: Option<String>,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: parse_or("MESA_PORT", 3000)?,
            database_path: env::var("MESA_DB")
                .unwrap_or_else(|_| "mesa.db".to_string())
                .into(),
            admin_token: required("MESA_ADMIN_TOKEN")?,
            restaurant_name: required("MESA_RESTAURANT_NAME")?,
            operator_email: required("MESA_OPERATOR_EMAIL")?,
            from_email: required("MESA_FROM_EMAIL")?,
            sendgrid_api_key: optional("SENDGRID_API_KEY"),
            sendgrid_api_base: optional("SENDGRID_API_BASE"),
        })
    }
}

/// Read a required variable; empty counts as unset
fn required(key: &str) -> Result<String> {
    match optional(key) {
        Some(value) => Ok(value),
        None => Err(MesaError::Config {
            message: format!("{} is not set", key),
        }),
    }
}

/// Read an optional variable, trimming and dropping empty values
fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read and parse a variable, falling back to a default when unset
fn parse_or<T: FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: Display,
{
    match optional(key) {
        None => {
            info!("{} not set, using default", key);
            Ok(default)
        }
        Some(raw) => raw.parse().map_err(|e| MesaError::Config {
            message: format!("Invalid {} value {:?}: {}", key, raw, e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names: the process environment is
    // shared across the test harness's threads.

    #[test]
    fn test_required_missing_is_a_config_error() {
        let err = required("MESA_TEST_UNSET_VAR").unwrap_err();
        assert!(matches!(err, MesaError::Config { .. }));
    }

    #[test]
    fn test_optional_trims_and_drops_empty() {
        env::set_var("MESA_TEST_OPTIONAL_BLANK", "   ");
        assert_eq!(optional("MESA_TEST_OPTIONAL_BLANK"), None);

        env::set_var("MESA_TEST_OPTIONAL_SET", "  value  ");
        assert_eq!(
            optional("MESA_TEST_OPTIONAL_SET"),
            Some("value".to_string())
        );
    }

    #[test]
    fn test_parse_or_default_and_invalid() {
        let port: u16 = parse_or("MESA_TEST_PORT_UNSET", 3000).unwrap();
        assert_eq!(port, 3000);

        env::set_var("MESA_TEST_PORT_BAD", "not-a-port");
        let err = parse_or::<u16>("MESA_TEST_PORT_BAD", 3000).unwrap_err();
        assert!(matches!(err, MesaError::Config { .. }));
    }
}
