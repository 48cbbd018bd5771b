//! Environment-driven server configuration.

use std::net::SocketAddr;

use thiserror::Error;

/// Environment variable holding the bind address.
pub const ADDR_VAR: &str = "DEPOT_ADDR";
/// Environment variable toggling debug logging.
pub const DEBUG_VAR: &str = "DEPOT_DEBUG";

const DEFAULT_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {value:?} is not a socket address")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: expected `true` or `false`, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub debug: bool,
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        let debug = match lookup(DEBUG_VAR) {
            None => false,
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                var: DEBUG_VAR,
                value: raw,
            })?,
        };

        Ok(Self { bind_addr, debug })
    }

    /// Default tracing directive when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
        assert!(!config.debug);
        assert_eq!(config.log_directive(), "info");
    }

    #[test]
    fn reads_address_and_debug_flag() {
        let config = config_from(&[(ADDR_VAR, "127.0.0.1:8081"), (DEBUG_VAR, "TRUE")]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8081".parse::<SocketAddr>().unwrap());
        assert!(config.debug);
        assert_eq!(config.log_directive(), "debug");
    }

    #[test]
    fn rejects_malformed_address() {
        let err = config_from(&[(ADDR_VAR, "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));
    }

    #[test]
    fn rejects_unknown_flag_value() {
        let err = config_from(&[(DEBUG_VAR, "yes")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "DEPOT_DEBUG: expected `true` or `false`, got \"yes\""
        );
    }
}
