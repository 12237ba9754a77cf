//! Server configuration from environment variables.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "SARVIEW_ADDR";

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SARVIEW_ADDR '{value}': {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(ADDR_VAR).ok();
        if value.is_none() {
            tracing::debug!("{ADDR_VAR} not set, using {DEFAULT_ADDR}");
        }
        Self::parse(value.as_deref())
    }

    fn parse(addr: Option<&str>) -> Result<Self, ConfigError> {
        let value = addr.map_or(DEFAULT_ADDR, str::trim);
        let addr = value.parse().map_err(|source| ConfigError::InvalidAddr {
            value: value.to_string(),
            source,
        })?;
        Ok(Self { addr })
    }
}
