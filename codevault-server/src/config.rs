//! Server configuration loaded from the environment
//!
//! - `DATABASE_URL`: PostgreSQL connection string (checked on first store use)
//! - `CODEVAULT_BIND`: listen address (default: 127.0.0.1:3030)
//! - `CODEVAULT_MAX_CONNECTIONS`: pool size (default: 5)

use std::net::SocketAddr;

use crate::db::DEFAULT_MAX_CONNECTIONS;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const BIND_VAR: &str = "CODEVAULT_BIND";
pub const MAX_CONNECTIONS_VAR: &str = "CODEVAULT_MAX_CONNECTIONS";

/// Configuration error for malformed environment values
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {variable}: '{value}'")]
    Invalid { variable: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,

    /// Connection string. Absence is not an error here; requests that
    /// touch the store fail until it is provided.
    pub database_url: Option<String>,

    /// Maximum connections in the pool
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.database_url = lookup(DATABASE_URL_VAR).filter(|url| !url.trim().is_empty());

        if let Some(value) = lookup(BIND_VAR) {
            config.bind_addr = value.parse().map_err(|_| ConfigError::Invalid {
                variable: BIND_VAR,
                value,
            })?;
        }

        if let Some(value) = lookup(MAX_CONNECTIONS_VAR) {
            config.max_connections = match value.parse() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        variable: MAX_CONNECTIONS_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
