//! HTTP server command
//!
//! Builds the store and application state, then runs the file API until
//! shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use codevault_server::{
    run_server, AppState, ConnectionManager, MemoryFileStore, PgFileStore, ServerConfig,
};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030, or CODEVAULT_BIND)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// PostgreSQL connection string (overrides DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections (default: 5, or CODEVAULT_MAX_CONNECTIONS)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_connections: Option<u32>,

    /// Keep files in memory instead of PostgreSQL (lost on exit)
    #[arg(long, conflicts_with = "database_url")]
    pub memory: bool,
}

impl ServeArgs {
    /// Layer command-line flags over environment configuration
    fn resolve(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(url) = &self.database_url {
            config.database_url = Some(url.clone());
        }
        if let Some(max) = self.max_connections {
            config.max_connections = max;
        }
        config
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let env_config = ServerConfig::from_env().context("Invalid server configuration")?;
    let config = args.resolve(env_config);

    let state = if args.memory {
        tracing::warn!("Using in-memory store; files are lost on exit");
        AppState::new(MemoryFileStore::new())
    } else {
        if config.database_url.is_none() {
            // Surfaced per request rather than at startup
            tracing::warn!(
                "DATABASE_URL not set; file requests will fail until it is configured"
            );
        }
        let connections = ConnectionManager::new(config.database_url.clone())
            .with_max_connections(config.max_connections);
        AppState::new(PgFileStore::new(connections))
    };

    tracing::info!("Starting codevault server on {}", config.bind_addr);

    run_server(state, config.bind_addr)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServeArgs {
        ServeArgs::try_parse_from(std::iter::once("serve").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn flags_override_environment() {
        let env = ServerConfig {
            database_url: Some("postgres://env/db".into()),
            ..ServerConfig::default()
        };

        let config = parse(&[
            "--bind",
            "0.0.0.0:9000",
            "--database-url",
            "postgres://flag/db",
            "--max-connections",
            "3",
        ])
        .resolve(env);

        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.database_url.as_deref(), Some("postgres://flag/db"));
        assert_eq!(config.max_connections, 3);
    }

    #[test]
    fn unset_flags_keep_environment() {
        let env = ServerConfig {
            max_connections: 9,
            ..ServerConfig::default()
        };

        let config = parse(&[]).resolve(env.clone());
        assert_eq!(config, env);
    }

    #[test]
    fn memory_conflicts_with_database_url() {
        let result = ServeArgs::try_parse_from(["serve", "--memory", "--database-url", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn zero_connections_rejected() {
        let result = ServeArgs::try_parse_from(["serve", "--max-connections", "0"]);
        assert!(result.is_err());
    }
}
