//! Startup configuration.
//!
//! Values come from command-line flags, falling back to environment variables
//! (a `.env` file is loaded first by `main`). The connection string has no
//! default: starting without one is a `ConfigError`.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

use crate::error::ConfigError;

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(about = "CRUD HTTP service for todos")]
#[command(version)]
pub struct Cli {
    /// Store connection string, e.g. sqlite://todos.db
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Address to listen on
    #[arg(long, env = "LISTEN_ADDR", default_value = "127.0.0.1:3000")]
    pub listen_addr: String,

    /// Upper bound on pooled store connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Serve /openapi.json and the Swagger UI page at /swagger
    #[arg(long, env = "API_DOCS")]
    pub api_docs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Resolved, immutable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub max_connections: u32,
    pub api_docs: bool,
    pub logging: LoggingConfig,
}

impl Config {
    /// The connection string with credentials and query parameters removed,
    /// safe to log.
    pub fn redacted_database_url(&self) -> String {
        redact_url(&self.database_url)
    }
}

fn redact_url(url: &str) -> String {
    let without_query = url.split('?').next().unwrap_or(url);
    match without_query.split_once("://") {
        Some((scheme, rest)) => match rest.rsplit_once('@') {
            Some((_, host)) => format!("{scheme}://***@{host}"),
            None => without_query.to_string(),
        },
        None => without_query.to_string(),
    }
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let database_url = cli
            .database_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingConnectionString)?;

        let listen_addr = cli
            .listen_addr
            .parse()
            .map_err(|_| ConfigError::InvalidListenAddr(cli.listen_addr.clone()))?;

        if cli.max_connections == 0 {
            return Err(ConfigError::ZeroConnections);
        }

        Ok(Self {
            database_url,
            listen_addr,
            max_connections: cli.max_connections,
            api_docs: cli.api_docs,
            logging: LoggingConfig {
                level: cli.log_level,
                format: cli.log_format,
            },
        })
    }
}
