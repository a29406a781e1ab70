//! Application configuration module
//!
//! Provides the server configuration, a builder for assembling it in code
//! and a loader that reads it from environment variables.
//!
//! # Environment
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | `sqlite://upvote.db` |
//! | `SERVER_HOST` | `0.0.0.0` |
//! | `SERVER_PORT` | `8000` |
//! | `DATABASE_MAX_CONNECTIONS` | `5` |

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://upvote.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite connection URL
    pub database_url: String,
    /// Address to bind the HTTP listener to
    pub host: String,
    pub port: u16,
    /// Pool size for file-backed databases
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load the configuration from environment variables
    ///
    /// Unset or empty variables fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();

        if let Some(url) = env_value("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(host) = env_value("SERVER_HOST") {
            builder = builder.host(host);
        }
        if let Some(port) = env_value("SERVER_PORT") {
            let port = port.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: port,
            })?;
            builder = builder.port(port);
        }
        if let Some(max) = env_value("DATABASE_MAX_CONNECTIONS") {
            let max = max.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                key: "DATABASE_MAX_CONNECTIONS",
                value: max,
            })?;
            builder = builder.max_connections(max);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.database_url.starts_with("sqlite:") {
            return Err(ConfigError::InvalidUrl(self.database_url.clone()));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_MAX_CONNECTIONS",
                value: self.max_connections.to_string(),
            });
        }
        self.bind_address()?;
        Ok(())
    }

    /// Socket address the server listens on
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Whether the database lives only in memory
    ///
    /// In-memory databases vanish with their last connection, so the pool
    /// must keep exactly one connection open.
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    max_connections: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listen host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the pool size
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = Some(max);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            max_connections: self.max_connections.unwrap_or(defaults.max_connections),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid database URL: {0} (expected a sqlite: URL)")]
    InvalidUrl(String),
    #[error("invalid listen host: {0}")]
    InvalidHost(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

fn env_value(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => {
            tracing::debug!("{key} not set, using default");
            None
        }
    }
}
