//! Database configuration read from the process environment.

use crate::todo::adapters::postgres::TodoPgPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "TODO_DATABASE_URL";
/// Environment variable overriding the pool size.
pub const MAX_CONNECTIONS_VAR: &str = "TODO_DATABASE_MAX_CONNECTIONS";
/// Environment variable overriding the connection timeout, in seconds.
pub const CONNECT_TIMEOUT_VAR: &str = "TODO_DATABASE_CONNECT_TIMEOUT_SECS";

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while loading configuration or building the pool.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required setting {0}")]
    MissingVar(&'static str),

    /// A variable holds a value that cannot be parsed.
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidVar {
        /// Variable name.
        name: &'static str,
        /// Rejected raw value.
        value: String,
        /// Parse failure description.
        reason: String,
    },

    /// The connection pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

/// Connection settings for the `PostgreSQL` store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    url: String,
    max_connections: u32,
    connect_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a configuration with default pool settings.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Sets the maximum pool size.
    #[must_use]
    pub const fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Sets the connection checkout timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// See [`DatabaseConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads settings through `lookup`, which returns a variable's value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when [`DATABASE_URL_VAR`] is unset
    /// or blank, and [`ConfigError::InvalidVar`] when a numeric override is
    /// not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(DATABASE_URL_VAR)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVar(DATABASE_URL_VAR))?;

        let mut config = Self::new(url);
        if let Some(raw) = lookup(MAX_CONNECTIONS_VAR) {
            let max_connections = parse_positive::<u32>(MAX_CONNECTIONS_VAR, &raw)?;
            config = config.with_max_connections(max_connections);
        }
        if let Some(raw) = lookup(CONNECT_TIMEOUT_VAR) {
            let secs = parse_positive::<u64>(CONNECT_TIMEOUT_VAR, &raw)?;
            config = config.with_connect_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Returns the connection URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the maximum pool size.
    #[must_use]
    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }

    /// Returns the connection checkout timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Builds an r2d2 pool for the `PostgreSQL` store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when the pool cannot establish its
    /// initial connections.
    pub fn build_pool(&self) -> Result<TodoPgPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(self.url.as_str());
        let pool = Pool::builder()
            .max_size(self.max_connections)
            .connection_timeout(self.connect_timeout)
            .build(manager)?;
        Ok(pool)
    }
}

fn parse_positive<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
    T::Err: std::fmt::Display,
{
    let invalid = |reason: String| ConfigError::InvalidVar {
        name,
        value: raw.to_owned(),
        reason,
    };
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|err| invalid(err.to_string()))?;
    if value <= T::default() {
        return Err(invalid("must be greater than zero".to_owned()));
    }
    Ok(value)
}
