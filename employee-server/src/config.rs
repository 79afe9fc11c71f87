//! Server configuration

use std::time::Duration;

use crate::db::RetryPolicy;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration, read from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL (env: DATABASE_URL, legacy PGSQL_URL)
    pub database_url: String,
    /// HTTP port (env: HTTP_PORT, legacy FIBER_PORT)
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Upper bound for a single gateway call
    pub query_timeout: Duration,
    /// Pool size
    pub max_connections: u32,
    /// Connection attempts before giving up at startup
    pub connect_attempts: u32,
    /// Pause between connection attempts
    pub connect_backoff: Duration,
    /// Overall time allowed for connecting at startup
    pub connect_budget: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let number = |name: &str, default: u64| -> Result<u64, BoxError> {
            match var(name) {
                Some(raw) => raw
                    .parse()
                    .map_err(|e| format!("{name} must be a non-negative integer, got {raw:?}: {e}").into()),
                None => Ok(default),
            }
        };

        let database_url = var("DATABASE_URL")
            .or_else(|| var("PGSQL_URL"))
            .ok_or("DATABASE_URL must be set")?;

        let http_port = match var("HTTP_PORT").or_else(|| var("FIBER_PORT")) {
            Some(raw) => raw
                .parse()
                .map_err(|e| format!("HTTP_PORT must be a port number, got {raw:?}: {e}"))?,
            None => 8080,
        };

        Ok(Self {
            database_url,
            http_port,
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            query_timeout: Duration::from_secs(number("DB_QUERY_TIMEOUT_SECS", 10)?),
            max_connections: u32::try_from(number("DB_MAX_CONNECTIONS", 5)?)?,
            connect_attempts: u32::try_from(number("DB_CONNECT_ATTEMPTS", 3)?)?,
            connect_backoff: Duration::from_secs(number("DB_CONNECT_BACKOFF_SECS", 2)?),
            connect_budget: Duration::from_secs(number("DB_CONNECT_BUDGET_SECS", 20)?),
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.connect_attempts,
            backoff: self.connect_backoff,
            budget: self.connect_budget,
        }
    }
}
