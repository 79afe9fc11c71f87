//! PostgreSQL connection manager

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Connection;
use thiserror::Error;
use tracing::{info, warn};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// How hard to try before giving up on the database at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of open-and-ping attempts
    pub attempts: u32,
    /// Pause between two attempts
    pub backoff: Duration,
    /// Overall deadline covering every attempt and pause
    pub budget: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff: Duration::from_secs(2),
            budget: Duration::from_secs(20),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("failed to connect to PostgreSQL after {attempts} attempt(s)")]
    Exhausted {
        attempts: u32,
        #[source]
        source: Option<sqlx::Error>,
    },
    #[error("failed to connect to PostgreSQL within {}s", .0.as_secs())]
    BudgetExceeded(Duration),
}

/// Owned handle on the connection pool
#[derive(Debug, Clone)]
pub struct PgClient {
    pool: PgPool,
}

impl PgClient {
    /// Open the pool and verify it with a ping, retrying per `policy`
    ///
    /// An error here means the service cannot run; callers are expected to
    /// stop the process.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        policy: RetryPolicy,
    ) -> Result<Self, ConnectError> {
        let attempts = async {
            let mut last_error = None;
            for attempt in 1..=policy.attempts {
                match Self::open(database_url, max_connections).await {
                    Ok(client) => {
                        info!(attempt, "Successfully connected to PostgreSQL database");
                        return Ok(client);
                    }
                    Err(e) => {
                        warn!(
                            attempt,
                            max_attempts = policy.attempts,
                            error = %e,
                            "Unable to connect to PostgreSQL database"
                        );
                        last_error = Some(e);
                        if attempt < policy.attempts {
                            tokio::time::sleep(policy.backoff).await;
                        }
                    }
                }
            }
            Err(ConnectError::Exhausted {
                attempts: policy.attempts,
                source: last_error,
            })
        };

        tokio::time::timeout(policy.budget, attempts)
            .await
            .map_err(|_| ConnectError::BudgetExceeded(policy.budget))?
    }

    async fn open(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect_lazy(database_url)?;
        let client = Self { pool };
        client.ping().await?;
        Ok(client)
    }

    /// Round-trip to the server on one pooled connection
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await
    }

    /// Close every pooled connection; later calls are no-ops
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
