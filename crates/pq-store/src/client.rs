//! # Key-Value Client
//!
//! Thin client seam over the Redis connection. The store talks to the trait,
//! so tests can swap in an in-memory fake without touching the network.

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client};

use crate::config::{CONNECT_TIMEOUT, RedisConfig};
use crate::error::Result;

/// Minimal key-value operations the persisted-query store needs.
///
/// Return types mirror the native Redis replies: `set` reports the server's
/// success indicator, `exists` is an existence count rather than a boolean.
#[async_trait]
pub trait KeyValueClient: Send + Sync {
    /// `SET key value`
    async fn set(&self, key: &str, value: &str) -> Result<bool>;

    /// `GET key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// `EXISTS key`
    async fn exists(&self, key: &str) -> Result<i64>;

    /// `FLUSHDB` on the selected database
    async fn flushdb(&self) -> Result<bool>;
}

/// Redis-backed client over a multiplexed connection manager.
#[derive(Clone)]
pub struct RedisKeyValueClient {
    conn: ConnectionManager,
}

impl RedisKeyValueClient {
    /// Open a connection to the configured Redis database.
    ///
    /// The connection string is built from host, port, and database with an
    /// empty password; the fixed [`CONNECT_TIMEOUT`] applies to the initial
    /// dial. The handle lives for the process's lifetime and is never
    /// explicitly closed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`](crate::StoreError::Redis) when the
    /// connection cannot be established.
    pub async fn connect(config: &RedisConfig) -> Result<Self> {
        let url = format!(
            "redis://{}:{}/{}",
            config.host, config.port, config.database
        );

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = config.database,
            "Connecting to Redis for persisted queries"
        );

        let client = Client::open(url.as_str())?;
        let manager_config = ConnectionManagerConfig::new().set_connection_timeout(CONNECT_TIMEOUT);
        let conn = ConnectionManager::new_with_config(client, manager_config).await?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl KeyValueClient for RedisKeyValueClient {
    async fn set(&self, key: &str, value: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let ok: bool = conn.set(key, value).await?;
        Ok(ok)
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn exists(&self, key: &str) -> Result<i64> {
        let mut conn = self.conn.clone();
        let count: i64 = conn.exists(key).await?;
        Ok(count)
    }

    async fn flushdb(&self) -> Result<bool> {
        let mut conn = self.conn.clone();
        let ok: bool = redis::cmd("FLUSHDB").query_async(&mut conn).await?;
        Ok(ok)
    }
}
