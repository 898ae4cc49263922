//! # Persisted Query Store
//!
//! Narrow key-value interface for persisted GraphQL queries, pre-validated
//! against the host's deployment configuration.
//!
//! Query records live at `key = hash`; the advisory TTL value for a hash
//! lives at `key = {hash}_ttl`. The suffix is part of the observable
//! contract: collaborators reading the store directly rely on it. The two
//! records are independent keys with no transactional linkage.

use std::future::Future;

use crate::client::{KeyValueClient, RedisKeyValueClient};
use crate::config::{DeploymentConfig, RedisConfig, resolve_cache_config};
use crate::error::{Result, StoreError};

/// Key suffix for TTL records.
pub const TTL_KEY_SUFFIX: &str = "_ttl";

/// Store for persisted GraphQL queries, keyed by query hash.
///
/// Owns one client handle for its lifetime. All operations are single
/// delegations to the underlying store; I/O failures propagate unmodified,
/// with no retries and no per-call timeouts.
pub struct PersistedQueryStore<C: KeyValueClient> {
    client: C,
}

impl<C: KeyValueClient> PersistedQueryStore<C> {
    /// Build a store from deployment configuration and a client factory.
    ///
    /// Resolves the `cache/persisted-query` section, substituting default
    /// connection parameters when the `redis` sub-map is absent, then hands
    /// the resolved [`RedisConfig`] to `factory` to construct the client.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotConfigured`] when the configuration section
    /// is absent while the host application reports itself operational. A
    /// bootstrapping host (not yet available) is allowed to proceed on
    /// defaults. The check runs before the factory so a misconfigured host
    /// never dials a defaulted address just to fail afterwards.
    pub async fn initialize<F, Fut>(provider: &dyn DeploymentConfig, factory: F) -> Result<Self>
    where
        F: FnOnce(RedisConfig) -> Fut,
        Fut: Future<Output = Result<C>>,
    {
        let resolved = resolve_cache_config(provider)?;

        if !resolved.configured && provider.is_available() {
            return Err(StoreError::NotConfigured);
        }

        let client = factory(resolved.redis).await?;
        Ok(Self { client })
    }

    /// Store a query string under its hash. `SET hash query`.
    ///
    /// No validation of hash format or query size is performed.
    ///
    /// # Errors
    ///
    /// Propagates the underlying store error.
    pub async fn put(&self, hash: &str, query: &str) -> Result<bool> {
        self.client.set(hash, query).await
    }

    /// Fetch the query string for a hash, `None` when absent.
    ///
    /// # Errors
    ///
    /// Propagates the underlying store error.
    pub async fn get(&self, hash: &str) -> Result<Option<String>> {
        self.client.get(hash).await
    }

    /// Existence count for a hash: 0 or 1, the native Redis reply.
    ///
    /// # Errors
    ///
    /// Propagates the underlying store error.
    pub async fn exists(&self, hash: &str) -> Result<i64> {
        self.client.exists(hash).await
    }

    /// Record the intended time-to-live for a hash, in seconds.
    ///
    /// Stored as ordinary data at `{hash}_ttl`; the native key-expiry
    /// mechanism is not used, so nothing removes the query record when the
    /// TTL elapses.
    ///
    /// # Errors
    ///
    /// Propagates the underlying store error.
    pub async fn put_ttl(&self, hash: &str, ttl: u64) -> Result<bool> {
        let key = format!("{hash}{TTL_KEY_SUFFIX}");
        self.client.set(&key, &ttl.to_string()).await
    }

    /// Fetch the recorded TTL value for a hash, `None` when absent.
    ///
    /// # Errors
    ///
    /// Propagates the underlying store error.
    pub async fn get_ttl(&self, hash: &str) -> Result<Option<String>> {
        let key = format!("{hash}{TTL_KEY_SUFFIX}");
        self.client.get(&key).await
    }

    /// Clear every key in the selected database.
    ///
    /// Irreversible, and not scoped to persisted queries: anything else
    /// sharing the database is removed too.
    ///
    /// # Errors
    ///
    /// Propagates the underlying store error.
    pub async fn flush(&self) -> Result<bool> {
        tracing::warn!("Flushing persisted-query database");
        self.client.flushdb().await
    }
}

impl PersistedQueryStore<RedisKeyValueClient> {
    /// Build a Redis-backed store from deployment configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotConfigured`] for an operational host without
    /// configuration, or [`StoreError::Redis`](crate::StoreError::Redis)
    /// when the connection cannot be established.
    pub async fn connect(provider: &dyn DeploymentConfig) -> Result<Self> {
        Self::initialize(provider, |config| async move {
            RedisKeyValueClient::connect(&config).await
        })
        .await
    }
}
