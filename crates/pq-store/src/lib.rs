//! # Persisted Query Store
//!
//! Redis-backed storage for persisted GraphQL queries in the storefront
//! platform: short query hashes map to full query text so clients can send a
//! hash instead of resending the query body.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               Host Application                   │
//! │        (deployment configuration source)         │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌─────────────────────────────────────────────────┐
//! │             PersistedQueryStore                  │
//! │   (config resolution + get/put/exists/flush)     │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌─────────────────────────────────────────────────┐
//! │          KeyValueClient trait seam               │
//! │     (RedisKeyValueClient, fakes in tests)        │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! Connection parameters come from the `cache/persisted-query` section of the
//! host's deployment configuration, with fallback defaults when the section
//! is absent. TTL values are stored as plain data next to the query record
//! (`{hash}_ttl`) and are not enforced by the store.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pq_store::{JsonDeploymentConfig, PersistedQueryStore};
//!
//! let provider = JsonDeploymentConfig::new(deployment_json, true);
//! let store = PersistedQueryStore::connect(&provider).await?;
//!
//! store.put("abc123", "{ products { sku } }").await?;
//! let query = store.get("abc123").await?;
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use client::{KeyValueClient, RedisKeyValueClient};
pub use config::{
    CONNECT_TIMEOUT, DeploymentConfig, JsonDeploymentConfig, PERSISTED_QUERY_CONFIG_PATH,
    RedisConfig, ResolvedCacheConfig, resolve_cache_config,
};
pub use error::{Result, StoreError};
pub use store::{PersistedQueryStore, TTL_KEY_SUFFIX};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
