//! # Deployment Configuration
//!
//! Resolution of the Redis connection parameters for the persisted-query
//! cache from the host application's deployment configuration.
//!
//! The store reads one section, at the fixed path [`PERSISTED_QUERY_CONFIG_PATH`],
//! with the expected shape:
//!
//! ```json
//! { "redis": { "host": "redis", "port": 6379, "scheme": "tcp", "database": 5 } }
//! ```
//!
//! When the `redis` sub-map is absent the full default configuration is
//! substituted wholesale; a present sub-map is honored as given.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Fixed key path of the persisted-query cache section.
pub const PERSISTED_QUERY_CONFIG_PATH: &str = "cache/persisted-query";

/// Fixed connect timeout applied when opening the Redis connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_HOST: &str = "redis";
const DEFAULT_PORT: u16 = 6379;
const DEFAULT_SCHEME: &str = "tcp";
const DEFAULT_DATABASE: i64 = 5;

/// Source of deployment configuration, read once at startup.
///
/// Implementations wrap whatever the host application uses for environment
/// configuration. [`is_available`](DeploymentConfig::is_available) reports
/// whether the host considers itself operational; during early bootstrap the
/// configuration is legitimately incomplete and the store must not fail on a
/// missing section.
pub trait DeploymentConfig: Send + Sync {
    /// Look up a configuration section by slash-separated key path.
    fn get(&self, path: &str) -> Option<Value>;

    /// Whether the host application reports itself operational.
    fn is_available(&self) -> bool;
}

/// Deployment configuration backed by a JSON mapping.
#[derive(Debug, Clone)]
pub struct JsonDeploymentConfig {
    root: Value,
    available: bool,
}

impl JsonDeploymentConfig {
    #[must_use]
    pub const fn new(root: Value, available: bool) -> Self {
        Self { root, available }
    }
}

impl DeploymentConfig for JsonDeploymentConfig {
    fn get(&self, path: &str) -> Option<Value> {
        let mut node = &self.root;
        for segment in path.split('/') {
            node = node.get(segment)?;
        }
        Some(node.clone())
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

/// Redis connection parameters for the persisted-query database.
///
/// `scheme` is recorded for fidelity with the deployment configuration shape
/// but does not participate in connection setup: the client is built from
/// host, port, and database only, with an empty password.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedisConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_scheme")]
    pub scheme: String,

    #[serde(default = "default_database")]
    pub database: i64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            scheme: DEFAULT_SCHEME.to_string(),
            database: DEFAULT_DATABASE,
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

const fn default_database() -> i64 {
    DEFAULT_DATABASE
}

/// Fully-resolved persisted-query cache configuration.
#[derive(Debug, Clone)]
pub struct ResolvedCacheConfig {
    /// Connection parameters, defaulted when absent.
    pub redis: RedisConfig,

    /// Whether the `cache/persisted-query` section was present at all.
    /// Absence is tolerated only while the host is still bootstrapping.
    pub configured: bool,
}

/// Resolve the persisted-query cache configuration from a deployment
/// configuration provider.
///
/// Reads the section at [`PERSISTED_QUERY_CONFIG_PATH`]. A missing `redis`
/// sub-map yields the default connection parameters wholesale; a malformed
/// sub-map is a configuration error.
///
/// # Errors
///
/// Returns [`StoreError::Config`](crate::StoreError::Config) when the `redis`
/// sub-map is present but does not deserialize.
pub fn resolve_cache_config(provider: &dyn DeploymentConfig) -> Result<ResolvedCacheConfig> {
    let section = provider.get(PERSISTED_QUERY_CONFIG_PATH);
    let configured = section.is_some();

    let redis = match section.as_ref().and_then(|s| s.get("redis")) {
        Some(sub_map) => serde_json::from_value(sub_map.clone())?,
        None => RedisConfig::default(),
    };

    Ok(ResolvedCacheConfig { redis, configured })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_when_section_absent() {
        let provider = JsonDeploymentConfig::new(json!({}), true);
        let resolved = resolve_cache_config(&provider).unwrap();

        assert!(!resolved.configured);
        assert_eq!(resolved.redis, RedisConfig::default());
        assert_eq!(resolved.redis.host, "redis");
        assert_eq!(resolved.redis.port, 6379);
        assert_eq!(resolved.redis.scheme, "tcp");
        assert_eq!(resolved.redis.database, 5);
    }

    #[test]
    fn test_defaults_when_redis_sub_map_absent() {
        let provider = JsonDeploymentConfig::new(
            json!({ "cache": { "persisted-query": {} } }),
            true,
        );
        let resolved = resolve_cache_config(&provider).unwrap();

        assert!(resolved.configured);
        assert_eq!(resolved.redis, RedisConfig::default());
    }

    #[test]
    fn test_full_override() {
        let provider = JsonDeploymentConfig::new(
            json!({
                "cache": {
                    "persisted-query": {
                        "redis": {
                            "host": "cache.internal",
                            "port": 6380,
                            "scheme": "tcp",
                            "database": 2
                        }
                    }
                }
            }),
            true,
        );
        let resolved = resolve_cache_config(&provider).unwrap();

        assert!(resolved.configured);
        assert_eq!(resolved.redis.host, "cache.internal");
        assert_eq!(resolved.redis.port, 6380);
        assert_eq!(resolved.redis.database, 2);
    }

    #[test]
    fn test_partial_override_honors_provided_fields() {
        let provider = JsonDeploymentConfig::new(
            json!({
                "cache": {
                    "persisted-query": {
                        "redis": { "host": "cache.internal" }
                    }
                }
            }),
            true,
        );
        let resolved = resolve_cache_config(&provider).unwrap();

        assert_eq!(resolved.redis.host, "cache.internal");
        assert_eq!(resolved.redis.port, 6379);
        assert_eq!(resolved.redis.database, 5);
    }

    #[test]
    fn test_malformed_redis_sub_map() {
        let provider = JsonDeploymentConfig::new(
            json!({
                "cache": {
                    "persisted-query": {
                        "redis": { "port": "not-a-port" }
                    }
                }
            }),
            true,
        );

        assert!(resolve_cache_config(&provider).is_err());
    }

    #[test]
    fn test_json_provider_path_lookup() {
        let provider = JsonDeploymentConfig::new(
            json!({ "cache": { "persisted-query": { "redis": { "host": "h" } } } }),
            false,
        );

        assert!(provider.get("cache/persisted-query").is_some());
        assert!(provider.get("cache/persisted-query/redis/host").is_some());
        assert!(provider.get("cache/sessions").is_none());
        assert!(!provider.is_available());
    }
}
