//! Document store — read-only access to the résumé and reference corpus.
//!
//! Handlers depend on the `DocumentStore` trait; production uses Redis.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::document::DocumentKey;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the stored text for `key`, or `None` when nothing is stored.
    async fn get(&self, key: DocumentKey) -> Result<Option<String>, StoreError>;
}

/// Redis-backed store. Documents live under `<namespace>:<key>`.
#[derive(Clone)]
pub struct RedisDocumentStore {
    connection: MultiplexedConnection,
    namespace: String,
}

impl RedisDocumentStore {
    pub async fn connect(
        redis_url: &str,
        namespace: impl Into<String>,
    ) -> Result<Self, StoreError> {
        info!("Connecting to Redis...");

        let client = redis::Client::open(redis_url)?;
        let connection = client.get_multiplexed_async_connection().await?;

        info!("Redis connection established");
        Ok(Self {
            connection,
            namespace: namespace.into(),
        })
    }

    fn redis_key(&self, key: DocumentKey) -> String {
        namespaced_key(&self.namespace, key)
    }
}

#[async_trait]
impl DocumentStore for RedisDocumentStore {
    async fn get(&self, key: DocumentKey) -> Result<Option<String>, StoreError> {
        let redis_key = self.redis_key(key);
        let mut connection = self.connection.clone();
        let value: Option<String> = connection.get(&redis_key).await?;

        debug!(
            key = %redis_key,
            found = value.is_some(),
            "Document store lookup"
        );
        Ok(value)
    }
}

fn namespaced_key(namespace: &str, key: DocumentKey) -> String {
    if namespace.is_empty() {
        key.as_str().to_string()
    } else {
        format!("{namespace}:{key}")
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::collections::HashMap;

    use super::*;

    /// In-process store used by handler and router tests.
    #[derive(Default)]
    pub struct MemoryDocumentStore {
        documents: HashMap<&'static str, String>,
        unavailable: bool,
    }

    impl MemoryDocumentStore {
        /// A store whose every lookup fails as if Redis were down.
        pub fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }

        pub fn with(mut self, key: DocumentKey, value: &str) -> Self {
            self.documents.insert(key.as_str(), value.to_string());
            self
        }
    }

    #[async_trait]
    impl DocumentStore for MemoryDocumentStore {
        async fn get(&self, key: DocumentKey) -> Result<Option<String>, StoreError> {
            if self.unavailable {
                return Err(StoreError::Redis(redis::RedisError::from((
                    redis::ErrorKind::IoError,
                    "connection refused",
                ))));
            }
            Ok(self.documents.get(key.as_str()).cloned())
        }
    }
}
