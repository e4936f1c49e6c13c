/// Redis-backed cache store
use crate::backend::{CacheError, CacheStore, Lookup};
use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};

/// Cache store over a shared Redis instance
///
/// The connection manager reconnects on its own; individual command
/// failures surface as `Unavailable` on reads and `CacheError` on writes.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    /// Connect to Redis at `url` (e.g. `redis://127.0.0.1:6379`)
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client =
            redis::Client::open(url).map_err(|e| CacheError::Backend(e.to_string()))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| CacheError::Backend(e.to_string()))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Lookup {
        let mut conn = self.conn.clone();
        let result: Result<Option<Vec<u8>>, redis::RedisError> = conn.get(key).await;
        match result {
            Ok(Some(value)) => Lookup::Hit(value),
            Ok(None) => Lookup::Miss,
            Err(e) => {
                tracing::debug!("cache read failed for {key}: {e}");
                Lookup::Unavailable
            }
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let result: Result<(), redis::RedisError> = conn.set(key, value).await;
        result.map_err(|e| CacheError::Backend(e.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        // DEL returns the number of keys removed; zero is fine
        let result: Result<i64, redis::RedisError> = conn.del(key).await;
        result.map(|_| ()).map_err(|e| CacheError::Backend(e.to_string()))
    }
}
