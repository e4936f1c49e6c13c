/// Cache store interface
use async_trait::async_trait;
use thiserror::Error;

/// Cache backend failure
///
/// Only the write paths (`set`, `delete`) surface this; reads fold
/// failures into [`Lookup::Unavailable`].
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backend could not be reached or rejected the command
    #[error("cache backend error: {0}")]
    Backend(String),
}

/// The outcome of a cache read
///
/// `Miss` and `Unavailable` are observably distinct: both fall through to
/// the source of truth, but `Unavailable` means the backend failed rather
/// than the key being absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The key was present
    Hit(Vec<u8>),
    /// The key was absent
    Miss,
    /// The backend could not answer
    Unavailable,
}

/// Key-value store for serialized projections
///
/// Values are opaque blobs; invalidation is explicit key deletion, and
/// deleting an absent key is an idempotent no-op.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up a key. Never fails; backend errors become `Unavailable`.
    async fn get(&self, key: &str) -> Lookup;

    /// Store a value under a key, overwriting any previous value
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Delete a key; absent keys are not an error
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
