//! Chorus Cache
//!
//! The CacheStore collaborator: a key-value store holding serialized
//! projections of playlist data. The cache is an optimization, never a
//! dependency for correctness. Every read distinguishes `Hit`, `Miss`,
//! and `Unavailable` so callers fall through to the source of truth on
//! anything but a hit.
//!
//! Two implementations:
//! - [`RedisCache`]: shared across instances, used in deployments
//! - [`MemoryCache`]: per-process, used by tests and cache-less setups

mod backend;
pub mod keys;
mod memory;
mod redis;

pub use backend::{CacheError, CacheStore, Lookup};
pub use memory::MemoryCache;
pub use self::redis::RedisCache;
