//! Chorus Service
//!
//! The domain services of the playlist-sharing backend:
//!
//! - [`AccessResolver`]: owner-or-collaborator authorization, gating
//!   every playlist-scoped operation
//! - [`PlaylistCacheGateway`]: read-through / write-invalidate access to
//!   playlist data; reads degrade gracefully when the cache is down,
//!   writes invalidate explicitly and warn loudly when they cannot
//! - [`ActivityRecorder`]: the append-only membership-change log
//! - [`CollaborationService`]: collaboration grants and revokes
//! - [`ExportProducer`] / [`ExportListener`]: the asynchronous export
//!   pipeline over a durable delivery queue
//!
//! Every component receives its store/cache/queue handles at
//! construction; there is no process-wide state.

#![forbid(unsafe_code)]

pub mod access;
pub mod activity;
pub mod collab;
pub mod export;
pub mod gateway;
pub mod queue;

pub use access::AccessResolver;
pub use activity::ActivityRecorder;
pub use collab::CollaborationService;
pub use export::{ExportListener, ExportProducer, MailDispatcher, MailError, EXPORT_TOPIC};
pub use gateway::PlaylistCacheGateway;
pub use queue::{DeliveryQueue, QueueError, RedisQueue};
