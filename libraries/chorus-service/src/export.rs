/// Asynchronous export pipeline
///
/// The producer runs on the request path and does only authorization plus
/// one publish; the listener runs in a separate consumer process and does
/// the expensive work (snapshot fetch + mail dispatch). Per-message
/// semantics are at-most-once and best-effort: a message that fails to
/// process is logged and dropped, never redelivered.
use crate::access::AccessResolver;
use crate::gateway::PlaylistCacheGateway;
use crate::queue::DeliveryQueue;
use async_trait::async_trait;
use chorus_cache::CacheStore;
use chorus_core::{
    error::Result,
    store::PlaylistStore,
    types::{ExportMessage, PlaylistId, UserId},
    ChorusError,
};
use std::sync::Arc;
use thiserror::Error;

/// The well-known topic export messages travel on
pub const EXPORT_TOPIC: &str = "export:playlists";

/// Mail dispatch failure
#[derive(Error, Debug)]
pub enum MailError {
    /// The dispatcher could not hand the message to the mail system
    #[error("mail dispatch error: {0}")]
    Dispatch(String),
}

/// Hands a rendered payload to a mail address
#[async_trait]
pub trait MailDispatcher: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> std::result::Result<(), MailError>;
}

/// Accepts export requests and publishes them to the delivery queue
///
/// Returns as soon as the channel acknowledges the publish; export
/// latency never blocks the request path.
pub struct ExportProducer<S, Q> {
    resolver: AccessResolver<S>,
    store: Arc<S>,
    queue: Arc<Q>,
}

impl<S, Q> Clone for ExportProducer<S, Q> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            store: Arc::clone(&self.store),
            queue: Arc::clone(&self.queue),
        }
    }
}

impl<S: PlaylistStore, Q: DeliveryQueue> ExportProducer<S, Q> {
    pub fn new(store: Arc<S>, queue: Arc<Q>) -> Self {
        let resolver = AccessResolver::new(Arc::clone(&store));
        Self {
            resolver,
            store,
            queue,
        }
    }

    /// Authorize and publish one export request
    ///
    /// Read access suffices. The playlist's existence is re-checked after
    /// authorization: it may have been deleted in between, and publishing
    /// a message for a gone playlist would only fail later in the
    /// consumer where nobody is listening for the error.
    pub async fn submit(
        &self,
        playlist_id: &PlaylistId,
        requester: &UserId,
        target_email: &str,
    ) -> Result<()> {
        self.resolver
            .resolve(playlist_id, requester)
            .await?
            .require()?;

        if self.store.playlist_by_id(playlist_id).await?.is_none() {
            return Err(ChorusError::PlaylistNotFound(playlist_id.clone()));
        }

        let message = ExportMessage {
            playlist_id: playlist_id.clone(),
            target_email: target_email.to_string(),
        };
        let payload = serde_json::to_vec(&message)?;

        self.queue
            .publish(EXPORT_TOPIC, &payload)
            .await
            .map_err(|e| ChorusError::Queue(e.to_string()))?;

        tracing::info!(
            "export of {playlist_id} queued for {target_email}"
        );
        Ok(())
    }
}

/// Consumes export messages: fetch the snapshot, dispatch the mail
///
/// Just another client of the same cache gateway the synchronous path
/// uses. Processing is read-only, so running several listener instances
/// concurrently is safe.
pub struct ExportListener<S, C, M> {
    gateway: PlaylistCacheGateway<S, C>,
    mailer: Arc<M>,
}

impl<S, C, M> Clone for ExportListener<S, C, M> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            mailer: Arc::clone(&self.mailer),
        }
    }
}

impl<S, C, M> ExportListener<S, C, M>
where
    S: PlaylistStore,
    C: CacheStore,
    M: MailDispatcher,
{
    pub fn new(gateway: PlaylistCacheGateway<S, C>, mailer: Arc<M>) -> Self {
        Self { gateway, mailer }
    }

    /// Handle one raw message from the channel
    ///
    /// Never returns an error: a malformed message cannot be retried into
    /// validity, and a failed fetch or dispatch is terminal for the
    /// message (the requester already received their acknowledgment at
    /// publish time). Returning is the acknowledgment.
    pub async fn on_message(&self, raw: &[u8]) {
        let message: ExportMessage = match serde_json::from_slice(raw) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("dropping malformed export message: {e}");
                return;
            }
        };

        if let Err(e) = self.process(&message).await {
            tracing::error!(
                "export of {} to {} failed: {e}",
                message.playlist_id,
                message.target_email
            );
        }
    }

    async fn process(&self, message: &ExportMessage) -> Result<()> {
        let snapshot = self
            .gateway
            .get_playlist_songs(&message.playlist_id)
            .await?;
        let body = serde_json::to_string(&snapshot)?;

        self.mailer
            .send(&message.target_email, &body)
            .await
            .map_err(|e| ChorusError::Mail(e.to_string()))?;

        tracing::info!(
            "exported {} ({} songs) to {}",
            message.playlist_id,
            snapshot.songs.len(),
            message.target_email
        );
        Ok(())
    }
}
