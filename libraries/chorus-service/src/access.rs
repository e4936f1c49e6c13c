/// Authorization resolution
use chorus_core::{
    access::{AccessDecision, DenialReason, GrantPath},
    error::Result,
    store::PlaylistStore,
    types::{PlaylistId, UserId},
};
use std::sync::Arc;

/// Decides whether a principal may access a playlist
///
/// Read-only; always queries the store directly (never the cache) so the
/// gate can't be fooled by a stale projection. A transient store failure
/// is an `Err`; a decision, either way, is an `Ok`.
pub struct AccessResolver<S> {
    store: Arc<S>,
}

impl<S> Clone for AccessResolver<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: PlaylistStore> AccessResolver<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Owner-or-collaborator access, for reads and membership writes.
    ///
    /// The playlist is fetched first: absence decides `PlaylistMissing`
    /// before any collaborator lookup can run, so a missing playlist is
    /// never masked by a failed collaborator check. When the playlist
    /// exists and the principal is neither owner nor collaborator, the
    /// denial is the one the owner check produced.
    pub async fn resolve(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<AccessDecision> {
        let Some(playlist) = self.store.playlist_by_id(playlist_id).await? else {
            return Ok(AccessDecision::Denied(DenialReason::PlaylistMissing(
                playlist_id.clone(),
            )));
        };

        if playlist.owner == *user_id {
            return Ok(AccessDecision::Granted(GrantPath::Owner));
        }

        if self
            .store
            .collaboration_exists(playlist_id, user_id)
            .await?
        {
            Ok(AccessDecision::Granted(GrantPath::Collaborator))
        } else {
            Ok(AccessDecision::Denied(DenialReason::NotOwner))
        }
    }

    /// Owner-only access, for playlist deletion and collaboration
    /// management. No collaborator fallback.
    pub async fn resolve_owner_only(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<AccessDecision> {
        let Some(playlist) = self.store.playlist_by_id(playlist_id).await? else {
            return Ok(AccessDecision::Denied(DenialReason::PlaylistMissing(
                playlist_id.clone(),
            )));
        };

        if playlist.owner == *user_id {
            Ok(AccessDecision::Granted(GrantPath::Owner))
        } else {
            Ok(AccessDecision::Denied(DenialReason::NotOwner))
        }
    }
}
