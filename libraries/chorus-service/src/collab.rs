/// Collaboration grants and revokes
use chorus_cache::{keys, CacheStore};
use chorus_core::{
    error::Result,
    store::PlaylistStore,
    types::{PlaylistId, UserId},
    ChorusError,
};
use std::sync::Arc;

/// Grants and revokes playlist collaborations
///
/// Both operations invalidate the *collaborator's* list view: that is
/// the projection whose membership changed; the owner's list is
/// untouched by a grant or revoke.
pub struct CollaborationService<S, C> {
    store: Arc<S>,
    cache: Arc<C>,
}

impl<S, C> Clone for CollaborationService<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<S: PlaylistStore, C: CacheStore> CollaborationService<S, C> {
    pub fn new(store: Arc<S>, cache: Arc<C>) -> Self {
        Self { store, cache }
    }

    /// Grant `collaborator` access to `playlist_id`, returning the
    /// collaboration id
    ///
    /// The collaborator must be an existing user; a repeated grant is a
    /// duplicate error.
    pub async fn grant(&self, playlist_id: &PlaylistId, collaborator: &UserId) -> Result<String> {
        if !self.store.user_exists(collaborator).await? {
            return Err(ChorusError::UserNotFound(collaborator.clone()));
        }

        let id = self
            .store
            .insert_collaboration(playlist_id, collaborator)
            .await?;

        self.invalidate_list_view(collaborator).await;
        Ok(id)
    }

    /// Revoke `collaborator`'s access to `playlist_id`
    pub async fn revoke(&self, playlist_id: &PlaylistId, collaborator: &UserId) -> Result<()> {
        let removed = self
            .store
            .delete_collaboration(playlist_id, collaborator)
            .await?;

        if removed == 0 {
            return Err(ChorusError::invariant(format!(
                "no collaboration for {collaborator} on {playlist_id}"
            )));
        }

        self.invalidate_list_view(collaborator).await;
        Ok(())
    }

    async fn invalidate_list_view(&self, collaborator: &UserId) {
        let key = keys::playlists(collaborator);
        if let Err(e) = self.cache.delete(&key).await {
            tracing::warn!(
                "cache invalidation failed for {key}, stale reads possible until the entry is overwritten: {e}"
            );
        }
    }
}
