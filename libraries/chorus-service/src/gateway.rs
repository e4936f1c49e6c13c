/// Cache-coherent playlist reads and writes
use crate::activity::ActivityRecorder;
use chorus_cache::{keys, CacheStore, Lookup};
use chorus_core::{
    error::Result,
    store::PlaylistStore,
    types::{
        ActivityAction, CreatePlaylist, Playlist, PlaylistId, PlaylistWithSongs, SongId, UserId,
    },
    ChorusError,
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Read-through / write-invalidate wrapper around playlist queries
///
/// Cache-aside semantics: reads check the cache and fall through to the
/// store on a miss (or when the cache backend is down; the cache is an
/// optimization, never a dependency for correctness). Every mutation
/// deletes the keys that could hold stale projections before returning
/// success; a failed invalidation after a committed write is logged as a
/// warning but never rolls the write back.
pub struct PlaylistCacheGateway<S, C> {
    store: Arc<S>,
    cache: Arc<C>,
    recorder: ActivityRecorder<S>,
}

impl<S, C> Clone for PlaylistCacheGateway<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            cache: Arc::clone(&self.cache),
            recorder: self.recorder.clone(),
        }
    }
}

impl<S: PlaylistStore, C: CacheStore> PlaylistCacheGateway<S, C> {
    pub fn new(store: Arc<S>, cache: Arc<C>) -> Self {
        let recorder = ActivityRecorder::new(Arc::clone(&store));
        Self {
            store,
            cache,
            recorder,
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Playlist metadata joined with the owner's username
    ///
    /// Not-found propagates without writing a cache entry, so a playlist
    /// created moments later is not shadowed by a poisoned permanent miss.
    pub async fn get_playlist(&self, id: &PlaylistId) -> Result<Playlist> {
        let key = keys::playlist(id);
        if let Some(playlist) = self.read_cached::<Playlist>(&key).await {
            return Ok(playlist);
        }

        let playlist = self
            .store
            .playlist_by_id(id)
            .await?
            .ok_or_else(|| ChorusError::PlaylistNotFound(id.clone()))?;

        self.write_cached(&key, &playlist).await;
        Ok(playlist)
    }

    /// The combined playlist + song-list projection
    ///
    /// Cached as one entry: metadata and membership change together in the
    /// common case (song add/remove), so one key is invalidated per write
    /// instead of two atomically.
    pub async fn get_playlist_songs(&self, id: &PlaylistId) -> Result<PlaylistWithSongs> {
        let key = keys::playlist_songs(id);
        if let Some(combined) = self.read_cached::<PlaylistWithSongs>(&key).await {
            return Ok(combined);
        }

        let playlist = self.get_playlist(id).await?;
        let songs = self.store.songs_in_playlist(id).await?;
        let combined = PlaylistWithSongs::new(playlist, songs);

        self.write_cached(&key, &combined).await;
        Ok(combined)
    }

    /// Playlists the principal owns or collaborates on
    ///
    /// Keyed on the requesting principal, since the union differs per user.
    pub async fn list_playlists(&self, user_id: &UserId) -> Result<Vec<Playlist>> {
        let key = keys::playlists(user_id);
        if let Some(playlists) = self.read_cached::<Vec<Playlist>>(&key).await {
            return Ok(playlists);
        }

        let playlists = self.store.playlists_for_user(user_id).await?;
        self.write_cached(&key, &playlists).await;
        Ok(playlists)
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Create a playlist, returning its id
    pub async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<PlaylistId> {
        let owner = playlist.owner.clone();
        let id = self.store.insert_playlist(playlist).await?;

        self.invalidate(&[keys::playlists(&owner)]).await;
        Ok(id)
    }

    /// Delete a playlist
    ///
    /// Membership, collaborations, and activities cascade in the store.
    pub async fn delete_playlist(&self, id: &PlaylistId) -> Result<()> {
        let playlist = self
            .store
            .playlist_by_id(id)
            .await?
            .ok_or_else(|| ChorusError::PlaylistNotFound(id.clone()))?;

        self.store.delete_playlist(id).await?;

        self.invalidate(&[keys::playlist(id), keys::playlists(&playlist.owner)])
            .await;
        Ok(())
    }

    /// Add a song to a playlist and record the change
    ///
    /// The song id must be well-formed and reference an existing song;
    /// duplicate additions are allowed.
    pub async fn add_song(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
        user_id: &UserId,
    ) -> Result<()> {
        if !song_id.is_well_formed() {
            return Err(ChorusError::invariant(format!(
                "malformed song id: {song_id}"
            )));
        }

        if !self.store.song_exists(song_id).await? {
            return Err(ChorusError::SongNotFound(song_id.clone()));
        }

        self.store
            .insert_playlist_song(playlist_id, song_id)
            .await?;

        self.recorder
            .record(playlist_id, user_id, song_id, ActivityAction::Add)
            .await?;

        self.invalidate(&[keys::playlist_songs(playlist_id)]).await;
        Ok(())
    }

    /// Remove a song from a playlist and record the change
    pub async fn remove_song(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
        user_id: &UserId,
    ) -> Result<()> {
        let removed = self
            .store
            .delete_playlist_song(playlist_id, song_id)
            .await?;

        if removed == 0 {
            return Err(ChorusError::invariant(format!(
                "song {song_id} is not on playlist {playlist_id}"
            )));
        }

        self.recorder
            .record(playlist_id, user_id, song_id, ActivityAction::Delete)
            .await?;

        self.invalidate(&[keys::playlist_songs(playlist_id)]).await;
        Ok(())
    }

    // ========================================================================
    // Cache plumbing
    // ========================================================================

    async fn read_cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache.get(key).await {
            Lookup::Hit(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::debug!("discarding undecodable cache entry {key}: {e}");
                    None
                }
            },
            // Both fall through to the source of truth
            Lookup::Miss | Lookup::Unavailable => None,
        }
    }

    async fn write_cached<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_vec(value) {
            Ok(bytes) => {
                if let Err(e) = self.cache.set(key, &bytes).await {
                    tracing::debug!("cache populate failed for {key}: {e}");
                }
            }
            Err(e) => tracing::debug!("cache serialization failed for {key}: {e}"),
        }
    }

    /// Delete the listed keys; absent keys are a no-op.
    ///
    /// A failure here means a stale read is possible until the entry is
    /// overwritten or purged, so it is surfaced in the log, unlike read
    /// failures, which degrade silently.
    async fn invalidate(&self, cache_keys: &[String]) {
        for key in cache_keys {
            if let Err(e) = self.cache.delete(key).await {
                tracing::warn!(
                    "cache invalidation failed for {key}, stale reads possible until the entry is overwritten: {e}"
                );
            }
        }
    }
}
