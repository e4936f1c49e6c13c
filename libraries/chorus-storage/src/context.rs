/// PostgreSQL implementation of the playlist-domain store
use async_trait::async_trait;
use chorus_core::{
    error::Result,
    store::PlaylistStore,
    types::{
        Activity, ActivityEntry, CreatePlaylist, Playlist, PlaylistId, SongId, SongSummary,
        UserId,
    },
};
use sqlx::PgPool;

/// A [`PlaylistStore`] over a PostgreSQL pool
///
/// Thin delegation onto the vertical slices; owns nothing but the pool
/// handle, so every component can carry its own clone.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap a pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool, for queries outside the trait
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PlaylistStore for PgStore {
    async fn user_exists(&self, id: &UserId) -> Result<bool> {
        crate::users::exists(&self.pool, id).await
    }

    async fn song_exists(&self, id: &SongId) -> Result<bool> {
        crate::songs::exists(&self.pool, id).await
    }

    async fn insert_playlist(&self, playlist: CreatePlaylist) -> Result<PlaylistId> {
        crate::playlists::create(&self.pool, playlist).await
    }

    async fn playlist_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        crate::playlists::get_by_id(&self.pool, id).await
    }

    async fn playlists_for_user(&self, user_id: &UserId) -> Result<Vec<Playlist>> {
        crate::playlists::get_for_user(&self.pool, user_id).await
    }

    async fn delete_playlist(&self, id: &PlaylistId) -> Result<u64> {
        crate::playlists::delete(&self.pool, id).await
    }

    async fn insert_playlist_song(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<()> {
        crate::playlists::add_song(&self.pool, playlist_id, song_id).await
    }

    async fn delete_playlist_song(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<u64> {
        crate::playlists::remove_song(&self.pool, playlist_id, song_id).await
    }

    async fn songs_in_playlist(&self, playlist_id: &PlaylistId) -> Result<Vec<SongSummary>> {
        crate::playlists::songs_in(&self.pool, playlist_id).await
    }

    async fn insert_collaboration(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<String> {
        crate::collaborations::create(&self.pool, playlist_id, user_id).await
    }

    async fn delete_collaboration(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<u64> {
        crate::collaborations::delete(&self.pool, playlist_id, user_id).await
    }

    async fn collaboration_exists(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<bool> {
        crate::collaborations::exists(&self.pool, playlist_id, user_id).await
    }

    async fn insert_activity(&self, activity: Activity) -> Result<()> {
        crate::activities::append(&self.pool, activity).await
    }

    async fn activities_for_playlist(
        &self,
        playlist_id: &PlaylistId,
    ) -> Result<Vec<ActivityEntry>> {
        crate::activities::list_for_playlist(&self.pool, playlist_id).await
    }
}
