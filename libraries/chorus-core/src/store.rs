//! Storage trait for the playlist domain
//!
//! The narrow DataStore interface the service layer consumes. Absence is
//! always surfaced as zero rows (`Option`, `bool`, or an affected-row
//! count), never as a distinct error; the service layer decides which
//! absences are domain errors.

use crate::error::Result;
use crate::types::{
    Activity, ActivityEntry, CreatePlaylist, Playlist, PlaylistId, SongId, SongSummary, UserId,
};
use async_trait::async_trait;

/// Storage context providing access to playlist-domain persistence
///
/// Implemented over PostgreSQL by `chorus-storage` and by in-memory fakes
/// in tests. Handles are injected into each component at construction.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    // ========================================================================
    // Users / songs (referenced entities)
    // ========================================================================

    /// Whether a user exists
    async fn user_exists(&self, id: &UserId) -> Result<bool>;

    /// Whether a song exists in the catalog
    async fn song_exists(&self, id: &SongId) -> Result<bool>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Insert a playlist, returning its generated id
    async fn insert_playlist(&self, playlist: CreatePlaylist) -> Result<PlaylistId>;

    /// Point query by id, joined with the owner's username
    async fn playlist_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>>;

    /// Playlists the user owns or collaborates on
    async fn playlists_for_user(&self, user_id: &UserId) -> Result<Vec<Playlist>>;

    /// Delete a playlist (membership, collaborations, and activities
    /// cascade), returning the number of rows removed
    async fn delete_playlist(&self, id: &PlaylistId) -> Result<u64>;

    // ========================================================================
    // Song membership
    // ========================================================================

    /// Add a song to a playlist; duplicates are allowed
    async fn insert_playlist_song(&self, playlist_id: &PlaylistId, song_id: &SongId)
        -> Result<()>;

    /// Remove a song from a playlist, returning the number of rows removed
    async fn delete_playlist_song(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<u64>;

    /// The playlist's song list, joined with the catalog
    async fn songs_in_playlist(&self, playlist_id: &PlaylistId) -> Result<Vec<SongSummary>>;

    // ========================================================================
    // Collaborations
    // ========================================================================

    /// Grant a collaboration, returning its generated id
    async fn insert_collaboration(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<String>;

    /// Revoke a collaboration, returning the number of rows removed
    async fn delete_collaboration(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<u64>;

    /// Whether an active collaboration exists for (playlist, user)
    async fn collaboration_exists(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<bool>;

    // ========================================================================
    // Activity log
    // ========================================================================

    /// Append one activity log entry
    async fn insert_activity(&self, activity: Activity) -> Result<()>;

    /// All log entries for a playlist, insertion order, joined with
    /// username and song title
    async fn activities_for_playlist(&self, playlist_id: &PlaylistId)
        -> Result<Vec<ActivityEntry>>;
}
