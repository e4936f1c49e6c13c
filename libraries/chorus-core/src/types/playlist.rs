/// Playlist domain types
use crate::types::{PlaylistId, SongSummary, UserId};
use serde::{Deserialize, Serialize};

/// Playlist read model
///
/// Joins the owner's username so list and detail reads render a display
/// name without a second query. This is also the shape cached under
/// `playlist:{id}` and `playlists:{user}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Owner user ID
    pub owner: UserId,

    /// Owner's login name
    pub username: String,
}

/// Payload for creating a playlist
#[derive(Debug, Clone)]
pub struct CreatePlaylist {
    pub name: String,
    pub owner: UserId,
}

/// Playlist metadata combined with its song list
///
/// The combined projection cached under `playlist_songs:{id}` and shipped
/// as the export snapshot. Metadata and membership change together in the
/// common case, so they share one cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistWithSongs {
    pub id: PlaylistId,
    pub name: String,
    pub owner: UserId,
    pub username: String,
    pub songs: Vec<SongSummary>,
}

impl PlaylistWithSongs {
    /// Combine playlist metadata with its membership list
    pub fn new(playlist: Playlist, songs: Vec<SongSummary>) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name,
            owner: playlist.owner,
            username: playlist.username,
            songs,
        }
    }
}
