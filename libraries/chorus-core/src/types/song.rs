/// Song domain types
use crate::types::SongId;
use serde::{Deserialize, Serialize};

/// A song in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Release year
    pub year: i32,

    /// Genre label
    pub genre: String,

    /// Performing artist
    pub performer: String,

    /// Duration in seconds, when known
    pub duration: Option<i32>,

    /// Album this song belongs to, when known
    pub album_id: Option<String>,
}

/// Payload for creating a song
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSong {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
}

/// The song shape embedded in playlist projections
///
/// Playlist reads and export snapshots carry this reduced view rather than
/// the full catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongSummary {
    pub id: SongId,
    pub title: String,
    pub performer: String,
}
