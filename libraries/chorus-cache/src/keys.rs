//! Cache key scheme
//!
//! One place to spell the keys so the read paths and the write-path
//! invalidation rules can never drift apart.

use chorus_core::types::{PlaylistId, UserId};

/// Key for a single playlist's metadata: `playlist:{id}`
pub fn playlist(id: &PlaylistId) -> String {
    format!("playlist:{id}")
}

/// Key for the combined playlist+songs projection: `playlist_songs:{id}`
pub fn playlist_songs(id: &PlaylistId) -> String {
    format!("playlist_songs:{id}")
}

/// Key for a principal's playlist list view: `playlists:{user}`
///
/// Keyed on the *requesting* principal: the underlying query unions owned
/// and collaborated playlists, so the result set differs per user.
pub fn playlists(user: &UserId) -> String {
    format!("playlists:{user}")
}
