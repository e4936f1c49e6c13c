//! Domain types for Chorus

mod activity;
mod export;
mod ids;
mod playlist;
mod song;
mod user;

pub use activity::{Activity, ActivityAction, ActivityEntry};
pub use export::ExportMessage;
pub use ids::{PlaylistId, SongId, UserId};
pub use playlist::{CreatePlaylist, Playlist, PlaylistWithSongs};
pub use song::{CreateSong, Song, SongSummary};
pub use user::{CreateUser, User};
