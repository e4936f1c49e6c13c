//! Chorus Core
//!
//! Domain types, traits, and error handling for the Chorus playlist-sharing
//! backend.
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `Song`, `User`, `Collaboration`, etc.
//! - **Collaborator Interfaces**: the `PlaylistStore` trait consumed by the
//!   service layer and implemented by `chorus-storage`
//! - **Access Decisions**: the tagged result of authorization resolution
//! - **Error Handling**: unified `ChorusError` and `Result` types

#![forbid(unsafe_code)]

pub mod access;
pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use access::{AccessDecision, DenialReason, GrantPath};
pub use error::{ChorusError, Result};
pub use store::PlaylistStore;

pub use types::{
    Activity, ActivityAction, ActivityEntry, CreatePlaylist, CreateSong, CreateUser,
    ExportMessage, Playlist, PlaylistId, PlaylistWithSongs, Song, SongId, SongSummary, User,
    UserId,
};
