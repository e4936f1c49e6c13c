/// Membership-change activity log
use chorus_core::{
    error::Result,
    store::PlaylistStore,
    types::{Activity, ActivityAction, ActivityEntry, PlaylistId, SongId, UserId},
    ChorusError,
};
use chrono::Utc;
use std::sync::Arc;

/// Appends and reads the immutable membership-change log
///
/// `record` runs after the membership write commits, in the same logical
/// operation. A crash between the two writes loses the log line; the log
/// is diagnostic, not authoritative for membership state.
pub struct ActivityRecorder<S> {
    store: Arc<S>,
}

impl<S> Clone for ActivityRecorder<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: PlaylistStore> ActivityRecorder<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Append one entry with a capture-time UTC timestamp
    pub async fn record(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
        song_id: &SongId,
        action: ActivityAction,
    ) -> Result<()> {
        self.store
            .insert_activity(Activity {
                playlist_id: playlist_id.clone(),
                song_id: song_id.clone(),
                user_id: user_id.clone(),
                action,
                time: Utc::now(),
            })
            .await
    }

    /// All entries for a playlist, insertion order, newest last
    ///
    /// An empty history is a not-found error rather than an empty list,
    /// matching the behavior this system replaces.
    pub async fn list(&self, playlist_id: &PlaylistId) -> Result<Vec<ActivityEntry>> {
        let entries = self.store.activities_for_playlist(playlist_id).await?;

        if entries.is_empty() {
            return Err(ChorusError::not_found(
                "Activity history",
                playlist_id.as_str(),
            ));
        }

        Ok(entries)
    }
}
