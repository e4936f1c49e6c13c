/// Activity log domain types
use crate::types::{PlaylistId, SongId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to a playlist's song membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    /// A song was added
    Add,
    /// A song was removed
    Delete,
}

impl ActivityAction {
    /// Convert action to string for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::Add => "add",
            ActivityAction::Delete => "delete",
        }
    }

    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "add" => Some(ActivityAction::Add),
            "delete" => Some(ActivityAction::Delete),
            _ => None,
        }
    }
}

/// A membership change to record
///
/// Appended by the recorder after the membership write commits; never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub playlist_id: PlaylistId,
    pub song_id: SongId,
    pub user_id: UserId,
    pub action: ActivityAction,
    /// Capture time, UTC
    pub time: DateTime<Utc>,
}

/// An activity log line as read back, joined with display fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Who made the change
    pub username: String,

    /// Title of the song involved
    pub title: String,

    /// What happened
    pub action: ActivityAction,

    /// When it happened
    pub time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_string_conversion() {
        assert_eq!(ActivityAction::Add.as_str(), "add");
        assert_eq!(ActivityAction::Delete.as_str(), "delete");

        assert_eq!(ActivityAction::from_str("add"), Some(ActivityAction::Add));
        assert_eq!(
            ActivityAction::from_str("delete"),
            Some(ActivityAction::Delete)
        );
        assert_eq!(ActivityAction::from_str("rename"), None);
    }

    #[test]
    fn action_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ActivityAction::Add).unwrap(),
            "\"add\""
        );
    }
}
