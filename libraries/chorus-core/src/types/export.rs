/// Export pipeline wire types
use crate::types::PlaylistId;
use serde::{Deserialize, Serialize};

/// The message published to the delivery channel for one export request
///
/// Wire shape is exactly `{"playlistId": ..., "targetEmail": ...}` with no
/// version field. Lives only on the channel between publish and
/// consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExportMessage {
    /// The playlist to export
    pub playlist_id: PlaylistId,

    /// Where to mail the snapshot
    pub target_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_are_camel_case() {
        let msg = ExportMessage {
            playlist_id: PlaylistId::new("playlist-abc"),
            target_email: "friend@example.com".to_string(),
        };

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["playlistId"], "playlist-abc");
        assert_eq!(json["targetEmail"], "friend@example.com");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn missing_target_email_fails_to_parse() {
        let raw = r#"{"playlistId": "playlist-abc"}"#;
        assert!(serde_json::from_str::<ExportMessage>(raw).is_err());
    }
}
