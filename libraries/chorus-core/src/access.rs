//! Access decision types
//!
//! Authorization resolution returns a tagged decision instead of raising
//! and catching errors. The ordering rule (a missing playlist always
//! surfaces as not-found, never masked by a failed collaborator check) is
//! carried structurally: `PlaylistMissing` is decided before any
//! collaborator lookup happens.

use crate::error::ChorusError;
use crate::types::PlaylistId;

/// How access was granted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantPath {
    /// The principal owns the playlist
    Owner,
    /// The principal holds an active collaboration
    Collaborator,
}

/// Why access was denied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialReason {
    /// The playlist does not exist
    PlaylistMissing(PlaylistId),
    /// The playlist exists but the principal is neither owner nor (where
    /// permitted) collaborator
    NotOwner,
}

/// The outcome of resolving a principal against a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted(GrantPath),
    Denied(DenialReason),
}

impl AccessDecision {
    /// Whether access was granted
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted(_))
    }

    /// Convert the decision into a result, mapping denials onto the error
    /// taxonomy: a missing playlist is not-found, anything else is an
    /// authorization rejection.
    pub fn require(self) -> Result<GrantPath, ChorusError> {
        match self {
            AccessDecision::Granted(path) => Ok(path),
            AccessDecision::Denied(DenialReason::PlaylistMissing(id)) => {
                Err(ChorusError::PlaylistNotFound(id))
            }
            AccessDecision::Denied(DenialReason::NotOwner) => Err(ChorusError::PermissionDenied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_playlist_maps_to_not_found() {
        let decision =
            AccessDecision::Denied(DenialReason::PlaylistMissing(PlaylistId::new("playlist-x")));
        let err = decision.require().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn not_owner_maps_to_permission_denied() {
        let decision = AccessDecision::Denied(DenialReason::NotOwner);
        let err = decision.require().unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[test]
    fn granted_passes_through_the_path() {
        let path = AccessDecision::Granted(GrantPath::Collaborator)
            .require()
            .unwrap();
        assert_eq!(path, GrantPath::Collaborator);
    }
}
