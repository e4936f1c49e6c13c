/// Core error types for Chorus
use crate::types::{PlaylistId, SongId, UserId};
use thiserror::Error;

/// Result type alias using `ChorusError`
pub type Result<T> = std::result::Result<T, ChorusError>;

/// Core error type for Chorus
///
/// The variants fall into four classes that the boundary layers map onto
/// responses: not-found, authorization, invariant violations, and transient
/// store/channel failures.
#[derive(Error, Debug)]
pub enum ChorusError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Song not found
    #[error("Song not found: {0}")]
    SongNotFound(SongId),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Principal lacks rights on the resource
    #[error("Permission denied")]
    PermissionDenied,

    /// Principal lacks rights, with context
    #[error("Permission denied: {0}")]
    PermissionDeniedWithContext(String),

    /// A write violated a domain rule
    #[error("Invariant violated: {0}")]
    Invariant(String),

    /// Duplicate entry
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database errors (transient, surfaced by storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Delivery channel errors (transient)
    #[error("Queue error: {0}")]
    Queue(String),

    /// Mail dispatch errors (transient)
    #[error("Mail error: {0}")]
    Mail(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl ChorusError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a permission denied error with context
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDeniedWithContext(msg.into())
    }

    /// Create an invariant violation error
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Whether this error names an absent entity
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::PlaylistNotFound(_)
                | Self::SongNotFound(_)
                | Self::UserNotFound(_)
        )
    }

    /// Whether this error is an authorization rejection
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied | Self::PermissionDeniedWithContext(_)
        )
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for ChorusError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
