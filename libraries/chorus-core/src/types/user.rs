/// User domain types
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// A registered user
///
/// The password hash never leaves the storage layer; this type is the
/// public shape of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name, unique across the system
    pub username: String,

    /// Display name
    pub fullname: String,
}

/// Payload for creating a user
///
/// Carries an already-bcrypt-hashed password; hashing happens in the
/// application layer where the cost policy lives.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub fullname: String,
}
