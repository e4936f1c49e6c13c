use chorus_core::{error::Result, types::*, ChorusError};
use sqlx::{PgPool, Row};

/// Insert a user, returning the generated id
///
/// The username carries a unique constraint; a collision surfaces as a
/// `Duplicate` error.
pub async fn create(pool: &PgPool, user: CreateUser) -> Result<UserId> {
    let id = UserId::generate();

    sqlx::query(
        r#"
        INSERT INTO users (user_id, username, password, fullname)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(&id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(&user.fullname)
    .execute(pool)
    .await
    .map_err(|e| {
        if crate::is_unique_violation(&e) {
            ChorusError::Duplicate(format!("username already taken: {}", user.username))
        } else {
            e.into()
        }
    })?;

    Ok(id)
}

/// Get a user by id
pub async fn get_by_id(pool: &PgPool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query(
        "SELECT user_id, username, fullname FROM users WHERE user_id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| User {
        id: row.get("user_id"),
        username: row.get("username"),
        fullname: row.get("fullname"),
    }))
}

/// Get a user's id and password hash by username, for login
pub async fn credentials_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<(UserId, String)>> {
    let row = sqlx::query("SELECT user_id, password FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| (row.get("user_id"), row.get("password"))))
}

/// Whether a user exists
pub async fn exists(pool: &PgPool, id: &UserId) -> Result<bool> {
    let row = sqlx::query("SELECT 1 AS one FROM users WHERE user_id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}
