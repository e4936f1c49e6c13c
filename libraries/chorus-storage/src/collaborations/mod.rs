use chorus_core::{error::Result, types::*, ChorusError};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Grant a collaboration, returning the generated id
///
/// (playlist, user) is unique; a second grant surfaces as `Duplicate`.
pub async fn create(pool: &PgPool, playlist_id: &PlaylistId, user_id: &UserId) -> Result<String> {
    let id = format!("collab-{}", Uuid::new_v4().simple());

    sqlx::query(
        "INSERT INTO collaborations (collaboration_id, playlist_id, user_id) VALUES ($1, $2, $3)",
    )
    .bind(&id)
    .bind(playlist_id)
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(|e| {
        if crate::is_unique_violation(&e) {
            ChorusError::Duplicate(format!(
                "collaboration already exists for {user_id} on {playlist_id}"
            ))
        } else {
            e.into()
        }
    })?;

    Ok(id)
}

/// Revoke a collaboration, returning the number of rows removed
pub async fn delete(pool: &PgPool, playlist_id: &PlaylistId, user_id: &UserId) -> Result<u64> {
    let result =
        sqlx::query("DELETE FROM collaborations WHERE playlist_id = $1 AND user_id = $2")
            .bind(playlist_id)
            .bind(user_id)
            .execute(pool)
            .await?;

    Ok(result.rows_affected())
}

/// Whether an active collaboration exists for (playlist, user)
pub async fn exists(pool: &PgPool, playlist_id: &PlaylistId, user_id: &UserId) -> Result<bool> {
    let row = sqlx::query(
        "SELECT 1 AS one FROM collaborations WHERE playlist_id = $1 AND user_id = $2",
    )
    .bind(playlist_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.is_some())
}
