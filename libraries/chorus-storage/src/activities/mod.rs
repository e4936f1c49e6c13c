use chorus_core::{error::Result, types::*};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Append one activity log entry
pub async fn append(pool: &PgPool, activity: Activity) -> Result<()> {
    let id = format!("activity-{}", Uuid::new_v4().simple());

    sqlx::query(
        r#"
        INSERT INTO playlist_song_activities
            (playlist_song_activities_id, playlist_id, song_id, user_id, action, time)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(&id)
    .bind(&activity.playlist_id)
    .bind(&activity.song_id)
    .bind(&activity.user_id)
    .bind(activity.action.as_str())
    .bind(activity.time)
    .execute(pool)
    .await?;

    Ok(())
}

/// All log entries for a playlist, insertion order (newest last), joined
/// with username and song title
///
/// The joins are LEFT: the log outlives catalog deletions, so a missing
/// song falls back to its recorded id and a missing user to their id.
pub async fn list_for_playlist(
    pool: &PgPool,
    playlist_id: &PlaylistId,
) -> Result<Vec<ActivityEntry>> {
    let rows = sqlx::query(
        r#"
        SELECT
            COALESCE(u.username, psa.user_id) AS username,
            COALESCE(s.title, psa.song_id) AS title,
            psa.action, psa.time
        FROM playlist_song_activities psa
        LEFT JOIN users u ON u.user_id = psa.user_id
        LEFT JOIN songs s ON s.song_id = psa.song_id
        WHERE psa.playlist_id = $1
        ORDER BY psa.time ASC, psa.playlist_song_activities_id ASC
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| ActivityEntry {
            username: row.get("username"),
            title: row.get("title"),
            action: ActivityAction::from_str(row.get::<&str, _>("action"))
                .unwrap_or(ActivityAction::Add),
            time: row.get("time"),
        })
        .collect())
}
