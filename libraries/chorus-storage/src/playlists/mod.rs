use chorus_core::{error::Result, types::*};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Insert a playlist, returning the generated id
pub async fn create(pool: &PgPool, playlist: CreatePlaylist) -> Result<PlaylistId> {
    let id = PlaylistId::generate();

    sqlx::query("INSERT INTO playlists (playlist_id, name, owner) VALUES ($1, $2, $3)")
        .bind(&id)
        .bind(&playlist.name)
        .bind(&playlist.owner)
        .execute(pool)
        .await?;

    Ok(id)
}

/// Point query by id, joined with the owner's username
pub async fn get_by_id(pool: &PgPool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT p.playlist_id, p.name, p.owner, u.username
        FROM playlists p
        LEFT JOIN users u ON u.user_id = p.owner
        WHERE p.playlist_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(map_playlist))
}

/// Playlists the user owns or collaborates on
pub async fn get_for_user(pool: &PgPool, user_id: &UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT DISTINCT p.playlist_id, p.name, p.owner, u.username
        FROM playlists p
        LEFT JOIN users u ON u.user_id = p.owner
        LEFT JOIN collaborations c ON c.playlist_id = p.playlist_id
        WHERE p.owner = $1 OR c.user_id = $1
        ORDER BY p.playlist_id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(map_playlist).collect())
}

/// Delete a playlist, returning the number of rows removed
///
/// Membership, collaborations, and activity log entries cascade.
pub async fn delete(pool: &PgPool, id: &PlaylistId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM playlists WHERE playlist_id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Add a song to a playlist
///
/// Duplicate additions are allowed; each insert is its own row.
pub async fn add_song(pool: &PgPool, playlist_id: &PlaylistId, song_id: &SongId) -> Result<()> {
    let id = format!("playlist-songs-{}", Uuid::new_v4().simple());

    sqlx::query(
        "INSERT INTO playlist_songs (playlist_songs_id, playlist_id, song_id) VALUES ($1, $2, $3)",
    )
    .bind(&id)
    .bind(playlist_id)
    .bind(song_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a song from a playlist, returning the number of rows removed
pub async fn remove_song(
    pool: &PgPool,
    playlist_id: &PlaylistId,
    song_id: &SongId,
) -> Result<u64> {
    let result =
        sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = $1 AND song_id = $2")
            .bind(playlist_id)
            .bind(song_id)
            .execute(pool)
            .await?;

    Ok(result.rows_affected())
}

/// The playlist's song list, joined with the catalog
pub async fn songs_in(pool: &PgPool, playlist_id: &PlaylistId) -> Result<Vec<SongSummary>> {
    let rows = sqlx::query(
        r#"
        SELECT s.song_id, s.title, s.performer
        FROM songs s
        INNER JOIN playlist_songs ps ON ps.song_id = s.song_id
        WHERE ps.playlist_id = $1
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| SongSummary {
            id: row.get("song_id"),
            title: row.get("title"),
            performer: row.get("performer"),
        })
        .collect())
}

fn map_playlist(row: sqlx::postgres::PgRow) -> Playlist {
    Playlist {
        id: row.get("playlist_id"),
        name: row.get("name"),
        owner: row.get("owner"),
        username: row.get("username"),
    }
}
