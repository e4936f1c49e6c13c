use chorus_core::{error::Result, types::*};
use sqlx::{PgPool, Row};

/// Insert a song into the catalog, returning the generated id
pub async fn create(pool: &PgPool, song: CreateSong) -> Result<SongId> {
    let id = SongId::generate();

    sqlx::query(
        r#"
        INSERT INTO songs (song_id, title, year, genre, performer, duration, album_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(&id)
    .bind(&song.title)
    .bind(song.year)
    .bind(&song.genre)
    .bind(&song.performer)
    .bind(song.duration)
    .bind(&song.album_id)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Get a song by id
pub async fn get_by_id(pool: &PgPool, id: &SongId) -> Result<Option<Song>> {
    let row = sqlx::query(
        r#"
        SELECT song_id, title, year, genre, performer, duration, album_id
        FROM songs
        WHERE song_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(map_song))
}

/// List the catalog, summary shape
pub async fn get_all(pool: &PgPool) -> Result<Vec<SongSummary>> {
    let rows = sqlx::query("SELECT song_id, title, performer FROM songs ORDER BY title")
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

/// Whether a song exists
pub async fn exists(pool: &PgPool, id: &SongId) -> Result<bool> {
    let row = sqlx::query("SELECT 1 AS one FROM songs WHERE song_id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

fn map_song(row: sqlx::postgres::PgRow) -> Song {
    Song {
        id: row.get("song_id"),
        title: row.get("title"),
        year: row.get("year"),
        genre: row.get("genre"),
        performer: row.get("performer"),
        duration: row.get("duration"),
        album_id: row.get("album_id"),
    }
}
