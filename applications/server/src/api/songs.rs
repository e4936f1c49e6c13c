/// Song catalog API routes
use crate::{
    error::{Result, ServerError},
    middleware::Principal,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chorus_core::types::{CreateSong, Song, SongId, SongSummary};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateSongResponse {
    pub song_id: SongId,
}

/// POST /api/songs
/// Add a song to the catalog
pub async fn create_song(
    State(app_state): State<AppState>,
    _principal: Principal,
    Json(req): Json<CreateSong>,
) -> Result<(StatusCode, Json<CreateSongResponse>)> {
    let song_id = chorus_storage::songs::create(app_state.store.pool(), req).await?;
    Ok((StatusCode::CREATED, Json(CreateSongResponse { song_id })))
}

/// GET /api/songs
/// List the catalog
pub async fn list_songs(
    State(app_state): State<AppState>,
    _principal: Principal,
) -> Result<Json<Vec<SongSummary>>> {
    let songs = chorus_storage::songs::get_all(app_state.store.pool()).await?;
    Ok(Json(songs))
}

/// GET /api/songs/:id
/// Get song details
pub async fn get_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    _principal: Principal,
) -> Result<Json<Song>> {
    let song_id = SongId::new(id);
    let song = chorus_storage::songs::get_by_id(app_state.store.pool(), &song_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Song not found: {song_id}")))?;

    Ok(Json(song))
}
