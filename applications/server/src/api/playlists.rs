/// Playlists API routes
///
/// Every playlist-scoped operation passes through the access resolver
/// before it touches the gateway; the gateway keeps the cache coherent.
use crate::{error::Result, middleware::Principal, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chorus_core::types::{CreatePlaylist, PlaylistId, SongId, SongSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePlaylistResponse {
    pub playlist_id: PlaylistId,
}

#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub id: PlaylistId,
    pub name: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct PlaylistSongsResponse {
    pub id: PlaylistId,
    pub name: String,
    pub username: String,
    pub songs: Vec<SongSummary>,
}

#[derive(Debug, Deserialize)]
pub struct SongRequest {
    pub song_id: SongId,
}

/// GET /api/playlists
/// Playlists the authenticated principal owns or collaborates on
pub async fn list_playlists(
    State(app_state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<PlaylistResponse>>> {
    let playlists = app_state.gateway.list_playlists(principal.user_id()).await?;

    Ok(Json(
        playlists
            .into_iter()
            .map(|p| PlaylistResponse {
                id: p.id,
                name: p.name,
                username: p.username,
            })
            .collect(),
    ))
}

/// POST /api/playlists
/// Create a new playlist owned by the principal
pub async fn create_playlist(
    State(app_state): State<AppState>,
    principal: Principal,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<CreatePlaylistResponse>)> {
    let playlist_id = app_state
        .gateway
        .create_playlist(CreatePlaylist {
            name: req.name,
            owner: principal.user_id().clone(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePlaylistResponse { playlist_id }),
    ))
}

/// DELETE /api/playlists/:id
/// Delete a playlist; owner only, no collaborator fallback
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    principal: Principal,
) -> Result<Json<serde_json::Value>> {
    let playlist_id = PlaylistId::new(id);

    app_state
        .resolver
        .resolve_owner_only(&playlist_id, principal.user_id())
        .await?
        .require()?;

    app_state.gateway.delete_playlist(&playlist_id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// POST /api/playlists/:id/songs
/// Add a song; owner or collaborator
pub async fn add_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    principal: Principal,
    Json(req): Json<SongRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let playlist_id = PlaylistId::new(id);

    app_state
        .resolver
        .resolve(&playlist_id, principal.user_id())
        .await?
        .require()?;

    app_state
        .gateway
        .add_song(&playlist_id, &req.song_id, principal.user_id())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true })),
    ))
}

/// GET /api/playlists/:id/songs
/// The playlist with its song list; owner or collaborator
pub async fn get_playlist_songs(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    principal: Principal,
) -> Result<Json<PlaylistSongsResponse>> {
    let playlist_id = PlaylistId::new(id);

    app_state
        .resolver
        .resolve(&playlist_id, principal.user_id())
        .await?
        .require()?;

    let snapshot = app_state.gateway.get_playlist_songs(&playlist_id).await?;

    Ok(Json(PlaylistSongsResponse {
        id: snapshot.id,
        name: snapshot.name,
        username: snapshot.username,
        songs: snapshot.songs,
    }))
}

/// DELETE /api/playlists/:id/songs
/// Remove a song; owner or collaborator
pub async fn remove_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    principal: Principal,
    Json(req): Json<SongRequest>,
) -> Result<Json<serde_json::Value>> {
    let playlist_id = PlaylistId::new(id);

    app_state
        .resolver
        .resolve(&playlist_id, principal.user_id())
        .await?
        .require()?;

    app_state
        .gateway
        .remove_song(&playlist_id, &req.song_id, principal.user_id())
        .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}
