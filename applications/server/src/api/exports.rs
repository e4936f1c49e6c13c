/// Export API routes
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
use chorus_core::types::PlaylistId;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub target_email: String,
}

/// POST /api/playlists/:id/export
/// Queue an export of the playlist to an email address
///
/// Responds as soon as the delivery channel acknowledges the publish; the
/// fetch and the mail send happen in the exporter process.
pub async fn export_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    principal: Principal,
    Json(req): Json<ExportRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let playlist_id = PlaylistId::new(id);

    if !req.target_email.contains('@') {
        return Err(ServerError::BadRequest(format!(
            "invalid target email: {}",
            req.target_email
        )));
    }

    app_state
        .exports
        .submit(&playlist_id, principal.user_id(), &req.target_email)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "your export is being processed",
        })),
    ))
}
