/// Collaboration API routes
///
/// Only the owner may grant or revoke; the gates use the owner-only
/// resolver variant.
use crate::{error::Result, middleware::Principal, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chorus_core::types::{PlaylistId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GrantRequest {
    pub user_id: UserId,
}

#[derive(Debug, Serialize)]
pub struct GrantResponse {
    pub collaboration_id: String,
}

/// POST /api/playlists/:id/collaborations
/// Grant a user access to a playlist
pub async fn grant(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    principal: Principal,
    Json(req): Json<GrantRequest>,
) -> Result<(StatusCode, Json<GrantResponse>)> {
    let playlist_id = PlaylistId::new(id);

    app_state
        .resolver
        .resolve_owner_only(&playlist_id, principal.user_id())
        .await?
        .require()?;

    let collaboration_id = app_state
        .collaborations
        .grant(&playlist_id, &req.user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(GrantResponse { collaboration_id }),
    ))
}

/// DELETE /api/playlists/:id/collaborations/:user_id
/// Revoke a user's access to a playlist
pub async fn revoke(
    Path((id, user_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
    principal: Principal,
) -> Result<Json<serde_json::Value>> {
    let playlist_id = PlaylistId::new(id);
    let collaborator = UserId::new(user_id);

    app_state
        .resolver
        .resolve_owner_only(&playlist_id, principal.user_id())
        .await?
        .require()?;

    app_state
        .collaborations
        .revoke(&playlist_id, &collaborator)
        .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}
