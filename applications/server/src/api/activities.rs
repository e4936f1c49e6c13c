/// Activity log API routes
use crate::{error::Result, middleware::Principal, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use chorus_core::types::{ActivityEntry, PlaylistId};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActivitiesResponse {
    pub playlist_id: PlaylistId,
    pub activities: Vec<ActivityEntry>,
}

/// GET /api/playlists/:id/activities
/// The playlist's membership-change history; owner or collaborator
pub async fn list_activities(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    principal: Principal,
) -> Result<Json<ActivitiesResponse>> {
    let playlist_id = PlaylistId::new(id);

    app_state
        .resolver
        .resolve(&playlist_id, principal.user_id())
        .await?
        .require()?;

    let activities = app_state.activities.list(&playlist_id).await?;

    Ok(Json(ActivitiesResponse {
        playlist_id,
        activities,
    }))
}
