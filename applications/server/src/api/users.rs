/// User registration API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use chorus_core::types::CreateUser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: chorus_core::UserId,
}

/// POST /api/users
/// Register a new user
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let password_hash = app_state.auth_service.hash_password(&req.password)?;

    let user_id = chorus_storage::users::create(
        app_state.store.pool(),
        CreateUser {
            username: req.username,
            password_hash,
            fullname: req.fullname,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse { user_id })))
}
