use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use super::dto::UpdateProfileRequest;
use super::repo_types::Profile;
use super::services;
use crate::{auth::AuthUser, error::AppResult, state::AppState};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

/// `null` when the auth provider has not created the row yet.
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Option<Profile>>> {
    let profile = services::get_profile(state.store.as_ref(), user_id).await?;
    Ok(Json(profile))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<Profile>> {
    let profile = services::update_profile(state.store.as_ref(), user_id, payload).await?;
    Ok(Json(profile))
}
