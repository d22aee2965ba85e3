use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use super::dto::{
    CatalogQuery, CatalogResponse, CreateSessionRequest, ExerciseView, NameQuery, PageQuery,
    SessionPage,
};
use super::progress::ProgressPoint;
use super::repo_types::WorkoutSession;
use super::series::ExerciseForm;
use super::services;
use crate::{auth::AuthUser, error::AppResult, state::AppState};

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/workouts", get(list_sessions).post(create_session))
        .route(
            "/workouts/:id/exercises",
            get(list_exercises).post(save_exercise),
        )
        .route("/workouts/:id/previous", get(previous_performance))
}

pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/exercises/:id", get(get_exercise))
        .route("/exercise-catalog", get(exercise_catalog))
        .route("/progress", get(exercise_progress))
}

#[instrument(skip(state))]
pub async fn list_sessions(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<PageQuery>,
) -> AppResult<Json<SessionPage>> {
    let page = services::list_sessions(
        state.store.as_ref(),
        user_id,
        state.config.sessions_page_size,
        q.page,
    )
    .await?;
    Ok(Json(page))
}

#[instrument(skip(state, payload))]
pub async fn create_session(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateSessionRequest>,
) -> AppResult<(StatusCode, Json<WorkoutSession>)> {
    let session = services::create_session(state.store.as_ref(), user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[instrument(skip(state))]
pub async fn list_exercises(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<Vec<ExerciseView>>> {
    let exercises = services::list_exercises(state.store.as_ref(), user_id, session_id).await?;
    Ok(Json(exercises))
}

#[instrument(skip(state, form))]
pub async fn save_exercise(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(session_id): Path<Uuid>,
    Json(form): Json<ExerciseForm>,
) -> AppResult<(StatusCode, Json<ExerciseView>)> {
    let (exercise, created) =
        services::save_exercise(state.store.as_ref(), user_id, session_id, form).await?;
    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(exercise)))
}

#[instrument(skip(state))]
pub async fn previous_performance(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(session_id): Path<Uuid>,
    Query(q): Query<NameQuery>,
) -> AppResult<Json<Option<ExerciseView>>> {
    let previous =
        services::previous_performance(state.store.as_ref(), user_id, session_id, &q.name).await?;
    Ok(Json(previous))
}

#[instrument(skip(state))]
pub async fn get_exercise(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(exercise_id): Path<Uuid>,
) -> AppResult<Json<ExerciseView>> {
    let exercise = services::get_exercise(state.store.as_ref(), user_id, exercise_id).await?;
    Ok(Json(exercise))
}

#[instrument(skip(state))]
pub async fn exercise_catalog(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(q): Query<CatalogQuery>,
) -> AppResult<Json<CatalogResponse>> {
    let catalog = services::exercise_catalog(state.store.as_ref(), q.category).await?;
    Ok(Json(catalog))
}

#[instrument(skip(state))]
pub async fn exercise_progress(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<NameQuery>,
) -> AppResult<Json<Vec<ProgressPoint>>> {
    let points = services::exercise_progress(state.store.as_ref(), user_id, &q.name).await?;
    Ok(Json(points))
}
