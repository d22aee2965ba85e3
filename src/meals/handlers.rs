use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use time::{OffsetDateTime, UtcOffset};
use tracing::{instrument, warn};

use super::diary::{local_today, parse_date, DiaryDay};
use super::dto::{CreateMealRequest, DailySummary, DiaryQuery, SummaryQuery};
use super::repo_types::Meal;
use super::services;
use crate::{
    auth::AuthUser,
    error::{AppError, AppResult},
    state::AppState,
};

pub fn meal_routes() -> Router<AppState> {
    Router::new().route("/meals", get(list_meals).post(create_meal))
}

pub fn diary_routes() -> Router<AppState> {
    Router::new()
        .route("/diary", get(get_diary))
        .route("/summary/today", get(get_today_summary))
}

/// Offset in minutes east of UTC; out-of-range values are rejected.
pub(crate) fn resolve_offset(requested: Option<i32>, fallback_minutes: i32) -> AppResult<UtcOffset> {
    let minutes = requested.unwrap_or(fallback_minutes);
    UtcOffset::from_whole_seconds(minutes.saturating_mul(60)).map_err(|_| {
        AppError::Validation(format!("tz_offset_minutes {minutes} is out of range"))
    })
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<Meal>>> {
    let meals =
        services::meal_history(state.store.as_ref(), user_id, state.config.history_limit).await?;
    Ok(Json(meals))
}

#[instrument(skip(state, payload))]
pub async fn create_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateMealRequest>,
) -> AppResult<(StatusCode, HeaderMap, Json<Meal>)> {
    let meal = services::create_meal(state.store.as_ref(), user_id, payload).await?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/api/v1/meals/{}", meal.id)) {
        headers.insert(header::LOCATION, location);
    }
    Ok((StatusCode::CREATED, headers, Json(meal)))
}

#[instrument(skip(state))]
pub async fn get_diary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<DiaryQuery>,
) -> AppResult<Json<DiaryDay>> {
    let offset = resolve_offset(q.tz_offset_minutes, state.config.diary_utc_offset_minutes)?;
    let date = match q.date.as_deref() {
        Some(text) => parse_date(text).ok_or_else(|| {
            warn!(date = %text, "invalid diary date");
            AppError::Validation("date must be formatted as YYYY-MM-DD".into())
        })?,
        None => local_today(OffsetDateTime::now_utc(), offset),
    };

    let day = services::diary_for_day(state.store.as_ref(), user_id, date, offset).await?;
    Ok(Json(day))
}

#[instrument(skip(state))]
pub async fn get_today_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<SummaryQuery>,
) -> AppResult<Json<DailySummary>> {
    let offset = resolve_offset(q.tz_offset_minutes, state.config.diary_utc_offset_minutes)?;
    let summary =
        services::daily_summary(state.store.as_ref(), user_id, OffsetDateTime::now_utc(), offset)
            .await?;
    Ok(Json(summary))
}
