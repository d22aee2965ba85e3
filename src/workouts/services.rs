use tracing::info;
use uuid::Uuid;

use super::catalog::ExerciseCategory;
use super::dto::{CatalogResponse, CreateSessionRequest, ExerciseView, SessionPage};
use super::progress::{progress_points, ProgressPoint};
use super::repo_types::{WorkoutExercise, WorkoutSession};
use super::series::{series_lines, ExerciseForm};
use crate::error::{AppError, AppResult};
use crate::store::Store;

fn view(exercise: WorkoutExercise) -> ExerciseView {
    let lines = series_lines(&exercise.repetitions, &exercise.weight);
    ExerciseView { exercise, lines }
}

/// Slices one page out of `items`. `requested` is clamped to
/// `[1, total_pages]`; an empty list still has one (empty) page.
pub fn paginate<T: Clone>(
    items: &[T],
    page_size: usize,
    requested: Option<i64>,
) -> (Vec<T>, usize, usize) {
    let size = page_size.max(1);
    let total_pages = items.len().div_ceil(size).max(1);
    let page = requested
        .unwrap_or(1)
        .clamp(1, i64::try_from(total_pages).unwrap_or(i64::MAX));
    let page = usize::try_from(page).unwrap_or(1);

    let start = (page - 1) * size;
    let end = (start + size).min(items.len());
    let slice = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();
    (slice, page, total_pages)
}

pub async fn list_sessions(
    store: &dyn Store,
    user_id: Uuid,
    page_size: usize,
    requested: Option<i64>,
) -> AppResult<SessionPage> {
    let all = store.list_sessions(user_id).await?;
    let (sessions, page, total_pages) = paginate(&all, page_size, requested);
    Ok(SessionPage {
        sessions,
        page,
        total_pages,
        page_size: page_size.max(1),
        total: all.len(),
    })
}

pub async fn create_session(
    store: &dyn Store,
    user_id: Uuid,
    req: CreateSessionRequest,
) -> AppResult<WorkoutSession> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Session name is required".into()));
    }
    let session = store.insert_session(user_id, name).await?;
    info!(%user_id, session_id = %session.id, "workout session created");
    Ok(session)
}

async fn owned_session(
    store: &dyn Store,
    user_id: Uuid,
    session_id: Uuid,
) -> AppResult<WorkoutSession> {
    store
        .get_session(user_id, session_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout session not found".into()))
}

pub async fn list_exercises(
    store: &dyn Store,
    user_id: Uuid,
    session_id: Uuid,
) -> AppResult<Vec<ExerciseView>> {
    let session = owned_session(store, user_id, session_id).await?;
    let exercises = store.list_exercises(session.id).await?;
    Ok(exercises.into_iter().map(view).collect())
}

pub async fn get_exercise(
    store: &dyn Store,
    user_id: Uuid,
    exercise_id: Uuid,
) -> AppResult<ExerciseView> {
    store
        .get_exercise(user_id, exercise_id)
        .await?
        .map(view)
        .ok_or_else(|| AppError::NotFound("Exercise not found".into()))
}

/// Validates the form, then updates the given exercise or inserts a new one.
/// Returns the stored record and whether it was created.
pub async fn save_exercise(
    store: &dyn Store,
    user_id: Uuid,
    session_id: Uuid,
    form: ExerciseForm,
) -> AppResult<(ExerciseView, bool)> {
    let data = form.validate()?;
    let custom = data
        .category
        .parse::<ExerciseCategory>()
        .is_ok_and(|category| form.uses_custom_name(category));
    let session = owned_session(store, user_id, session_id).await?;

    let existing = match form.exercise_id {
        Some(id) => {
            let found = store
                .get_exercise(user_id, id)
                .await?
                .filter(|e| e.workout_id == session.id)
                .ok_or_else(|| AppError::NotFound("Exercise not found".into()))?;
            Some(found.id)
        }
        None => None,
    };

    if custom && store.add_custom_exercise(&data.category, &data.name).await? {
        info!(name = %data.name, category = %data.category, "custom exercise added to catalog");
    }

    match existing {
        Some(id) => {
            let updated = store
                .update_exercise(id, &data)
                .await?
                .ok_or_else(|| AppError::NotFound("Exercise not found".into()))?;
            info!(%user_id, exercise_id = %id, "exercise updated");
            Ok((view(updated), false))
        }
        None => {
            let created = store.insert_exercise(session.id, &data).await?;
            info!(%user_id, exercise_id = %created.id, "exercise created");
            Ok((view(created), true))
        }
    }
}

/// Most recent record of `name` from any other session of the caller.
/// `None` means there is no prior record.
pub async fn previous_performance(
    store: &dyn Store,
    user_id: Uuid,
    session_id: Uuid,
    name: &str,
) -> AppResult<Option<ExerciseView>> {
    if name.is_empty() {
        return Err(AppError::Validation("Exercise name is required".into()));
    }
    let session = owned_session(store, user_id, session_id).await?;
    let previous = store
        .latest_exercise_named(user_id, name, session.id)
        .await?;
    Ok(previous.map(view))
}

pub async fn exercise_progress(
    store: &dyn Store,
    user_id: Uuid,
    name: &str,
) -> AppResult<Vec<ProgressPoint>> {
    if name.is_empty() {
        return Err(AppError::Validation("Exercise name is required".into()));
    }
    let records = store.exercise_history(user_id, name).await?;
    Ok(progress_points(&records))
}

pub async fn exercise_catalog(
    store: &dyn Store,
    category: ExerciseCategory,
) -> AppResult<CatalogResponse> {
    let custom = store
        .list_custom_exercises(category.as_str())
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();
    Ok(CatalogResponse {
        category,
        predefined: category.predefined().iter().map(|s| s.to_string()).collect(),
        custom,
    })
}
