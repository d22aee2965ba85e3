use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{CustomExercise, ExerciseData, WorkoutExercise, WorkoutSession};

const EXERCISE_COLUMNS: &str = "e.id, e.workout_id, e.name, e.category, e.series, e.repetitions, \
     e.weight, e.rest_time_seconds, e.notes, e.created_at";

// ---- Sessions ----

/// Sessions of a user, newest first.
pub async fn list_sessions(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<WorkoutSession>> {
    let rows = sqlx::query_as::<_, WorkoutSession>(
        r#"
        SELECT id, user_id, name, created_at
          FROM workouts
         WHERE user_id = $1
         ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("list workout sessions")?;
    Ok(rows)
}

pub async fn insert_session(db: &PgPool, user_id: Uuid, name: &str) -> anyhow::Result<WorkoutSession> {
    let row = sqlx::query_as::<_, WorkoutSession>(
        r#"
        INSERT INTO workouts (id, user_id, name)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, name, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(name)
    .fetch_one(db)
    .await
    .context("insert workout session")?;
    Ok(row)
}

pub async fn get_session(
    db: &PgPool,
    user_id: Uuid,
    session_id: Uuid,
) -> anyhow::Result<Option<WorkoutSession>> {
    let row = sqlx::query_as::<_, WorkoutSession>(
        r#"
        SELECT id, user_id, name, created_at
          FROM workouts
         WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(session_id)
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("get workout session")?;
    Ok(row)
}

// ---- Exercises ----

/// Exercises of one session in insertion order.
pub async fn list_exercises(db: &PgPool, session_id: Uuid) -> anyhow::Result<Vec<WorkoutExercise>> {
    let sql = format!(
        "SELECT {EXERCISE_COLUMNS} FROM workout_exercises e \
         WHERE e.workout_id = $1 ORDER BY e.created_at ASC, e.id ASC"
    );
    let rows = sqlx::query_as::<_, WorkoutExercise>(&sql)
        .bind(session_id)
        .fetch_all(db)
        .await
        .context("list exercises by session")?;
    Ok(rows)
}

/// An exercise, only if its parent session belongs to `user_id`.
pub async fn get_exercise(
    db: &PgPool,
    user_id: Uuid,
    exercise_id: Uuid,
) -> anyhow::Result<Option<WorkoutExercise>> {
    let sql = format!(
        "SELECT {EXERCISE_COLUMNS} FROM workout_exercises e \
         JOIN workouts w ON w.id = e.workout_id \
         WHERE e.id = $1 AND w.user_id = $2"
    );
    let row = sqlx::query_as::<_, WorkoutExercise>(&sql)
        .bind(exercise_id)
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("get exercise")?;
    Ok(row)
}

pub async fn insert_exercise(
    db: &PgPool,
    session_id: Uuid,
    data: &ExerciseData,
) -> anyhow::Result<WorkoutExercise> {
    let row = sqlx::query_as::<_, WorkoutExercise>(
        r#"
        INSERT INTO workout_exercises
            (id, workout_id, name, category, series, repetitions, weight, rest_time_seconds, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, workout_id, name, category, series, repetitions, weight,
                  rest_time_seconds, notes, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(session_id)
    .bind(&data.name)
    .bind(&data.category)
    .bind(data.series)
    .bind(&data.repetitions)
    .bind(&data.weight)
    .bind(data.rest_time_seconds)
    .bind(&data.notes)
    .fetch_one(db)
    .await
    .context("insert exercise")?;
    Ok(row)
}

pub async fn update_exercise(
    db: &PgPool,
    exercise_id: Uuid,
    data: &ExerciseData,
) -> anyhow::Result<Option<WorkoutExercise>> {
    let row = sqlx::query_as::<_, WorkoutExercise>(
        r#"
        UPDATE workout_exercises
           SET name = $2, category = $3, series = $4, repetitions = $5, weight = $6,
               rest_time_seconds = $7, notes = $8
         WHERE id = $1
        RETURNING id, workout_id, name, category, series, repetitions, weight,
                  rest_time_seconds, notes, created_at
        "#,
    )
    .bind(exercise_id)
    .bind(&data.name)
    .bind(&data.category)
    .bind(data.series)
    .bind(&data.repetitions)
    .bind(&data.weight)
    .bind(data.rest_time_seconds)
    .bind(&data.notes)
    .fetch_optional(db)
    .await
    .context("update exercise")?;
    Ok(row)
}

/// Newest exercise with exactly this name outside `exclude_session`.
pub async fn latest_by_name(
    db: &PgPool,
    user_id: Uuid,
    name: &str,
    exclude_session: Uuid,
) -> anyhow::Result<Option<WorkoutExercise>> {
    let sql = format!(
        "SELECT {EXERCISE_COLUMNS} FROM workout_exercises e \
         JOIN workouts w ON w.id = e.workout_id \
         WHERE w.user_id = $1 AND e.name = $2 AND e.workout_id <> $3 \
         ORDER BY e.created_at DESC LIMIT 1"
    );
    let row = sqlx::query_as::<_, WorkoutExercise>(&sql)
        .bind(user_id)
        .bind(name)
        .bind(exclude_session)
        .fetch_optional(db)
        .await
        .context("previous performance lookup")?;
    Ok(row)
}

/// Every record of one exercise name, oldest first.
pub async fn history_by_name(
    db: &PgPool,
    user_id: Uuid,
    name: &str,
) -> anyhow::Result<Vec<WorkoutExercise>> {
    let sql = format!(
        "SELECT {EXERCISE_COLUMNS} FROM workout_exercises e \
         JOIN workouts w ON w.id = e.workout_id \
         WHERE w.user_id = $1 AND e.name = $2 \
         ORDER BY e.created_at ASC"
    );
    let rows = sqlx::query_as::<_, WorkoutExercise>(&sql)
        .bind(user_id)
        .bind(name)
        .fetch_all(db)
        .await
        .context("exercise history")?;
    Ok(rows)
}

// ---- Custom catalog ----

pub async fn list_custom(db: &PgPool, category: &str) -> anyhow::Result<Vec<CustomExercise>> {
    let rows = sqlx::query_as::<_, CustomExercise>(
        r#"
        SELECT id, category, name, created_at
          FROM custom_exercises
         WHERE category = $1
         ORDER BY name ASC
        "#,
    )
    .bind(category)
    .fetch_all(db)
    .await
    .context("list custom exercises")?;
    Ok(rows)
}

/// Adds a catalog entry unless (category, name) already exists.
pub async fn insert_custom(db: &PgPool, category: &str, name: &str) -> anyhow::Result<bool> {
    let res = sqlx::query(
        r#"
        INSERT INTO custom_exercises (id, category, name)
        VALUES ($1, $2, $3)
        ON CONFLICT (category, name) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(category)
    .bind(name)
    .execute(db)
    .await
    .context("insert custom exercise")?;
    Ok(res.rows_affected() > 0)
}
