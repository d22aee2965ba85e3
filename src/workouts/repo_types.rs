use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// One exercise of a session. `repetitions[i]` and `weight[i]` belong to
/// series `i`; `None` marks an entry that did not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutExercise {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub name: String,
    pub category: String,
    pub series: i32,
    pub repetitions: Vec<Option<i32>>,
    pub weight: Vec<Option<f64>>,
    pub rest_time_seconds: Option<i32>,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Full replacement payload for an exercise row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseData {
    pub name: String,
    pub category: String,
    pub series: i32,
    pub repetitions: Vec<Option<i32>>,
    pub weight: Vec<Option<f64>>,
    pub rest_time_seconds: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CustomExercise {
    pub id: Uuid,
    pub category: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
