use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Profile row; `id` is the auth user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub username: Option<String>,
    pub weight_goal: Option<f64>,
    pub current_weight: Option<f64>,
    pub height: Option<f64>,
    pub daily_calorie_goal: Option<f64>,
    pub avatar_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Editable fields; every field is written, `None` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub weight_goal: Option<f64>,
    pub current_weight: Option<f64>,
    pub height: Option<f64>,
    pub daily_calorie_goal: Option<f64>,
    pub avatar_url: Option<String>,
}
