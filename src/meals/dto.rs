use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::nutrition::Macros;

#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    #[serde(default)]
    pub name: String,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub meal_type: Option<String>, // defaults to breakfast, as in the entry form
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub eaten_at: Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct DiaryQuery {
    pub date: Option<String>, // YYYY-MM-DD, local
    pub tz_offset_minutes: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub tz_offset_minutes: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct DailySummary {
    pub date: String,
    pub totals: Macros,
    pub meal_count: usize,
    pub calorie_goal: Option<f64>,
    pub remaining_calories: Option<f64>,
}
