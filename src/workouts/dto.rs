use serde::{Deserialize, Serialize};

use super::catalog::ExerciseCategory;
use super::repo_types::{WorkoutExercise, WorkoutSession};
use super::series::SeriesLine;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: ExerciseCategory,
}

#[derive(Debug, Serialize)]
pub struct SessionPage {
    pub sessions: Vec<WorkoutSession>,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total: usize,
}

/// A stored exercise with its series rendered for display.
#[derive(Debug, Serialize)]
pub struct ExerciseView {
    #[serde(flatten)]
    pub exercise: WorkoutExercise,
    pub lines: Vec<SeriesLine>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub category: ExerciseCategory,
    pub predefined: Vec<String>,
    pub custom: Vec<String>,
}
