pub mod catalog;
mod dto;
mod handlers;
pub mod progress;
pub mod repo;
mod repo_types;
pub mod series;
pub mod services;

pub use repo_types::{CustomExercise, ExerciseData, WorkoutExercise, WorkoutSession};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::session_routes())
        .merge(handlers::exercise_routes())
}
