pub mod diary;
mod dto;
mod handlers;
pub mod repo;
mod repo_types;
pub mod services;

pub use repo_types::{Meal, NewMeal};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::meal_routes())
        .merge(handlers::diary_routes())
}
