pub mod food_lookup;
mod handlers;
pub mod scaler;

pub use food_lookup::{FoodLookup, OpenFoodFacts};
pub use scaler::Macros;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::nutrition_routes()
}
