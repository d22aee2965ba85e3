use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::food_lookup::is_valid_barcode;
use super::scaler::{MacroScaler, Macros};
use crate::{
    auth::AuthUser,
    error::{AppError, AppResult},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ScaleRequest {
    pub reference: Macros,
    /// Grams as typed; omitted means the 100 g reference.
    pub quantity: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FoodResponse {
    pub barcode: String,
    pub name: String,
    pub per_100g: Macros,
    pub scaled: Macros,
}

pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/nutrition/scale", post(scale_macros))
        .route("/foods/barcode/:code", get(lookup_barcode))
}

#[instrument(skip(payload))]
pub async fn scale_macros(
    AuthUser(_user_id): AuthUser,
    Json(payload): Json<ScaleRequest>,
) -> Json<Macros> {
    let mut scaler = MacroScaler::with_reference(payload.reference);
    if let Some(quantity) = payload.quantity {
        scaler.set_quantity(quantity);
    }
    Json(scaler.values())
}

#[instrument(skip(state))]
pub async fn lookup_barcode(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(code): Path<String>,
) -> AppResult<Json<FoodResponse>> {
    let code = code.trim().to_string();
    if !is_valid_barcode(&code) {
        warn!(%code, "invalid barcode");
        return Err(AppError::Validation(
            "Barcode must be 8 to 14 digits".into(),
        ));
    }

    let product = state
        .food
        .lookup(&code)
        .await
        .map_err(|e| AppError::Upstream(format!("food lookup failed: {e}")))?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

    info!(%user_id, barcode = %product.barcode, "food product found");
    Ok(Json(FoodResponse {
        scaled: MacroScaler::with_reference(product.per_100g).values(),
        barcode: product.barcode,
        name: product.name,
        per_100g: product.per_100g,
    }))
}
