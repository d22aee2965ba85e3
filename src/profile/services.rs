use tracing::info;
use uuid::Uuid;

use super::dto::UpdateProfileRequest;
use super::repo_types::{Profile, ProfileUpdate};
use crate::error::{AppError, AppResult};
use crate::store::Store;

fn text_field(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Blank or missing text clears the field; anything else must be a
/// non-negative number.
fn numeric_field(field: &str, value: Option<&str>) -> AppResult<Option<f64>> {
    let Some(text) = value.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    match text.replace(',', ".").parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(Some(n)),
        _ => Err(AppError::Validation(format!("{field} must be a number"))),
    }
}

pub fn parse_update(req: UpdateProfileRequest) -> AppResult<ProfileUpdate> {
    Ok(ProfileUpdate {
        weight_goal: numeric_field("weight_goal", req.weight_goal.as_deref())?,
        current_weight: numeric_field("current_weight", req.current_weight.as_deref())?,
        height: numeric_field("height", req.height.as_deref())?,
        daily_calorie_goal: numeric_field("daily_calorie_goal", req.daily_calorie_goal.as_deref())?,
        username: text_field(req.username),
        avatar_url: text_field(req.avatar_url),
    })
}

pub async fn get_profile(store: &dyn Store, user_id: Uuid) -> AppResult<Option<Profile>> {
    Ok(store.get_profile(user_id).await?)
}

pub async fn update_profile(
    store: &dyn Store,
    user_id: Uuid,
    req: UpdateProfileRequest,
) -> AppResult<Profile> {
    let update = parse_update(req)?;
    let profile = store
        .update_profile(user_id, &update)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".into()))?;
    info!(%user_id, "profile updated");
    Ok(profile)
}
