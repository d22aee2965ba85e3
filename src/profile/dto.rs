use serde::Deserialize;

/// Edit form. Numeric fields arrive as the text typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub weight_goal: Option<String>,
    pub current_weight: Option<String>,
    pub height: Option<String>,
    pub daily_calorie_goal: Option<String>,
    pub avatar_url: Option<String>,
}
