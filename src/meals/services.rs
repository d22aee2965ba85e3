use time::{Date, OffsetDateTime, UtcOffset};
use tracing::{info, warn};
use uuid::Uuid;

use super::diary::{build_diary, day_window, local_today, sum_macros, DiaryDay};
use super::dto::{CreateMealRequest, DailySummary};
use super::repo_types::{Meal, NewMeal};
use crate::error::{AppError, AppResult};
use crate::nutrition::{scaler::round2, Macros};
use crate::store::Store;

const DEFAULT_MEAL_TYPE: &str = "breakfast";

pub fn validate_new_meal(
    user_id: Uuid,
    req: CreateMealRequest,
    now: OffsetDateTime,
) -> AppResult<NewMeal> {
    let name = req.name.trim().to_string();
    let calories = match (name.is_empty(), req.calories) {
        (false, Some(c)) => c,
        _ => {
            return Err(AppError::Validation(
                "Meal name and calories are required".into(),
            ))
        }
    };

    let macros = Macros {
        calories,
        protein: req.protein.unwrap_or(0.0),
        carbs: req.carbs.unwrap_or(0.0),
        fat: req.fat.unwrap_or(0.0),
    };
    for (field, value) in [
        ("calories", macros.calories),
        ("protein", macros.protein),
        ("carbs", macros.carbs),
        ("fat", macros.fat),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::Validation(format!(
                "{field} must be a non-negative number"
            )));
        }
    }

    let meal_type = req
        .meal_type
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_MEAL_TYPE.to_string());

    Ok(NewMeal {
        user_id,
        name,
        macros,
        meal_type,
        created_at: req.eaten_at.unwrap_or(now),
    })
}

pub async fn create_meal(
    store: &dyn Store,
    user_id: Uuid,
    req: CreateMealRequest,
) -> AppResult<Meal> {
    let new_meal = validate_new_meal(user_id, req, OffsetDateTime::now_utc())?;
    let meal = store.insert_meal(new_meal).await?;
    info!(%user_id, meal_id = %meal.id, "meal created");
    Ok(meal)
}

/// Splits a newest-first history into the rows to show and the ids to prune.
pub fn split_history(mut meals: Vec<Meal>, keep: usize) -> (Vec<Meal>, Vec<Uuid>) {
    if meals.len() <= keep {
        return (meals, Vec::new());
    }
    let expired = meals.split_off(keep).into_iter().map(|m| m.id).collect();
    (meals, expired)
}

/// Returns the newest `keep` meals and deletes every older one. A failed
/// delete is logged only; the history is still returned.
pub async fn meal_history(store: &dyn Store, user_id: Uuid, keep: usize) -> AppResult<Vec<Meal>> {
    let meals = store.list_meals(user_id).await?;
    let (kept, expired) = split_history(meals, keep);

    if !expired.is_empty() {
        match store.delete_meals(user_id, &expired).await {
            Ok(deleted) => info!(%user_id, deleted, "pruned meal history"),
            Err(e) => warn!(%user_id, error = %e, count = expired.len(), "meal history prune failed"),
        }
    }
    Ok(kept)
}

fn date_out_of_range(date: Date) -> AppError {
    AppError::Validation(format!("date {date} is out of range"))
}

pub async fn diary_for_day(
    store: &dyn Store,
    user_id: Uuid,
    date: Date,
    offset: UtcOffset,
) -> AppResult<DiaryDay> {
    let (start, end) = day_window(date, offset).ok_or_else(|| date_out_of_range(date))?;
    let meals = store.list_meals_between(user_id, start, end).await?;
    build_diary(&meals, date, offset).ok_or_else(|| date_out_of_range(date))
}

pub async fn daily_summary(
    store: &dyn Store,
    user_id: Uuid,
    now: OffsetDateTime,
    offset: UtcOffset,
) -> AppResult<DailySummary> {
    let today = local_today(now, offset);
    let (start, end) = day_window(today, offset).ok_or_else(|| date_out_of_range(today))?;
    let meals = store.list_meals_between(user_id, start, end).await?;
    let totals = sum_macros(&meals);

    let calorie_goal = store
        .get_profile(user_id)
        .await?
        .and_then(|p| p.daily_calorie_goal);

    Ok(DailySummary {
        date: today.to_string(),
        totals,
        meal_count: meals.len(),
        calorie_goal,
        remaining_calories: calorie_goal.map(|goal| round2(goal - totals.calories)),
    })
}
