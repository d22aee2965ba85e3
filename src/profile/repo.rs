use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{Profile, ProfileUpdate};

pub async fn get_profile(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
    let row = sqlx::query_as::<_, Profile>(
        r#"
        SELECT id, username, weight_goal, current_weight, height, daily_calorie_goal,
               avatar_url, updated_at
          FROM profiles
         WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("get profile")?;
    Ok(row)
}

pub async fn update_profile(
    db: &PgPool,
    user_id: Uuid,
    update: &ProfileUpdate,
) -> anyhow::Result<Option<Profile>> {
    let row = sqlx::query_as::<_, Profile>(
        r#"
        UPDATE profiles
           SET username = $2, weight_goal = $3, current_weight = $4, height = $5,
               daily_calorie_goal = $6, avatar_url = $7, updated_at = NOW()
         WHERE id = $1
        RETURNING id, username, weight_goal, current_weight, height, daily_calorie_goal,
                  avatar_url, updated_at
        "#,
    )
    .bind(user_id)
    .bind(&update.username)
    .bind(update.weight_goal)
    .bind(update.current_weight)
    .bind(update.height)
    .bind(update.daily_calorie_goal)
    .bind(&update.avatar_url)
    .fetch_optional(db)
    .await
    .context("update profile")?;
    Ok(row)
}
