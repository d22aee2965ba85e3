use anyhow::Context;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::{Meal, NewMeal};

pub async fn insert_meal(db: &PgPool, meal: &NewMeal) -> anyhow::Result<Meal> {
    let row = sqlx::query_as::<_, Meal>(
        r#"
        INSERT INTO meals (id, user_id, name, calories, protein, carbs, fat, meal_type, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, user_id, name, calories, protein, carbs, fat, meal_type, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(meal.user_id)
    .bind(&meal.name)
    .bind(meal.macros.calories)
    .bind(meal.macros.protein)
    .bind(meal.macros.carbs)
    .bind(meal.macros.fat)
    .bind(&meal.meal_type)
    .bind(meal.created_at)
    .fetch_one(db)
    .await
    .context("insert meal")?;
    Ok(row)
}

/// All meals of a user, newest first.
pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
    let rows = sqlx::query_as::<_, Meal>(
        r#"
        SELECT id, user_id, name, calories, protein, carbs, fat, meal_type, created_at
          FROM meals
         WHERE user_id = $1
         ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("list meals by user")?;
    Ok(rows)
}

/// Meals created in `[start, end)`, newest first.
pub async fn list_between(
    db: &PgPool,
    user_id: Uuid,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> anyhow::Result<Vec<Meal>> {
    let rows = sqlx::query_as::<_, Meal>(
        r#"
        SELECT id, user_id, name, calories, protein, carbs, fat, meal_type, created_at
          FROM meals
         WHERE user_id = $1 AND created_at >= $2 AND created_at < $3
         ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
    .context("list meals in range")?;
    Ok(rows)
}

pub async fn delete_many(db: &PgPool, user_id: Uuid, ids: &[Uuid]) -> anyhow::Result<u64> {
    let res = sqlx::query(
        r#"
        DELETE FROM meals
         WHERE user_id = $1 AND id = ANY($2)
        "#,
    )
    .bind(user_id)
    .bind(ids)
    .execute(db)
    .await
    .context("batch delete meals")?;
    Ok(res.rows_affected())
}
