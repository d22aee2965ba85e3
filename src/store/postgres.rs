use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::Store;
use crate::meals::{self, Meal, NewMeal};
use crate::profile::{self, Profile, ProfileUpdate};
use crate::workouts::{self, CustomExercise, ExerciseData, WorkoutExercise, WorkoutSession};

pub async fn connect(database_url: &str) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("connect to database")
}

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_meal(&self, meal: NewMeal) -> anyhow::Result<Meal> {
        meals::repo::insert_meal(&self.db, &meal).await
    }

    async fn list_meals(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
        meals::repo::list_by_user(&self.db, user_id).await
    }

    async fn list_meals_between(
        &self,
        user_id: Uuid,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> anyhow::Result<Vec<Meal>> {
        meals::repo::list_between(&self.db, user_id, start, end).await
    }

    async fn delete_meals(&self, user_id: Uuid, ids: &[Uuid]) -> anyhow::Result<u64> {
        meals::repo::delete_many(&self.db, user_id, ids).await
    }

    async fn list_sessions(&self, user_id: Uuid) -> anyhow::Result<Vec<WorkoutSession>> {
        workouts::repo::list_sessions(&self.db, user_id).await
    }

    async fn insert_session(&self, user_id: Uuid, name: &str) -> anyhow::Result<WorkoutSession> {
        workouts::repo::insert_session(&self.db, user_id, name).await
    }

    async fn get_session(
        &self,
        user_id: Uuid,
        session_id: Uuid,
    ) -> anyhow::Result<Option<WorkoutSession>> {
        workouts::repo::get_session(&self.db, user_id, session_id).await
    }

    async fn list_exercises(&self, session_id: Uuid) -> anyhow::Result<Vec<WorkoutExercise>> {
        workouts::repo::list_exercises(&self.db, session_id).await
    }

    async fn get_exercise(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
    ) -> anyhow::Result<Option<WorkoutExercise>> {
        workouts::repo::get_exercise(&self.db, user_id, exercise_id).await
    }

    async fn insert_exercise(
        &self,
        session_id: Uuid,
        data: &ExerciseData,
    ) -> anyhow::Result<WorkoutExercise> {
        workouts::repo::insert_exercise(&self.db, session_id, data).await
    }

    async fn update_exercise(
        &self,
        exercise_id: Uuid,
        data: &ExerciseData,
    ) -> anyhow::Result<Option<WorkoutExercise>> {
        workouts::repo::update_exercise(&self.db, exercise_id, data).await
    }

    async fn latest_exercise_named(
        &self,
        user_id: Uuid,
        name: &str,
        exclude_session: Uuid,
    ) -> anyhow::Result<Option<WorkoutExercise>> {
        workouts::repo::latest_by_name(&self.db, user_id, name, exclude_session).await
    }

    async fn exercise_history(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> anyhow::Result<Vec<WorkoutExercise>> {
        workouts::repo::history_by_name(&self.db, user_id, name).await
    }

    async fn list_custom_exercises(&self, category: &str) -> anyhow::Result<Vec<CustomExercise>> {
        workouts::repo::list_custom(&self.db, category).await
    }

    async fn add_custom_exercise(&self, category: &str, name: &str) -> anyhow::Result<bool> {
        workouts::repo::insert_custom(&self.db, category, name).await
    }

    async fn get_profile(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
        profile::repo::get_profile(&self.db, user_id).await
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> anyhow::Result<Option<Profile>> {
        profile::repo::update_profile(&self.db, user_id, update).await
    }
}
