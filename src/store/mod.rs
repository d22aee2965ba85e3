//! Backend boundary. Every call is one request/response round trip; callers
//! pass the authenticated user id explicitly.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::meals::{Meal, NewMeal};
use crate::profile::{Profile, ProfileUpdate};
use crate::workouts::{CustomExercise, ExerciseData, WorkoutExercise, WorkoutSession};

pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_meal(&self, meal: NewMeal) -> anyhow::Result<Meal>;
    /// Newest first.
    async fn list_meals(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>>;
    /// Meals created in `[start, end)`, newest first.
    async fn list_meals_between(
        &self,
        user_id: Uuid,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> anyhow::Result<Vec<Meal>>;
    async fn delete_meals(&self, user_id: Uuid, ids: &[Uuid]) -> anyhow::Result<u64>;

    /// Newest first.
    async fn list_sessions(&self, user_id: Uuid) -> anyhow::Result<Vec<WorkoutSession>>;
    async fn insert_session(&self, user_id: Uuid, name: &str) -> anyhow::Result<WorkoutSession>;
    async fn get_session(
        &self,
        user_id: Uuid,
        session_id: Uuid,
    ) -> anyhow::Result<Option<WorkoutSession>>;

    /// Oldest first.
    async fn list_exercises(&self, session_id: Uuid) -> anyhow::Result<Vec<WorkoutExercise>>;
    async fn get_exercise(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
    ) -> anyhow::Result<Option<WorkoutExercise>>;
    async fn insert_exercise(
        &self,
        session_id: Uuid,
        data: &ExerciseData,
    ) -> anyhow::Result<WorkoutExercise>;
    async fn update_exercise(
        &self,
        exercise_id: Uuid,
        data: &ExerciseData,
    ) -> anyhow::Result<Option<WorkoutExercise>>;
    async fn latest_exercise_named(
        &self,
        user_id: Uuid,
        name: &str,
        exclude_session: Uuid,
    ) -> anyhow::Result<Option<WorkoutExercise>>;
    /// Oldest first.
    async fn exercise_history(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> anyhow::Result<Vec<WorkoutExercise>>;

    async fn list_custom_exercises(&self, category: &str) -> anyhow::Result<Vec<CustomExercise>>;
    /// `true` when a new catalog entry was created.
    async fn add_custom_exercise(&self, category: &str, name: &str) -> anyhow::Result<bool>;

    async fn get_profile(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>>;
    async fn update_profile(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> anyhow::Result<Option<Profile>>;
}
