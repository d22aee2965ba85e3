use std::sync::Mutex;

use async_trait::async_trait;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::Store;
use crate::meals::{Meal, NewMeal};
use crate::profile::{Profile, ProfileUpdate};
use crate::workouts::{CustomExercise, ExerciseData, WorkoutExercise, WorkoutSession};

/// In-process stand-in for the Postgres store.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    meals: Vec<Meal>,
    sessions: Vec<WorkoutSession>,
    exercises: Vec<WorkoutExercise>,
    custom: Vec<CustomExercise>,
    profiles: Vec<Profile>,
    deleted_batches: Vec<Vec<Uuid>>,
    fail_deletes: bool,
    last_tick: Option<OffsetDateTime>,
}

impl Inner {
    // Strictly increasing timestamps so ordering is deterministic.
    fn tick(&mut self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        let next = match self.last_tick {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_tick = Some(next);
        next
    }

    fn owns_session(&self, user_id: Uuid, session_id: Uuid) -> bool {
        self.sessions
            .iter()
            .any(|s| s.id == session_id && s.user_id == user_id)
    }
}

impl MemoryStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn deleted_meal_batches(&self) -> Vec<Vec<Uuid>> {
        self.lock().deleted_batches.clone()
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.lock().fail_deletes = fail;
    }

    pub fn put_profile(&self, user_id: Uuid, daily_calorie_goal: Option<f64>) {
        let mut inner = self.lock();
        let updated_at = inner.tick();
        inner.profiles.retain(|p| p.id != user_id);
        inner.profiles.push(Profile {
            id: user_id,
            username: None,
            weight_goal: None,
            current_weight: None,
            height: None,
            daily_calorie_goal,
            avatar_url: None,
            updated_at,
        });
    }
}

fn newest_first<T>(rows: &mut [T], key: impl Fn(&T) -> (OffsetDateTime, Uuid)) {
    rows.sort_by_key(|r| std::cmp::Reverse(key(r)));
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_meal(&self, meal: NewMeal) -> anyhow::Result<Meal> {
        let row = Meal {
            id: Uuid::new_v4(),
            user_id: meal.user_id,
            name: meal.name,
            calories: meal.macros.calories,
            protein: meal.macros.protein,
            carbs: meal.macros.carbs,
            fat: meal.macros.fat,
            meal_type: meal.meal_type,
            created_at: meal.created_at,
        };
        self.lock().meals.push(row.clone());
        Ok(row)
    }

    async fn list_meals(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
        let mut rows: Vec<Meal> = self
            .lock()
            .meals
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        newest_first(&mut rows, |m| (m.created_at, m.id));
        Ok(rows)
    }

    async fn list_meals_between(
        &self,
        user_id: Uuid,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> anyhow::Result<Vec<Meal>> {
        let mut rows = self.list_meals(user_id).await?;
        rows.retain(|m| m.created_at >= start && m.created_at < end);
        Ok(rows)
    }

    async fn delete_meals(&self, user_id: Uuid, ids: &[Uuid]) -> anyhow::Result<u64> {
        let mut inner = self.lock();
        if inner.fail_deletes {
            anyhow::bail!("delete rejected by backend");
        }
        inner.deleted_batches.push(ids.to_vec());
        let before = inner.meals.len();
        inner
            .meals
            .retain(|m| !(m.user_id == user_id && ids.contains(&m.id)));
        Ok((before - inner.meals.len()) as u64)
    }

    async fn list_sessions(&self, user_id: Uuid) -> anyhow::Result<Vec<WorkoutSession>> {
        let mut rows: Vec<WorkoutSession> = self
            .lock()
            .sessions
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        newest_first(&mut rows, |s| (s.created_at, s.id));
        Ok(rows)
    }

    async fn insert_session(&self, user_id: Uuid, name: &str) -> anyhow::Result<WorkoutSession> {
        let mut inner = self.lock();
        let row = WorkoutSession {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            created_at: inner.tick(),
        };
        inner.sessions.push(row.clone());
        Ok(row)
    }

    async fn get_session(
        &self,
        user_id: Uuid,
        session_id: Uuid,
    ) -> anyhow::Result<Option<WorkoutSession>> {
        Ok(self
            .lock()
            .sessions
            .iter()
            .find(|s| s.id == session_id && s.user_id == user_id)
            .cloned())
    }

    async fn list_exercises(&self, session_id: Uuid) -> anyhow::Result<Vec<WorkoutExercise>> {
        // Insertion order is creation order.
        Ok(self
            .lock()
            .exercises
            .iter()
            .filter(|e| e.workout_id == session_id)
            .cloned()
            .collect())
    }

    async fn get_exercise(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
    ) -> anyhow::Result<Option<WorkoutExercise>> {
        let inner = self.lock();
        Ok(inner
            .exercises
            .iter()
            .find(|e| e.id == exercise_id && inner.owns_session(user_id, e.workout_id))
            .cloned())
    }

    async fn insert_exercise(
        &self,
        session_id: Uuid,
        data: &ExerciseData,
    ) -> anyhow::Result<WorkoutExercise> {
        let mut inner = self.lock();
        let row = WorkoutExercise {
            id: Uuid::new_v4(),
            workout_id: session_id,
            name: data.name.clone(),
            category: data.category.clone(),
            series: data.series,
            repetitions: data.repetitions.clone(),
            weight: data.weight.clone(),
            rest_time_seconds: data.rest_time_seconds,
            notes: data.notes.clone(),
            created_at: inner.tick(),
        };
        inner.exercises.push(row.clone());
        Ok(row)
    }

    async fn update_exercise(
        &self,
        exercise_id: Uuid,
        data: &ExerciseData,
    ) -> anyhow::Result<Option<WorkoutExercise>> {
        let mut inner = self.lock();
        let Some(row) = inner.exercises.iter_mut().find(|e| e.id == exercise_id) else {
            return Ok(None);
        };
        row.name = data.name.clone();
        row.category = data.category.clone();
        row.series = data.series;
        row.repetitions = data.repetitions.clone();
        row.weight = data.weight.clone();
        row.rest_time_seconds = data.rest_time_seconds;
        row.notes = data.notes.clone();
        Ok(Some(row.clone()))
    }

    async fn latest_exercise_named(
        &self,
        user_id: Uuid,
        name: &str,
        exclude_session: Uuid,
    ) -> anyhow::Result<Option<WorkoutExercise>> {
        let inner = self.lock();
        Ok(inner
            .exercises
            .iter()
            .filter(|e| {
                e.name == name
                    && e.workout_id != exclude_session
                    && inner.owns_session(user_id, e.workout_id)
            })
            .max_by_key(|e| e.created_at)
            .cloned())
    }

    async fn exercise_history(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> anyhow::Result<Vec<WorkoutExercise>> {
        let inner = self.lock();
        let mut rows: Vec<WorkoutExercise> = inner
            .exercises
            .iter()
            .filter(|e| e.name == name && inner.owns_session(user_id, e.workout_id))
            .cloned()
            .collect();
        rows.sort_by_key(|e| e.created_at);
        Ok(rows)
    }

    async fn list_custom_exercises(&self, category: &str) -> anyhow::Result<Vec<CustomExercise>> {
        let mut rows: Vec<CustomExercise> = self
            .lock()
            .custom
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn add_custom_exercise(&self, category: &str, name: &str) -> anyhow::Result<bool> {
        let mut inner = self.lock();
        if inner
            .custom
            .iter()
            .any(|c| c.category == category && c.name == name)
        {
            return Ok(false);
        }
        let created_at = inner.tick();
        inner.custom.push(CustomExercise {
            id: Uuid::new_v4(),
            category: category.to_string(),
            name: name.to_string(),
            created_at,
        });
        Ok(true)
    }

    async fn get_profile(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
        Ok(self.lock().profiles.iter().find(|p| p.id == user_id).cloned())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> anyhow::Result<Option<Profile>> {
        let mut inner = self.lock();
        let updated_at = inner.tick();
        let Some(row) = inner.profiles.iter_mut().find(|p| p.id == user_id) else {
            return Ok(None);
        };
        row.username = update.username.clone();
        row.weight_goal = update.weight_goal;
        row.current_weight = update.current_weight;
        row.height = update.height;
        row.daily_calorie_goal = update.daily_calorie_goal;
        row.avatar_url = update.avatar_url.clone();
        row.updated_at = updated_at;
        Ok(Some(row.clone()))
    }
}
