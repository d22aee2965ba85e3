use serde::Serialize;
use time::OffsetDateTime;

use super::repo_types::WorkoutExercise;
use crate::nutrition::scaler::round2;

/// One chart point per stored record of an exercise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressPoint {
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// UTC calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub avg_weight: f64,
    pub avg_repetitions: f64,
}

/// Mean of the present values, rounded to two decimals; 0 when none.
fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        round2(sum / f64::from(count))
    }
}

pub fn progress_point(exercise: &WorkoutExercise) -> ProgressPoint {
    ProgressPoint {
        created_at: exercise.created_at,
        date: exercise.created_at.date().to_string(),
        avg_weight: mean(exercise.weight.iter().flatten().copied()),
        avg_repetitions: mean(exercise.repetitions.iter().flatten().map(|r| f64::from(*r))),
    }
}

/// Chart series, oldest record first.
pub fn progress_points(records: &[WorkoutExercise]) -> Vec<ProgressPoint> {
    let mut points: Vec<ProgressPoint> = records.iter().map(progress_point).collect();
    points.sort_by_key(|p| p.created_at);
    points
}
