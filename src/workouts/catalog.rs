use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Muscle-group tag of an exercise. Every tag but `Custom` ships with a fixed
/// list of exercise names; custom names live in the catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Push,
    Pull,
    Legs,
    Upper,
    Arms,
    Custom,
}

const PUSH: &[&str] = &[
    "Machine chest press",
    "Incline bench press",
    "Incline dumbbell press",
    "Smith machine incline press",
    "Bench press",
    "Dumbbell bench press",
    "Dips",
];

const PULL: &[&str] = &[
    "Machine lat pulldown",
    "Lat pulldown",
    "Single-arm cable row",
    "Pull-ups",
    "Barbell row",
    "Machine row",
    "Cable triceps extension",
    "Cheat triceps extension",
];

const LEGS: &[&str] = &[
    "Leg curl",
    "Hack squat",
    "Squat",
    "Back extension",
    "Leg extension",
    "Hip abduction",
    "Hip adduction",
    "Forward lunge",
    "Deadlift",
];

const UPPER: &[&str] = &[
    "Bench press",
    "Incline bench press",
    "Incline dumbbell press",
    "Smith machine incline press",
    "Dips",
    "Pull-ups",
    "Machine row",
];

const ARMS: &[&str] = &[
    "Hammer curl",
    "Seated curl",
    "Cable triceps extension",
    "Machine dips",
    "Cheat triceps extension",
    "Forearm curl",
];

impl ExerciseCategory {
    pub const ALL: [ExerciseCategory; 6] = [
        ExerciseCategory::Push,
        ExerciseCategory::Pull,
        ExerciseCategory::Legs,
        ExerciseCategory::Upper,
        ExerciseCategory::Arms,
        ExerciseCategory::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseCategory::Push => "push",
            ExerciseCategory::Pull => "pull",
            ExerciseCategory::Legs => "legs",
            ExerciseCategory::Upper => "upper",
            ExerciseCategory::Arms => "arms",
            ExerciseCategory::Custom => "custom",
        }
    }

    pub fn predefined(self) -> &'static [&'static str] {
        match self {
            ExerciseCategory::Push => PUSH,
            ExerciseCategory::Pull => PULL,
            ExerciseCategory::Legs => LEGS,
            ExerciseCategory::Upper => UPPER,
            ExerciseCategory::Arms => ARMS,
            ExerciseCategory::Custom => &[],
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown exercise category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ExerciseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ExerciseCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
