use serde::{Serialize, Serializer};
use time::{macros::format_description, Date, Duration, OffsetDateTime, Time, UtcOffset};

use super::repo_types::Meal;
use crate::nutrition::Macros;

/// Diary section a meal is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MealBucket {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Uncategorized,
}

impl MealBucket {
    pub const ALL: [MealBucket; 5] = [
        MealBucket::Breakfast,
        MealBucket::Lunch,
        MealBucket::Dinner,
        MealBucket::Snack,
        MealBucket::Uncategorized,
    ];

    /// Case-insensitive match on the trimmed type; anything unknown lands in
    /// `Uncategorized`.
    pub fn classify(meal_type: &str) -> Self {
        match meal_type.trim().to_lowercase().as_str() {
            "breakfast" => MealBucket::Breakfast,
            "lunch" => MealBucket::Lunch,
            "dinner" => MealBucket::Dinner,
            "snack" => MealBucket::Snack,
            _ => MealBucket::Uncategorized,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MealBucket::Breakfast => "breakfast",
            MealBucket::Lunch => "lunch",
            MealBucket::Dinner => "dinner",
            MealBucket::Snack => "snack",
            MealBucket::Uncategorized => "uncategorized",
        }
    }
}

impl Serialize for MealBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiarySection {
    pub bucket: MealBucket,
    pub total_calories: f64,
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiaryDay {
    pub date: String,
    pub total_calories: f64,
    /// Only buckets holding at least one meal, in breakfast..uncategorized order.
    pub sections: Vec<DiarySection>,
}

#[cfg(test)]
impl DiaryDay {
    pub fn section(&self, bucket: MealBucket) -> Option<&DiarySection> {
        self.sections.iter().find(|s| s.bucket == bucket)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

pub fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// `[local midnight, next local midnight)` of `date`, expressed as instants.
/// `None` when the next midnight is past the last representable instant.
pub fn day_window(date: Date, offset: UtcOffset) -> Option<(OffsetDateTime, OffsetDateTime)> {
    let start = date.with_time(Time::MIDNIGHT).assume_offset(offset);
    let end = start.checked_add(Duration::days(1))?;
    Some((start, end))
}

pub fn local_today(now: OffsetDateTime, offset: UtcOffset) -> Date {
    now.to_offset(offset).date()
}

fn in_window(meal: &Meal, (start, end): (OffsetDateTime, OffsetDateTime)) -> bool {
    meal.created_at >= start && meal.created_at < end
}

/// Filters `meals` down to one local day and groups them by bucket. `None`
/// when `date` has no complete day window.
pub fn build_diary(meals: &[Meal], date: Date, offset: UtcOffset) -> Option<DiaryDay> {
    let window = day_window(date, offset)?;
    let day: Vec<&Meal> = meals.iter().filter(|m| in_window(m, window)).collect();

    let sections: Vec<DiarySection> = MealBucket::ALL
        .iter()
        .filter_map(|&bucket| {
            let members: Vec<Meal> = day
                .iter()
                .filter(|m| MealBucket::classify(&m.meal_type) == bucket)
                .map(|m| (*m).clone())
                .collect();
            if members.is_empty() {
                return None;
            }
            let total_calories = members.iter().map(|m| m.calories).sum();
            Some(DiarySection {
                bucket,
                total_calories,
                meals: members,
            })
        })
        .collect();

    Some(DiaryDay {
        date: date.to_string(),
        total_calories: sections.iter().map(|s| s.total_calories).sum(),
        sections,
    })
}

/// Sum of every nutrient over `meals`, no weighting.
pub fn sum_macros<'a>(meals: impl IntoIterator<Item = &'a Meal>) -> Macros {
    meals.into_iter().fold(Macros::ZERO, |acc, m| Macros {
        calories: acc.calories + m.calories,
        protein: acc.protein + m.protein,
        carbs: acc.carbs + m.carbs,
        fat: acc.fat + m.fat,
    })
}
