//! Per-series editing of an exercise: text inputs for the series count and
//! one repetitions/weight pair per series.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::ExerciseCategory;
use super::repo_types::ExerciseData;
use crate::error::{AppError, AppResult};

const PLACEHOLDER: &str = "-";

/// Picker value meaning "type your own name".
pub const CUSTOM_CHOICE: &str = "custom";

/// Upper bound on the series of one exercise.
pub const MAX_SERIES: usize = 50;

/// Raw text of the series inputs. Both sequences always have the length of the
/// last accepted series count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesEditor {
    series_input: String,
    repetitions: Vec<String>,
    weight: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSeries {
    pub repetitions: Vec<Option<i32>>,
    pub weight: Vec<Option<f64>>,
}

impl ParsedSeries {
    /// True when at least one series has a repetition or weight value.
    pub fn has_values(&self) -> bool {
        self.repetitions.iter().any(Option::is_some) || self.weight.iter().any(Option::is_some)
    }
}

fn parse_count(text: &str) -> Option<usize> {
    text.trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .filter(|n| (1..=MAX_SERIES).contains(n))
}

fn parse_reps(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

fn parse_weight(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|w| w.is_finite())
}

impl SeriesEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resizes both sequences to the new count, keeping existing entries. A
    /// count that is not an integer in `1..=MAX_SERIES` clears both.
    pub fn set_series_count(&mut self, text: &str) {
        self.series_input = text.to_string();
        match parse_count(text) {
            Some(n) => {
                self.repetitions.resize(n, String::new());
                self.weight.resize(n, String::new());
            }
            None => {
                self.repetitions.clear();
                self.weight.clear();
            }
        }
    }

    /// Returns `false` when `index` is outside the current series.
    pub fn set_repetitions(&mut self, index: usize, text: &str) -> bool {
        match self.repetitions.get_mut(index) {
            Some(slot) => {
                *slot = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_weight(&mut self, index: usize, text: &str) -> bool {
        match self.weight.get_mut(index) {
            Some(slot) => {
                *slot = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn series_input(&self) -> &str {
        &self.series_input
    }

    pub fn len(&self) -> usize {
        self.repetitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repetitions.is_empty()
    }

    pub fn parse_series(&self) -> ParsedSeries {
        ParsedSeries {
            repetitions: self.repetitions.iter().map(|r| parse_reps(r)).collect(),
            weight: self.weight.iter().map(|w| parse_weight(w)).collect(),
        }
    }
}

/// One rendered row of a stored exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesLine {
    pub number: usize,
    pub repetitions: String,
    pub weight: String,
}

impl fmt::Display for SeriesLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Series {}: {} reps x {} kg",
            self.number, self.repetitions, self.weight
        )
    }
}

fn show<T: ToString>(value: Option<&Option<T>>) -> String {
    match value {
        Some(Some(v)) => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Pairs the sequences by index over the longer one; gaps and nulls render as
/// `-`.
pub fn series_lines(repetitions: &[Option<i32>], weight: &[Option<f64>]) -> Vec<SeriesLine> {
    let len = repetitions.len().max(weight.len());
    (0..len)
        .map(|i| SeriesLine {
            number: i + 1,
            repetitions: show(repetitions.get(i)),
            weight: show(weight.get(i)),
        })
        .collect()
}

/// Body of the exercise save form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseForm {
    /// Present when editing an existing record.
    pub exercise_id: Option<uuid::Uuid>,
    pub category: String,
    #[serde(default)]
    pub name: String,
    /// Used instead of `name` when `name` is the custom choice or the
    /// category is `custom`.
    pub custom_name: Option<String>,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub repetitions: Vec<String>,
    #[serde(default)]
    pub weight: Vec<String>,
    pub rest_time_seconds: Option<String>,
    pub notes: Option<String>,
}

impl ExerciseForm {
    fn editor(&self) -> SeriesEditor {
        let mut editor = SeriesEditor::new();
        editor.set_series_count(&self.series);
        for (i, text) in self.repetitions.iter().enumerate() {
            editor.set_repetitions(i, text);
        }
        for (i, text) in self.weight.iter().enumerate() {
            editor.set_weight(i, text);
        }
        editor
    }

    /// True when the exercise name comes from `custom_name` and belongs in
    /// the custom catalog of the chosen category.
    pub fn uses_custom_name(&self, category: ExerciseCategory) -> bool {
        category == ExerciseCategory::Custom || self.name.trim().eq_ignore_ascii_case(CUSTOM_CHOICE)
    }

    /// Checks the form and builds the record to write. Nothing is written when
    /// this fails.
    pub fn validate(&self) -> AppResult<ExerciseData> {
        let category: ExerciseCategory = self
            .category
            .parse()
            .map_err(|e: super::catalog::UnknownCategory| AppError::Validation(e.to_string()))?;

        let name = if self.uses_custom_name(category) {
            self.custom_name.as_deref().unwrap_or_default()
        } else {
            self.name.as_str()
        }
        .trim()
        .to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Exercise name is required".into()));
        }

        let series = self.series.trim();
        if series.is_empty() {
            return Err(AppError::Validation("Number of series is required".into()));
        }
        if series.parse::<i64>().is_ok_and(|n| n > MAX_SERIES as i64) {
            return Err(AppError::Validation(format!(
                "At most {MAX_SERIES} series per exercise"
            )));
        }

        let editor = self.editor();
        let parsed = editor.parse_series();
        if !parsed.has_values() {
            return Err(AppError::Validation(
                "Enter repetitions or weight for at least one series".into(),
            ));
        }

        let notes = self
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(ExerciseData {
            name,
            category: category.as_str().to_string(),
            // has_values() implies a positive count that fits the editor
            series: i32::try_from(editor.len()).unwrap_or(i32::MAX),
            repetitions: parsed.repetitions,
            weight: parsed.weight,
            rest_time_seconds: self
                .rest_time_seconds
                .as_deref()
                .and_then(|t| t.trim().parse::<i32>().ok())
                .filter(|s| *s >= 0),
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(series: &str, reps: &[&str], weight: &[&str]) -> ExerciseForm {
        ExerciseForm {
            category: "push".into(),
            name: "Bench press".into(),
            series: series.into(),
            repetitions: reps.iter().map(|s| s.to_string()).collect(),
            weight: weight.iter().map(|s| s.to_string()).collect(),
            ..ExerciseForm::default()
        }
    }

    #[test]
    fn parses_each_entry_independently() {
        let mut editor = SeriesEditor::new();
        editor.set_series_count("3");
        for (i, (r, w)) in [("10", "50"), ("x", "55"), ("12", "")].iter().enumerate() {
            assert!(editor.set_repetitions(i, r));
            assert!(editor.set_weight(i, w));
        }

        let parsed = editor.parse_series();
        assert_eq!(parsed.repetitions, vec![Some(10), None, Some(12)]);
        assert_eq!(parsed.weight, vec![Some(50.0), Some(55.0), None]);
    }

    #[test]
    fn growing_keeps_existing_entries() {
        let mut editor = SeriesEditor::new();
        editor.set_series_count("2");
        editor.set_repetitions(0, "8");
        editor.set_weight(1, "40");
        editor.set_series_count("4");

        let parsed = editor.parse_series();
        assert_eq!(parsed.repetitions, vec![Some(8), None, None, None]);
        assert_eq!(parsed.weight, vec![None, Some(40.0), None, None]);
    }

    #[test]
    fn shrinking_discards_tail() {
        let mut editor = SeriesEditor::new();
        editor.set_series_count("3");
        editor.set_repetitions(2, "6");
        editor.set_series_count("1");
        assert_eq!(editor.len(), 1);
        assert!(!editor.set_repetitions(2, "6"));
    }

    #[test]
    fn invalid_count_clears_everything() {
        let mut editor = SeriesEditor::new();
        editor.set_series_count("3");
        editor.set_repetitions(0, "10");
        for bad in ["0", "-2", "three", ""] {
            editor.set_series_count(bad);
            assert!(editor.is_empty(), "{bad:?}");
        }
        assert_eq!(editor.series_input(), "");
    }

    #[test]
    fn lines_use_placeholder_over_longer_sequence() {
        let lines = series_lines(&[Some(10), None, Some(8)], &[Some(60.0), Some(62.5)]);
        let rendered: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "Series 1: 10 reps x 60 kg",
                "Series 2: - reps x 62.5 kg",
                "Series 3: 8 reps x - kg",
            ]
        );
    }

    #[test]
    fn lines_of_empty_record() {
        assert!(series_lines(&[], &[]).is_empty());
    }

    #[test]
    fn validate_builds_equal_length_sequences() {
        let data = form("3", &["10", "x", "12", "99"], &["50", "55"]).validate().unwrap();
        assert_eq!(data.series, 3);
        assert_eq!(data.repetitions, vec![Some(10), None, Some(12)]);
        assert_eq!(data.weight, vec![Some(50.0), Some(55.0), None]);
        assert_eq!(data.category, "push");
    }

    #[test]
    fn validate_requires_name() {
        let mut f = form("1", &["10"], &["20"]);
        f.name = "  ".into();
        assert!(matches!(f.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn validate_requires_series_count() {
        let err = form(" ", &["10"], &["20"]).validate().unwrap_err();
        assert!(err.to_string().contains("series"));
    }

    #[test]
    fn validate_requires_one_parseable_value() {
        let err = form("2", &["", "abc"], &["", ""]).validate().unwrap_err();
        assert!(err.to_string().contains("at least one series"));
        assert!(form("0", &["10"], &["20"]).validate().is_err());
    }

    #[test]
    fn custom_category_uses_custom_name() {
        let mut f = form("1", &["5"], &[]);
        f.category = "Custom".into();
        f.custom_name = Some(" Sled push ".into());
        let data = f.validate().unwrap();
        assert_eq!(data.name, "Sled push");
        assert_eq!(data.category, "custom");

        f.custom_name = None;
        assert!(f.validate().is_err());
    }

    #[test]
    fn custom_choice_keeps_muscle_group() {
        let mut f = form("1", &["5"], &["30"]);
        f.category = "legs".into();
        f.name = "custom".into();
        f.custom_name = Some("Sissy squat".into());
        assert!(f.uses_custom_name(ExerciseCategory::Legs));
        let data = f.validate().unwrap();
        assert_eq!(data.name, "Sissy squat");
        assert_eq!(data.category, "legs");

        f.custom_name = Some("  ".into());
        assert!(matches!(f.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn predefined_name_ignores_custom_name() {
        let mut f = form("1", &["5"], &["30"]);
        f.custom_name = Some("Something else".into());
        assert!(!f.uses_custom_name(ExerciseCategory::Push));
        assert_eq!(f.validate().unwrap().name, "Bench press");
    }

    #[test]
    fn oversized_series_count_is_rejected() {
        for count in ["51", "1000000000000000000"] {
            let err = form(count, &["10"], &["20"]).validate().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{count}");
        }
        let err = form("99999999999999999999999", &["10"], &[]).validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(form("50", &["10"], &[]).validate().unwrap().series, 50);
    }

    #[test]
    fn editor_ignores_count_above_limit() {
        let mut editor = SeriesEditor::new();
        editor.set_series_count("2");
        editor.set_series_count("10000000000");
        assert!(editor.is_empty());
        editor.set_series_count(&MAX_SERIES.to_string());
        assert_eq!(editor.len(), MAX_SERIES);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut f = form("1", &["5"], &[]);
        f.category = "cardio".into();
        assert!(matches!(f.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn optional_fields_are_normalised() {
        let mut f = form("1", &["5"], &["10"]);
        f.rest_time_seconds = Some("90".into());
        f.notes = Some("   ".into());
        let data = f.validate().unwrap();
        assert_eq!(data.rest_time_seconds, Some(90));
        assert_eq!(data.notes, None);

        f.rest_time_seconds = Some("soon".into());
        assert_eq!(f.validate().unwrap().rest_time_seconds, None);
    }
}
