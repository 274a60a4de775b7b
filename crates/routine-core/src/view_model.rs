// ABOUTME: Pure transform from a raw workout response into the day-grouped Workout view model
// ABOUTME: Groups exercises by first-occurrence day order with stable, case-sensitive keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

//! # Workout View Model Builder
//!
//! Turns the flat exercise list returned by the workout endpoint into the
//! structure the dashboard tabs are rendered from.
//!
//! Grouping rules:
//!
//! - day keys appear in the order they are first seen in the flat list
//! - keys compare by exact string equality (no trimming, no case folding,
//!   the empty string is a key like any other)
//! - records without a `day` share one group whose key is `None`
//! - each group keeps its records in their original relative order
//!
//! The builder performs no I/O and holds no state, so it can be shared
//! freely between tasks.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{RoutineError, RoutineResult};
use crate::models::{DayGroup, ExerciseRecord, RawWorkoutResponse, Workout};

/// Builds [`Workout`] view models from raw workout payloads
#[derive(Debug, Clone, Copy)]
pub struct WorkoutViewModelBuilder {
    warn_on_invalid_records: bool,
}

impl Default for WorkoutViewModelBuilder {
    fn default() -> Self {
        Self {
            warn_on_invalid_records: true,
        }
    }
}

impl WorkoutViewModelBuilder {
    /// Builder that logs a warning for each record breaking a validity rule
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn per-record validity warnings on or off
    #[must_use]
    pub const fn warn_on_invalid_records(mut self, enabled: bool) -> Self {
        self.warn_on_invalid_records = enabled;
        self
    }

    /// Build the view model from a decoded response
    #[must_use]
    pub fn build(&self, raw: RawWorkoutResponse) -> Workout {
        if self.warn_on_invalid_records {
            report_invalid_records(raw.id.as_deref(), &raw.exercises);
        }

        let exercise_by_day = group_by_day(&raw.exercises);
        debug!(
            workout.id = ?raw.id,
            workout.exercises = raw.exercises.len(),
            workout.days = exercise_by_day.len(),
            "Built workout view model"
        );

        Workout {
            id: raw.id,
            user_id: raw.user_id,
            estimated_duration: raw.estimated_duration,
            exercises: raw.exercises,
            exercise_by_day,
            target_muscle_groups: raw.target_muscle_groups,
            total_calories_burned: raw.total_calories_burned,
        }
    }

    /// Build the view model from an undecoded JSON body
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` when the value is not an object, when
    /// `exercises` is absent or not an array, or when a present field has a
    /// type no record could carry (a string where a count belongs). Null
    /// values are accepted everywhere except `exercises`.
    pub fn build_from_value(&self, value: Value) -> RoutineResult<Workout> {
        let Some(body) = value.as_object() else {
            return Err(RoutineError::malformed(format!(
                "expected a workout object, got {}",
                json_kind(&value)
            )));
        };

        match body.get("exercises") {
            None => return Err(RoutineError::malformed("missing 'exercises' field")),
            Some(exercises) if !exercises.is_array() => {
                return Err(RoutineError::malformed(format!(
                    "'exercises' must be an array, got {}",
                    json_kind(exercises)
                )));
            }
            Some(_) => {}
        }

        let raw: RawWorkoutResponse = serde_json::from_value(value)
            .map_err(|e| RoutineError::malformed(format!("invalid workout body: {e}")))?;
        Ok(self.build(raw))
    }
}

/// Build the view model with default settings
#[must_use]
pub fn build_workout(raw: RawWorkoutResponse) -> Workout {
    WorkoutViewModelBuilder::default().build(raw)
}

/// Build the view model from an undecoded JSON body with default settings
///
/// # Errors
///
/// See [`WorkoutViewModelBuilder::build_from_value`].
pub fn build_workout_from_value(value: Value) -> RoutineResult<Workout> {
    WorkoutViewModelBuilder::default().build_from_value(value)
}

/// Group records by day key in first-occurrence order
#[must_use]
pub fn group_by_day(exercises: &[ExerciseRecord]) -> Vec<DayGroup> {
    let mut slots: HashMap<Option<&str>, usize> = HashMap::new();
    let mut groups: Vec<DayGroup> = Vec::new();

    for exercise in exercises {
        let slot = *slots.entry(exercise.day.as_deref()).or_insert_with(|| {
            groups.push(DayGroup {
                day: exercise.day.clone(),
                exercises: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].exercises.push(exercise.clone());
    }

    groups
}

fn report_invalid_records(workout_id: Option<&str>, exercises: &[ExerciseRecord]) {
    for (index, exercise) in exercises.iter().enumerate() {
        let issues = exercise.validation_issues();
        if issues.is_empty() {
            continue;
        }
        let summary = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        warn!(
            workout.id = ?workout_id,
            exercise.index = index,
            exercise.name = ?exercise.exercise_name,
            "Carrying invalid exercise record: {summary}"
        );
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, day: &str) -> ExerciseRecord {
        ExerciseRecord::with_repetitions(name, day, 3, 10)
    }

    #[test]
    fn test_first_occurrence_order() {
        let groups = group_by_day(&[
            record("a", "B"),
            record("b", "A"),
            record("c", "B"),
            record("d", "C"),
        ]);
        let keys: Vec<Option<&str>> = groups.iter().map(|g| g.day.as_deref()).collect();
        assert_eq!(keys, vec![Some("B"), Some("A"), Some("C")]);
        assert_eq!(groups[0].exercises, vec![record("a", "B"), record("c", "B")]);
    }

    #[test]
    fn test_keys_are_case_sensitive_and_untrimmed() {
        let groups = group_by_day(&[
            record("a", "Monday"),
            record("b", "monday"),
            record("c", " Monday"),
            record("d", ""),
        ]);
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[3].day.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_day_is_its_own_group() {
        let mut undated = record("a", "");
        undated.day = None;
        let groups = group_by_day(&[undated.clone(), record("b", ""), undated.clone()]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].day, None);
        assert_eq!(groups[0].exercises, vec![undated.clone(), undated]);
        assert_eq!(groups[1].day.as_deref(), Some(""));
    }

    #[test]
    fn test_non_object_body_is_malformed() {
        let err = build_workout_from_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, RoutineError::MalformedResponse { .. }));
    }

    #[test]
    fn test_wrongly_typed_exercise_is_malformed() {
        let err = build_workout_from_value(json!({
            "id": "w1",
            "exercises": [{"exercise_name": "Squat", "day": "Monday", "sets": "three"}]
        }))
        .unwrap_err();
        assert!(matches!(err, RoutineError::MalformedResponse { .. }));
    }

    #[test]
    fn test_invalid_records_are_carried() {
        let mut broken = record("", "Friday");
        broken.sets = Some(0);
        let raw = RawWorkoutResponse {
            id: Some("w1".into()),
            user_id: None,
            estimated_duration: None,
            exercises: vec![broken.clone()],
            target_muscle_groups: Vec::new(),
            total_calories_burned: None,
        };

        let workout = WorkoutViewModelBuilder::new()
            .warn_on_invalid_records(false)
            .build(raw);
        assert_eq!(workout.exercises, vec![broken.clone()]);
        assert_eq!(workout.exercise_by_day[0].exercises, vec![broken]);
    }
}
