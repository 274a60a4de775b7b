// ABOUTME: Raw workout payload and the day-grouped Workout view model
// ABOUTME: Raw fields are snake_case as sent by the API; the view model serializes in camelCase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

use serde::{Deserialize, Serialize};

use super::exercise::ExerciseRecord;

/// Workout body found under `message` in the workout endpoint response
///
/// `exercises` is required and must be an array. The remaining fields are
/// passed through untouched; the server declares them nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWorkoutResponse {
    /// Opaque workout identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Opaque owner identifier
    #[serde(default)]
    pub user_id: Option<String>,
    /// Estimated session length in minutes
    #[serde(default)]
    pub estimated_duration: Option<u32>,
    /// Flat exercise list in server order
    pub exercises: Vec<ExerciseRecord>,
    /// Main muscle groups targeted
    #[serde(default)]
    pub target_muscle_groups: Vec<String>,
    /// Estimated total calories burned
    #[serde(default)]
    pub total_calories_burned: Option<f64>,
}

/// Exercises sharing one day key, in their original relative order
///
/// Records without a `day` share the `None` key, which is distinct from the
/// empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayGroup {
    /// Day key (exact string from the records)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    /// Records whose `day` equals the key
    pub exercises: Vec<ExerciseRecord>,
}

impl DayGroup {
    /// Sum of per-record calorie estimates, `None` when no record carries one
    #[must_use]
    pub fn estimated_calories(&self) -> Option<f64> {
        self.exercises
            .iter()
            .filter_map(|exercise| exercise.estimated_calories_burned)
            .fold(None, |total, calories| Some(total.unwrap_or(0.0) + calories))
    }
}

/// Render-ready workout view model
///
/// Built fresh from every successful fetch and never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Opaque workout identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Opaque owner identifier
    pub user_id: Option<String>,
    /// Estimated session length in minutes
    pub estimated_duration: Option<u32>,
    /// Flat exercise list in server order
    pub exercises: Vec<ExerciseRecord>,
    /// One group per distinct day, ordered by first occurrence
    pub exercise_by_day: Vec<DayGroup>,
    /// Main muscle groups targeted
    pub target_muscle_groups: Vec<String>,
    /// Estimated total calories burned
    pub total_calories_burned: Option<f64>,
}

impl Workout {
    /// Look up the group for an exact day key
    #[must_use]
    pub fn day(&self, day: &str) -> Option<&DayGroup> {
        self.group_for(Some(day))
    }

    /// Look up a group by key, `None` selecting the records without a day
    #[must_use]
    pub fn group_for(&self, key: Option<&str>) -> Option<&DayGroup> {
        self.exercise_by_day
            .iter()
            .find(|group| group.day.as_deref() == key)
    }

    /// Day keys in tab order
    #[must_use]
    pub fn day_keys(&self) -> Vec<Option<&str>> {
        self.exercise_by_day
            .iter()
            .map(|group| group.day.as_deref())
            .collect()
    }
}
