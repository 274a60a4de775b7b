// ABOUTME: Exercise record as delivered by the workout API, with validity checks
// ABOUTME: Absent or null fields stay None so they never collide with a genuine zero or empty string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// One exercise scheduled on a given day
///
/// Records are carried verbatim. A record that breaks the validity rules is
/// still kept; [`ExerciseRecord::validation_issues`] reports what is wrong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Exercise display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_name: Option<String>,
    /// Day label used as the grouping key (case preserved)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    /// Duration in seconds, fractions allowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Repetitions per set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<u32>,
    /// Number of sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Rest time between sets in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_between_sets: Option<u32>,
    /// Estimated calories burned per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_calories_burned: Option<f64>,
    /// Free-form coaching notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A broken validity rule on an [`ExerciseRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseIssue {
    /// `exercise_name` is absent, null, or empty
    MissingName,
    /// `day` is absent, null, or empty
    MissingDay,
    /// Neither `duration` nor `repetitions` is present
    MissingEffort,
    /// `sets` is absent or zero
    NonPositiveSets,
}

impl fmt::Display for ExerciseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingName => "exercise_name is missing or empty",
            Self::MissingDay => "day is missing or empty",
            Self::MissingEffort => "neither duration nor repetitions is present",
            Self::NonPositiveSets => "sets must be greater than zero",
        };
        f.write_str(text)
    }
}

impl ExerciseRecord {
    /// Create a repetition-based exercise
    #[must_use]
    pub fn with_repetitions(
        exercise_name: impl Into<String>,
        day: impl Into<String>,
        sets: u32,
        repetitions: u32,
    ) -> Self {
        Self {
            exercise_name: Some(exercise_name.into()),
            day: Some(day.into()),
            duration: None,
            repetitions: Some(repetitions),
            sets: Some(sets),
            rest_between_sets: None,
            estimated_calories_burned: None,
            notes: None,
        }
    }

    /// Create a timed exercise
    #[must_use]
    pub fn with_duration(
        exercise_name: impl Into<String>,
        day: impl Into<String>,
        sets: u32,
        duration_secs: f64,
    ) -> Self {
        Self {
            exercise_name: Some(exercise_name.into()),
            day: Some(day.into()),
            duration: Some(duration_secs),
            repetitions: None,
            sets: Some(sets),
            rest_between_sets: None,
            estimated_calories_burned: None,
            notes: None,
        }
    }

    /// Every validity rule this record breaks, in a fixed order
    #[must_use]
    pub fn validation_issues(&self) -> Vec<ExerciseIssue> {
        let mut issues = Vec::new();
        if is_blank(self.exercise_name.as_deref()) {
            issues.push(ExerciseIssue::MissingName);
        }
        if is_blank(self.day.as_deref()) {
            issues.push(ExerciseIssue::MissingDay);
        }
        if self.duration.is_none() && self.repetitions.is_none() {
            issues.push(ExerciseIssue::MissingEffort);
        }
        if self.sets.unwrap_or(0) == 0 {
            issues.push(ExerciseIssue::NonPositiveSets);
        }
        issues
    }

    /// True when no validity rule is broken
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validation_issues().is_empty()
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.unwrap_or_default().is_empty()
}
