// ABOUTME: Render-ready projections of the Workout view model
// ABOUTME: Day tabs, per-exercise badge rows, and dashboard summary cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

//! Presenter helpers
//!
//! Pure functions that turn a [`Workout`] into the strings a dashboard shows.
//! A tab is identified by its group's exact day key, so `Monday` and
//! `monday` stay two reachable tabs.

use routine_core::models::{DayGroup, ExerciseRecord, Workout};
use serde::Serialize;

/// Placeholder shown when a value is absent
const MISSING: &str = "-";

/// Tab label for records that carry no day
pub const UNSCHEDULED_LABEL: &str = "Unscheduled";

/// One day tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTab {
    /// Position in `exercise_by_day`
    pub index: usize,
    /// Exact day key of the group, `None` for records without a day
    pub key: Option<String>,
    /// Text on the tab
    pub label: String,
}

/// One exercise line inside a day tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseRow {
    /// Exercise name
    pub name: String,
    /// e.g. `3 sets`
    pub sets_badge: String,
    /// e.g. `10 reps`, `30s`, `1m 30s`
    pub effort_badge: String,
    /// Coaching notes, omitted when blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Headline numbers above the day tabs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCards {
    /// Estimated session length in minutes
    pub estimated_duration_minutes: Option<u32>,
    /// Main muscle groups targeted
    pub target_muscle_groups: Vec<String>,
    /// Estimated total calories burned
    pub total_calories: Option<f64>,
    /// Number of distinct training days
    pub training_days: usize,
    /// Number of exercise records across all days
    pub exercise_count: usize,
}

/// Text shown on the tab for a day key
#[must_use]
pub fn tab_label(day: Option<&str>) -> String {
    day.unwrap_or(UNSCHEDULED_LABEL).to_owned()
}

/// Tabs in first-occurrence day order
#[must_use]
pub fn day_tabs(workout: &Workout) -> Vec<DayTab> {
    workout
        .exercise_by_day
        .iter()
        .enumerate()
        .map(|(index, group)| DayTab {
            index,
            key: group.day.clone(),
            label: tab_label(group.day.as_deref()),
        })
        .collect()
}

/// Resolve typed day text to a tab index
///
/// An exact key match wins. Otherwise a case-insensitive match is accepted
/// only when it names a single group, so `Monday` and `monday` are never
/// confused. The unscheduled tab answers to its label.
#[must_use]
pub fn resolve_tab(workout: &Workout, input: &str) -> Option<usize> {
    let groups = &workout.exercise_by_day;
    if let Some(index) = groups
        .iter()
        .position(|group| group.day.as_deref() == Some(input))
    {
        return Some(index);
    }

    let wanted = input.to_lowercase();
    let mut folded = groups.iter().enumerate().filter(|(_, group)| {
        group.day.as_deref().map_or_else(
            || wanted == UNSCHEDULED_LABEL.to_lowercase(),
            |day| day.to_lowercase() == wanted,
        )
    });
    match (folded.next(), folded.next()) {
        (Some((index, _)), None) => Some(index),
        _ => None,
    }
}

/// Rows for one day, in record order
#[must_use]
pub fn exercise_rows(group: &DayGroup) -> Vec<ExerciseRow> {
    group.exercises.iter().map(exercise_row).collect()
}

/// Row for a single record
#[must_use]
pub fn exercise_row(exercise: &ExerciseRecord) -> ExerciseRow {
    ExerciseRow {
        name: exercise
            .exercise_name
            .clone()
            .unwrap_or_else(|| MISSING.to_owned()),
        sets_badge: sets_badge(exercise.sets),
        effort_badge: effort_badge(exercise),
        notes: exercise
            .notes
            .as_ref()
            .filter(|notes| !notes.trim().is_empty())
            .cloned(),
    }
}

/// Summary cards for the whole workout
#[must_use]
pub fn summary_cards(workout: &Workout) -> SummaryCards {
    SummaryCards {
        estimated_duration_minutes: workout.estimated_duration,
        target_muscle_groups: workout.target_muscle_groups.clone(),
        total_calories: workout.total_calories_burned,
        training_days: workout.exercise_by_day.len(),
        exercise_count: workout.exercises.len(),
    }
}

fn sets_badge(sets: Option<u32>) -> String {
    match sets {
        Some(1) => "1 set".to_owned(),
        Some(n) => format!("{n} sets"),
        None => MISSING.to_owned(),
    }
}

fn effort_badge(exercise: &ExerciseRecord) -> String {
    // Repetitions win over duration, matching the original row layout
    if let Some(reps) = exercise.repetitions {
        return format!("{reps} reps");
    }
    exercise
        .duration
        .map_or_else(|| MISSING.to_owned(), format_duration)
}

/// Render seconds as `45s`, `2m` or `1m 30s`, rounded to whole seconds
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    let whole = seconds.max(0.0).round() as u64;
    let (minutes, rest) = (whole / 60, whole % 60);
    match (minutes, rest) {
        (0, s) => format!("{s}s"),
        (m, 0) => format!("{m}m"),
        (m, s) => format!("{m}m {s}s"),
    }
}
