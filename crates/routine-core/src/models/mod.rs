// ABOUTME: Data models for raw workout payloads, the grouped view model, and the questionnaire
// ABOUTME: Re-exports ExerciseRecord, Workout, DayGroup and questionnaire types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

//! # Data Models
//!
//! - `ExerciseRecord`: one exercise as the workout API sends it
//! - `RawWorkoutResponse`: the decoded `message` body of the workout endpoint
//! - `Workout` / `DayGroup`: the render-ready view model
//! - `Questionnaire`: preference intake posted to the routines endpoint

mod exercise;
mod questionnaire;
mod workout;

pub use exercise::{ExerciseIssue, ExerciseRecord};
pub use questionnaire::{
    ExperienceLevel, FitnessGoal, Frequency, Questionnaire, QuestionnaireDraft, WorkoutLocation,
};
pub use workout::{DayGroup, RawWorkoutResponse, Workout};
