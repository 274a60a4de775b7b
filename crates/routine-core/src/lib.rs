// ABOUTME: Core types and workout normalization for the routine planner client
// ABOUTME: Foundation crate with errors, constants, wire models, and the day-grouping builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

#![deny(unsafe_code)]

//! # Routine Core
//!
//! Foundation crate for the routine planner client. Nothing in here performs
//! I/O: the HTTP collaborators live in the `routine_planner` crate and hand
//! decoded payloads to [`view_model::build_workout`].
//!
//! ## Modules
//!
//! - **errors**: `RoutineError` and the `RoutineResult` alias
//! - **constants**: API paths, defaults, and questionnaire bounds
//! - **models**: raw exercise records, the `Workout` view model, questionnaire types
//! - **view_model**: the pure grouping transform from raw response to view model

/// Error types shared by every layer of the client
pub mod errors;

/// API paths, defaults and validation bounds
pub mod constants;

/// Wire and view-model data structures
pub mod models;

/// Raw workout response to grouped view model
pub mod view_model;

pub use errors::{RoutineError, RoutineResult};
pub use view_model::{build_workout, build_workout_from_value, WorkoutViewModelBuilder};
