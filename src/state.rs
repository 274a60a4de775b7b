// ABOUTME: Dashboard state container owned by the caller
// ABOUTME: Holds the current workout, active day tab, workout progress, chat, and notifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

//! # Dashboard State
//!
//! Everything the dashboard page keeps between renders. A fetch result is
//! folded in with [`DashboardState::apply_fetch`]; failures become
//! notifications and never clear what is already on screen.

use chrono::{DateTime, Utc};
use routine_core::constants::messages::{FETCH_FAILED_TITLE, WORKOUT_COMPLETE_TITLE};
use routine_core::models::{DayGroup, Workout};
use routine_core::{RoutineError, RoutineResult};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::chat::ChatSession;
use crate::client::FetchOutcome;
use crate::presenter::tab_label;

/// Rejected dashboard interaction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// No workout has been loaded yet
    #[error("No workout loaded")]
    NoWorkoutLoaded,
    /// `finish_workout` without a matching `start_workout`
    #[error("Workout has not been started")]
    WorkoutNotStarted,
    /// Day key matches no group of the current workout
    #[error("Unknown day tab '{day}'")]
    UnknownDay {
        /// Requested day key
        day: String,
    },
    /// Tab index is past the last group
    #[error("No day tab at position {index}")]
    UnknownTab {
        /// Requested index
        index: usize,
    },
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Something went well
    Success,
    /// Something failed
    Error,
}

/// Toast-style message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Unique id for dismissal
    pub id: Uuid,
    /// Severity
    pub level: NotificationLevel,
    /// Short heading
    pub title: String,
    /// Detail line
    pub body: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Success notification
    #[must_use]
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, body)
    }

    /// Error notification
    #[must_use]
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, body)
    }

    fn new(level: NotificationLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            title: title.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}

/// Page state for the workout dashboard
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardState {
    /// Most recently loaded workout
    pub workout: Option<Workout>,
    /// Index of the selected group in `exercise_by_day`
    pub active_tab: Option<usize>,
    /// Whether a session is in progress
    pub workout_started: bool,
    /// Assistant chat transcript
    pub chat: ChatSession,
    /// Pending notifications, oldest first
    pub notifications: Vec<Notification>,
}

impl DashboardState {
    /// Empty dashboard
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one data-load attempt into the state
    ///
    /// A loaded workout replaces the previous one wholesale. The active tab
    /// survives when its day still exists, otherwise the first tab is
    /// selected. A skipped attempt changes nothing. Errors add an error
    /// notification and keep the current workout; cancellation is silent.
    pub fn apply_fetch(&mut self, result: RoutineResult<FetchOutcome>) {
        match result {
            Ok(FetchOutcome::Loaded(workout)) => self.replace_workout(workout),
            Ok(FetchOutcome::Skipped) => debug!("Fetch skipped, dashboard unchanged"),
            Err(RoutineError::Cancelled) => debug!("Fetch cancelled, dashboard unchanged"),
            Err(err) => {
                warn!(error = %err, "Workout load failed");
                self.notifications
                    .push(Notification::error(FETCH_FAILED_TITLE, err.to_string()));
            }
        }
    }

    fn replace_workout(&mut self, workout: Workout) {
        // Re-resolve by key: the same day may sit at another index now
        let previous_key = self.active_group().map(|group| group.day.clone());
        self.active_tab = previous_key
            .and_then(|key| {
                workout
                    .exercise_by_day
                    .iter()
                    .position(|group| group.day == key)
            })
            .or_else(|| (!workout.exercise_by_day.is_empty()).then_some(0));
        self.workout = Some(workout);
    }

    /// Switch to the group whose day key is exactly `day`
    ///
    /// # Errors
    ///
    /// Returns `NoWorkoutLoaded` or `UnknownDay`
    pub fn select_day(&mut self, day: &str) -> Result<(), DashboardError> {
        let workout = self
            .workout
            .as_ref()
            .ok_or(DashboardError::NoWorkoutLoaded)?;
        let index = workout
            .exercise_by_day
            .iter()
            .position(|group| group.day.as_deref() == Some(day))
            .ok_or_else(|| DashboardError::UnknownDay {
                day: day.to_owned(),
            })?;
        self.active_tab = Some(index);
        Ok(())
    }

    /// Switch to the tab at `index`
    ///
    /// # Errors
    ///
    /// Returns `NoWorkoutLoaded` or `UnknownTab`
    pub fn select_tab(&mut self, index: usize) -> Result<(), DashboardError> {
        let workout = self
            .workout
            .as_ref()
            .ok_or(DashboardError::NoWorkoutLoaded)?;
        if index >= workout.exercise_by_day.len() {
            return Err(DashboardError::UnknownTab { index });
        }
        self.active_tab = Some(index);
        Ok(())
    }

    /// Group shown under the active tab
    #[must_use]
    pub fn active_group(&self) -> Option<&DayGroup> {
        self.workout
            .as_ref()?
            .exercise_by_day
            .get(self.active_tab?)
    }

    /// Mark the workout as in progress
    ///
    /// # Errors
    ///
    /// Returns `NoWorkoutLoaded` when there is nothing to start
    pub fn start_workout(&mut self) -> Result<(), DashboardError> {
        if self.workout.is_none() {
            return Err(DashboardError::NoWorkoutLoaded);
        }
        self.workout_started = true;
        Ok(())
    }

    /// Finish the running workout and congratulate the user
    ///
    /// # Errors
    ///
    /// Returns `WorkoutNotStarted` when no workout is in progress
    pub fn finish_workout(&mut self) -> Result<Notification, DashboardError> {
        if !self.workout_started {
            return Err(DashboardError::WorkoutNotStarted);
        }
        self.workout_started = false;

        let body = self.active_group().map_or_else(
            || "You have completed your workout.".to_owned(),
            |group| {
                format!(
                    "You have completed your workout for {}.",
                    tab_label(group.day.as_deref())
                )
            },
        );
        let notification = Notification::success(WORKOUT_COMPLETE_TITLE, body);
        self.notifications.push(notification.clone());
        Ok(notification)
    }

    /// Drop a notification by id, returning whether it existed
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }
}
