// ABOUTME: Builds the workout view model from a saved response file
// ABOUTME: Accepts the endpoint's message envelope or a bare workout body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

use anyhow::{Context, Result};
use routine_core::models::Workout;
use routine_core::build_workout_from_value;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read `path` and build the view model from its JSON content
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not JSON, or is not a
/// well-formed workout body
pub fn load_workout_file(path: &Path) -> Result<Workout> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let body: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    debug!(file = %path.display(), "Building workout from local file");
    let workout = build_workout_from_value(strip_envelope(body))
        .with_context(|| format!("{} does not hold a workout", path.display()))?;
    Ok(workout)
}

/// Unwrap `{"message": ...}` unless the body already carries `exercises`
#[must_use]
pub fn strip_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if !map.contains_key("exercises") && map.contains_key("message") => {
            map.remove("message").unwrap_or(Value::Null)
        }
        other => other,
    }
}
