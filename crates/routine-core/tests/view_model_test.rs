// ABOUTME: Behavioural tests for the workout view-model builder
// ABOUTME: Covers grouping completeness, ordering, purity, and malformed payload handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use routine_core::models::{ExerciseRecord, RawWorkoutResponse, Workout};
use routine_core::{build_workout, build_workout_from_value, RoutineError};
use serde_json::{json, Value};

fn scenario_body() -> Value {
    json!({
        "id": "665f1c2e",
        "user_id": "auth0|user-42",
        "estimated_duration": 45,
        "exercises": [
            {"exercise_name": "Squat", "day": "Monday", "sets": 3, "repetitions": 10, "notes": ""},
            {"exercise_name": "Plank", "day": "Monday", "duration": 30, "sets": 3, "notes": ""},
            {"exercise_name": "Curl", "day": "Tuesday", "repetitions": 12, "sets": 3, "notes": ""}
        ],
        "target_muscle_groups": ["legs", "core", "arms"],
        "total_calories_burned": 320
    })
}

fn names(records: &[ExerciseRecord]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r.exercise_name.as_deref().unwrap_or_default())
        .collect()
}

fn raw_with_days(days: &[&str]) -> RawWorkoutResponse {
    RawWorkoutResponse {
        id: Some("w".into()),
        user_id: Some("u".into()),
        estimated_duration: Some(30),
        exercises: days
            .iter()
            .enumerate()
            .map(|(i, day)| ExerciseRecord::with_repetitions(format!("ex-{i}"), *day, 3, 8))
            .collect(),
        target_muscle_groups: vec![],
        total_calories_burned: None,
    }
}

#[test]
fn test_scenario_groups_monday_then_tuesday() {
    let workout = build_workout_from_value(scenario_body()).unwrap();

    assert_eq!(workout.day_keys(), vec![Some("Monday"), Some("Tuesday")]);
    assert_eq!(names(&workout.exercise_by_day[0].exercises), vec!["Squat", "Plank"]);
    assert_eq!(names(&workout.exercise_by_day[1].exercises), vec!["Curl"]);

    let plank = &workout.exercise_by_day[0].exercises[1];
    assert_eq!(plank.duration, Some(30.0));
    assert_eq!(plank.repetitions, None);
}

#[test]
fn test_summary_fields_pass_through() {
    let workout = build_workout_from_value(scenario_body()).unwrap();

    assert_eq!(workout.id.as_deref(), Some("665f1c2e"));
    assert_eq!(workout.user_id.as_deref(), Some("auth0|user-42"));
    assert_eq!(workout.estimated_duration, Some(45));
    assert_eq!(workout.target_muscle_groups, vec!["legs", "core", "arms"]);
    assert_eq!(workout.total_calories_burned, Some(320.0));
}

#[test]
fn test_first_occurrence_day_order() {
    let workout = build_workout(raw_with_days(&["B", "A", "B", "C"]));
    assert_eq!(workout.day_keys(), vec![Some("B"), Some("A"), Some("C")]);
}

#[test]
fn test_every_record_lands_in_exactly_one_group() {
    let days = ["Fri", "Mon", "Fri", "Wed", "Mon", "Mon", "Sun"];
    let workout = build_workout(raw_with_days(&days));

    let grouped: usize = workout
        .exercise_by_day
        .iter()
        .map(|group| group.exercises.len())
        .sum();
    assert_eq!(grouped, workout.exercises.len());

    for record in &workout.exercises {
        let holders = workout
            .exercise_by_day
            .iter()
            .filter(|group| group.exercises.contains(record))
            .count();
        assert_eq!(holders, 1, "{:?} should be in one group", record.exercise_name);
    }
}

#[test]
fn test_groups_are_ordered_subsequences() {
    let days = ["Mon", "Tue", "Mon", "Tue", "Mon"];
    let workout = build_workout(raw_with_days(&days));

    for group in &workout.exercise_by_day {
        let expected: Vec<&ExerciseRecord> = workout
            .exercises
            .iter()
            .filter(|record| record.day == group.day)
            .collect();
        let actual: Vec<&ExerciseRecord> = group.exercises.iter().collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_null_day_record_is_carried_and_grouped() {
    let workout = build_workout_from_value(json!({
        "id": "w-null",
        "exercises": [
            {"exercise_name": "Squat", "day": "Monday", "sets": 3, "repetitions": 10},
            {"exercise_name": null, "day": null, "sets": 3, "repetitions": 5},
            {"exercise_name": "Row", "day": "Monday", "sets": 3, "duration": 45.5}
        ]
    }))
    .unwrap();

    assert_eq!(workout.exercises.len(), 3);
    assert_eq!(workout.day_keys(), vec![Some("Monday"), None]);
    assert_eq!(workout.group_for(None).unwrap().exercises.len(), 1);
    assert!(!workout.exercises[1].is_valid());
    assert_eq!(workout.exercise_by_day[0].exercises[1].duration, Some(45.5));
}

#[test]
fn test_missing_day_stays_apart_from_empty_day() {
    let workout = build_workout_from_value(json!({
        "exercises": [
            {"exercise_name": "A", "sets": 1, "repetitions": 1},
            {"exercise_name": "B", "day": "", "sets": 1, "repetitions": 1}
        ]
    }))
    .unwrap();

    assert_eq!(workout.id, None);
    assert_eq!(workout.day_keys(), vec![None, Some("")]);
    assert_eq!(names(&workout.group_for(None).unwrap().exercises), vec!["A"]);
    assert_eq!(names(&workout.day("").unwrap().exercises), vec!["B"]);

    let out = serde_json::to_value(&workout).unwrap();
    assert!(out.get("id").is_none());
    assert!(out["exercises"][0].get("day").is_none());
    assert!(out["exerciseByDay"][0].get("day").is_none());
    assert_eq!(out["exerciseByDay"][1]["day"], "");
}

#[test]
fn test_building_twice_is_identical() {
    let first = build_workout_from_value(scenario_body()).unwrap();
    let second = build_workout_from_value(scenario_body()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_exercises_yield_no_days() {
    let workout = build_workout_from_value(json!({
        "id": "empty",
        "exercises": []
    }))
    .unwrap();

    assert!(workout.exercises.is_empty());
    assert!(workout.exercise_by_day.is_empty());
}

#[test]
fn test_null_exercises_is_malformed() {
    let mut body = scenario_body();
    body["exercises"] = Value::Null;

    let err = build_workout_from_value(body).unwrap_err();
    assert!(matches!(err, RoutineError::MalformedResponse { .. }));
    assert!(err.to_string().contains("null"));
}

#[test]
fn test_missing_exercises_is_malformed() {
    let err = build_workout_from_value(json!({"id": "w1"})).unwrap_err();
    assert!(matches!(err, RoutineError::MalformedResponse { .. }));
}

#[test]
fn test_view_model_serializes_camel_case() {
    let workout = build_workout_from_value(scenario_body()).unwrap();
    let out = serde_json::to_value(&workout).unwrap();

    assert_eq!(out["userId"], "auth0|user-42");
    assert_eq!(out["estimatedDuration"], 45);
    assert_eq!(out["exerciseByDay"][1]["day"], "Tuesday");
    assert_eq!(out["exerciseByDay"][0]["exercises"][0]["exercise_name"], "Squat");
    assert!(out["exercises"][0].get("duration").is_none());

    let back: Workout = serde_json::from_value(out).unwrap();
    assert_eq!(back, workout);
}

#[test]
fn test_day_calorie_estimate() {
    let mut raw = raw_with_days(&["Mon", "Mon", "Tue"]);
    raw.exercises[0].estimated_calories_burned = Some(8.5);
    raw.exercises[1].estimated_calories_burned = Some(4.0);
    let workout = build_workout(raw);

    assert_eq!(workout.day("Mon").unwrap().estimated_calories(), Some(12.5));
    assert_eq!(workout.day("Tue").unwrap().estimated_calories(), None);
    assert!(workout.day("mon").is_none());
}
