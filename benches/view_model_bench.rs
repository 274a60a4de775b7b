// ABOUTME: Criterion benchmarks for the workout view-model builder
// ABOUTME: Measures day grouping and full JSON-to-view-model builds at several plan sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

//! Criterion benchmarks for the workout view-model builder.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use routine_planner::models::ExerciseRecord;
use routine_planner::WorkoutViewModelBuilder;
use serde_json::{json, Value};

const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn generate_exercises(count: usize) -> Vec<ExerciseRecord> {
    (0..count)
        .map(|i| {
            let day = DAYS[(i * 3) % DAYS.len()];
            if i % 4 == 0 {
                ExerciseRecord::with_duration(format!("Hold {i}"), day, 3, 30.0)
            } else {
                ExerciseRecord::with_repetitions(format!("Lift {i}"), day, 3, 10)
            }
        })
        .collect()
}

fn generate_body(count: usize) -> Value {
    json!({
        "id": "bench",
        "user_id": "bench-user",
        "estimated_duration": 60,
        "exercises": generate_exercises(count),
        "target_muscle_groups": ["legs", "core"],
        "total_calories_burned": 500
    })
}

fn bench_group_by_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by_day");
    for size in [10_usize, 100, 1_000] {
        let exercises = generate_exercises(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &exercises, |b, ex| {
            b.iter(|| routine_core::view_model::group_by_day(black_box(ex)));
        });
    }
    group.finish();
}

fn bench_build_from_value(c: &mut Criterion) {
    let builder = WorkoutViewModelBuilder::new().warn_on_invalid_records(false);
    let mut group = c.benchmark_group("build_from_value");
    for size in [10_usize, 100, 1_000] {
        let body = generate_body(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.iter(|| builder.build_from_value(black_box(body.clone())).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_group_by_day, bench_build_from_value);
criterion_main!(benches);
