// ABOUTME: HTTP collaborators for the workout API
// ABOUTME: Workout fetcher, questionnaire client, cancellation, and client construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

/// Cooperative cancellation for in-flight requests
pub mod cancellation;
/// reqwest client construction and response error mapping
pub mod http;
/// Questionnaire submission
pub mod questionnaire;
/// Workout retrieval
pub mod workouts;

pub use cancellation::CancellationToken;
pub use http::build_http_client;
pub use questionnaire::QuestionnaireClient;
pub use workouts::{FetchOutcome, WorkoutFetcher};
