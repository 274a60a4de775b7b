// ABOUTME: Main library entry point for the routine planner client
// ABOUTME: Wires configuration, logging, auth, HTTP collaborators, and dashboard presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

#![deny(unsafe_code)]

//! # Routine Planner
//!
//! Client side of a personalized workout planner. A signed-in user's current
//! workout is fetched from the API, regrouped by day, and projected into
//! the tabs, rows, and summary cards a dashboard renders.
//!
//! ## Architecture
//!
//! - **`routine_core`**: errors, wire models, and the pure day-grouping builder
//! - **config**: `ROUTINE_*` environment configuration
//! - **logging**: tracing subscriber setup
//! - **auth**: `TokenProvider` seam and the `AuthSession` readiness guard
//! - **client**: workout fetcher, questionnaire client, cancellation
//! - **local**: view model from a saved response file
//! - **presenter**: day tabs, exercise rows, summary cards
//! - **state** / **chat**: dashboard state container and the local chat stub
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use routine_planner::auth::AuthSession;
//! use routine_planner::client::{CancellationToken, FetchOutcome, WorkoutFetcher};
//! use routine_planner::config::ClientConfig;
//! use routine_planner::presenter::day_tabs;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let fetcher = WorkoutFetcher::new(&config)?;
//!     let session = AuthSession::from_config(&config);
//!
//!     if let FetchOutcome::Loaded(workout) =
//!         fetcher.fetch(&session, &CancellationToken::new()).await?
//!     {
//!         for tab in day_tabs(&workout) {
//!             println!("{}", tab.label);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

/// Access-token provider seam and session guard
pub mod auth;

/// Local assistant chat stub
pub mod chat;

/// HTTP collaborators for the workout API
pub mod client;

/// Environment-driven client configuration
pub mod config;

/// View model from saved response files
pub mod local;

/// Tracing subscriber setup
pub mod logging;

/// Render-ready projections of the workout view model
pub mod presenter;

/// Dashboard state container
pub mod state;

pub use routine_core::{constants, models};
pub use routine_core::{
    build_workout, build_workout_from_value, RoutineError, RoutineResult,
    WorkoutViewModelBuilder,
};
