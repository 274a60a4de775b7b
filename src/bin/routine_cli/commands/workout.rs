// ABOUTME: Workout commands for routine-cli
// ABOUTME: Fetches over HTTP with Ctrl-C cancellation, or groups a local response file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

use anyhow::{bail, Result};
use routine_planner::auth::AuthSession;
use routine_planner::client::{CancellationToken, FetchOutcome, WorkoutFetcher};
use routine_planner::config::ClientConfig;
use routine_planner::constants::env_vars;
use routine_planner::local::load_workout_file;
use routine_planner::presenter::resolve_tab;
use routine_planner::state::{DashboardState, NotificationLevel};
use std::path::Path;
use tracing::{info, warn};

use crate::helpers::display::{display_dashboard, display_json};

/// Fetch the current workout and render it
pub async fn fetch(day: Option<&str>, json: bool) -> Result<()> {
    let config = ClientConfig::from_env()?;
    let session = AuthSession::from_config(&config);
    let fetcher = WorkoutFetcher::new(&config)?;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling fetch");
            trigger.cancel();
        }
    });

    let mut state = DashboardState::new();
    state.apply_fetch(fetcher.fetch(&session, &cancel).await);

    if cancel.is_cancelled() {
        bail!("Fetch cancelled");
    }
    if let Some(failure) = state
        .notifications
        .iter()
        .find(|n| n.level == NotificationLevel::Error)
    {
        bail!("{}: {}", failure.title, failure.body);
    }
    if state.workout.is_none() {
        info!("No workout loaded");
        println!("Not signed in: set {} to fetch your workout.", env_vars::ACCESS_TOKEN);
        return Ok(());
    }

    render(&mut state, day, json)
}

/// Build the view model from a file and render it
pub fn group(file: &Path, day: Option<&str>, json: bool) -> Result<()> {
    let workout = load_workout_file(file)?;
    let mut state = DashboardState::new();
    state.apply_fetch(Ok(FetchOutcome::Loaded(workout)));

    render(&mut state, day, json)
}

fn render(state: &mut DashboardState, day: Option<&str>, json: bool) -> Result<()> {
    if let Some(day) = day {
        let index = state
            .workout
            .as_ref()
            .and_then(|workout| resolve_tab(workout, day));
        match index {
            Some(index) => state.select_tab(index)?,
            None => state.select_day(day)?,
        }
    }
    if json {
        display_json(state.workout.as_ref())
    } else {
        display_dashboard(state);
        Ok(())
    }
}
