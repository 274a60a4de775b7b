// ABOUTME: Authenticated retrieval of the user's current workout
// ABOUTME: GETs the workout endpoint, unwraps the message envelope, and builds the view model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

use reqwest::Client;
use routine_core::models::Workout;
use routine_core::{RoutineError, RoutineResult, WorkoutViewModelBuilder};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::cancellation::CancellationToken;
use super::http::{build_http_client, status_error, transport_error};
use crate::auth::AuthSession;
use crate::config::ClientConfig;

/// Result of one data-load attempt that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// A fresh view model was built from the server response
    Loaded(Workout),
    /// No signed-in user, so no request was issued
    Skipped,
}

impl FetchOutcome {
    /// The loaded workout, if any
    #[must_use]
    pub const fn workout(&self) -> Option<&Workout> {
        match self {
            Self::Loaded(workout) => Some(workout),
            Self::Skipped => None,
        }
    }
}

/// Fetches the current workout for the signed-in user
#[derive(Debug, Clone)]
pub struct WorkoutFetcher {
    http: Client,
    url: String,
    builder: WorkoutViewModelBuilder,
}

impl WorkoutFetcher {
    /// Create a fetcher for the configured workout endpoint
    ///
    /// # Errors
    ///
    /// Returns `Config` if the HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> RoutineResult<Self> {
        Ok(Self::with_client(build_http_client(config)?, config))
    }

    /// Create a fetcher reusing an existing HTTP client
    #[must_use]
    pub fn with_client(http: Client, config: &ClientConfig) -> Self {
        Self {
            http,
            url: config.workouts_url(),
            builder: WorkoutViewModelBuilder::default(),
        }
    }

    /// Replace the view-model builder
    #[must_use]
    pub fn with_builder(mut self, builder: WorkoutViewModelBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Run one data-load attempt
    ///
    /// Returns `Skipped` without touching the network when the session is
    /// not established or the provider has no token to give.
    ///
    /// # Errors
    ///
    /// - `FetchFailure` on transport errors and non-2xx responses
    /// - `MalformedResponse` when the body is not the expected envelope
    /// - `Cancelled` when `cancel` fires before the attempt completes
    pub async fn fetch(
        &self,
        session: &AuthSession,
        cancel: &CancellationToken,
    ) -> RoutineResult<FetchOutcome> {
        if !session.is_established() {
            debug!(http.url = %self.url, "No signed-in user, skipping workout fetch");
            return Ok(FetchOutcome::Skipped);
        }

        cancel.run(self.fetch_authenticated(session)).await
    }

    async fn fetch_authenticated(&self, session: &AuthSession) -> RoutineResult<FetchOutcome> {
        let token = match session.access_token().await {
            Ok(token) => token,
            Err(RoutineError::AuthUnavailable { reason }) => {
                warn!(reason = %reason, "Token provider unavailable, skipping workout fetch");
                return Ok(FetchOutcome::Skipped);
            }
            Err(e) => return Err(e),
        };

        let response = self
            .http
            .get(&self.url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let err = status_error(response).await;
            warn!(http.url = %self.url, http.status = status.as_u16(), "Workout fetch failed: {err}");
            return Err(err);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RoutineError::malformed(format!("response is not JSON: {e}")))?;
        let workout = self.builder.build_from_value(unwrap_envelope(body)?)?;

        info!(
            http.url = %self.url,
            http.status = status.as_u16(),
            workout.id = ?workout.id,
            workout.days = workout.exercise_by_day.len(),
            "Workout loaded"
        );
        Ok(FetchOutcome::Loaded(workout))
    }
}

fn unwrap_envelope(mut body: Value) -> RoutineResult<Value> {
    body.as_object_mut()
        .and_then(|envelope| envelope.remove("message"))
        .ok_or_else(|| RoutineError::malformed("missing 'message' envelope"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope() {
        let inner = unwrap_envelope(json!({"message": {"exercises": []}})).unwrap();
        assert_eq!(inner, json!({"exercises": []}));

        assert!(unwrap_envelope(json!({"exercises": []})).is_err());
        assert!(unwrap_envelope(json!("message")).is_err());
    }
}
