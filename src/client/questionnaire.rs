// ABOUTME: Questionnaire submission to the routines endpoint
// ABOUTME: Validates, attaches a bearer token when signed in, and returns the raw JSON reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

use reqwest::Client;
use routine_core::models::Questionnaire;
use routine_core::{RoutineError, RoutineResult};
use serde_json::Value;
use tracing::{info, warn};

use super::http::{build_http_client, status_error, transport_error};
use crate::auth::AuthSession;
use crate::config::ClientConfig;

/// Posts completed questionnaires
#[derive(Debug, Clone)]
pub struct QuestionnaireClient {
    http: Client,
    url: String,
}

impl QuestionnaireClient {
    /// Create a client for the configured routines endpoint
    ///
    /// # Errors
    ///
    /// Returns `Config` if the HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> RoutineResult<Self> {
        Ok(Self::with_client(build_http_client(config)?, config))
    }

    /// Create a client reusing an existing HTTP client
    #[must_use]
    pub fn with_client(http: Client, config: &ClientConfig) -> Self {
        Self {
            http,
            url: config.routines_url(),
        }
    }

    /// Submit the questionnaire
    ///
    /// # Errors
    ///
    /// - `InvalidQuestionnaire` before any request when a bound is violated
    /// - `AuthUnavailable` when the session is established but yields no token
    /// - `FetchFailure` on transport errors and non-2xx responses
    /// - `MalformedResponse` when a non-empty reply is not JSON
    pub async fn submit(
        &self,
        questionnaire: &Questionnaire,
        session: &AuthSession,
    ) -> RoutineResult<Value> {
        questionnaire.validate()?;

        let mut request = self.http.post(&self.url).json(questionnaire);
        if session.is_established() {
            request = request.bearer_auth(session.access_token().await?);
        }

        let response = request.send().await.map_err(|e| transport_error(&e))?;
        let status = response.status();
        if !status.is_success() {
            let err = status_error(response).await;
            warn!(http.url = %self.url, http.status = status.as_u16(), "Questionnaire submission failed: {err}");
            return Err(err);
        }

        let text = response.text().await.map_err(|e| transport_error(&e))?;
        info!(
            http.url = %self.url,
            http.status = status.as_u16(),
            questionnaire.goal = %questionnaire.fitness_goal,
            "Questionnaire submitted"
        );
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| RoutineError::malformed(format!("routine reply is not JSON: {e}")))
    }
}
