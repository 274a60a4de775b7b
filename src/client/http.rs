// ABOUTME: reqwest client construction from the client configuration
// ABOUTME: Applies user agent and the optional request timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

use reqwest::{Client, ClientBuilder, Response};
use routine_core::constants::env_vars;
use routine_core::{RoutineError, RoutineResult};

use crate::config::ClientConfig;

/// Build the HTTP client used by the collaborators
///
/// # Errors
///
/// Returns `Config` if the TLS backend cannot be initialized
pub fn build_http_client(config: &ClientConfig) -> RoutineResult<Client> {
    let mut builder = ClientBuilder::new().user_agent(&config.user_agent);
    if let Some(timeout) = config.http_timeout() {
        builder = builder.timeout(timeout).connect_timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| RoutineError::config(env_vars::HTTP_TIMEOUT_SECS, e.to_string()))
}

/// Map a reqwest send error onto a transport fetch failure
pub(crate) fn transport_error(err: &reqwest::Error) -> RoutineError {
    if err.is_timeout() {
        RoutineError::transport(format!("request timed out: {err}"))
    } else if err.is_connect() {
        RoutineError::transport(format!("connection failed: {err}"))
    } else {
        RoutineError::transport(err.to_string())
    }
}

/// Turn a non-2xx response into a fetch failure without parsing the body
pub(crate) async fn status_error(response: Response) -> RoutineError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = if text.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_owned()
    } else {
        text
    };
    RoutineError::http_status(status.as_u16(), message)
}
