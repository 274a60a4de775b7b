// ABOUTME: Error types for workout normalization, fetching, and questionnaire submission
// ABOUTME: Defines RoutineError with structured context and the RoutineResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

//! # Routine Error Types
//!
//! Every failure a single data-load attempt can produce. None of them are
//! fatal to the process; callers report them and keep the page alive.

/// Errors produced by the builder and the HTTP collaborators
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RoutineError {
    /// Raw payload is missing the required shape
    #[error("Malformed workout response: {reason}")]
    MalformedResponse {
        /// What was wrong with the payload
        reason: String,
    },

    /// Network failure or non-2xx response from the workout API
    #[error("Fetch failed{}: {message}", status_suffix(.status))]
    FetchFailure {
        /// HTTP status when the server answered
        status: Option<u16>,
        /// Server message or transport error text
        message: String,
    },

    /// No authenticated session is available to issue the request
    #[error("Authentication unavailable: {reason}")]
    AuthUnavailable {
        /// Why no token could be obtained
        reason: String,
    },

    /// The owning context cancelled the request before it completed
    #[error("Request cancelled")]
    Cancelled,

    /// Questionnaire answer failed validation
    #[error("Invalid questionnaire field '{field}': {reason}")]
    InvalidQuestionnaire {
        /// Field name as it appears on the wire
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Client configuration is invalid
    #[error("Configuration error for {key}: {reason}")]
    Config {
        /// Environment variable or setting name
        key: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

impl RoutineError {
    /// Create a malformed-response error
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Create a fetch failure carrying the HTTP status
    #[must_use]
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::FetchFailure {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create a fetch failure for a transport-level error
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::FetchFailure {
            status: None,
            message: message.into(),
        }
    }

    /// Create an auth-unavailable error
    #[must_use]
    pub fn auth_unavailable(reason: impl Into<String>) -> Self {
        Self::AuthUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a questionnaire validation error
    #[must_use]
    pub fn invalid_questionnaire(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidQuestionnaire {
            field,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Config {
            key,
            reason: reason.into(),
        }
    }

    /// HTTP status attached to a fetch failure, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::FetchFailure { status, .. } => *status,
            _ => None,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map_or_else(String::new, |code| format!(" (HTTP {code})"))
}

/// Result alias used across the client
pub type RoutineResult<T> = Result<T, RoutineError>;
