// ABOUTME: Constants for API paths, client defaults, and questionnaire bounds
// ABOUTME: Pure data constants grouped by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

//! Constants grouped by domain.

/// API endpoints on the workout server
pub mod endpoints {
    /// Default API origin used by the original web client
    pub const DEFAULT_BASE_URL: &str = "http://0.0.0.0:8000";
    /// Workout retrieval path (authenticated GET)
    ///
    /// The routine server only lists routines (`GET /api/routines` returns an
    /// array), so no route serves one workout body. This default is a client
    /// convention; point `ROUTINE_WORKOUTS_PATH` at the real route.
    pub const WORKOUTS: &str = "/api/workouts";
    /// Questionnaire submission path (POST)
    pub const ROUTINES: &str = "/api/routines";
}

/// Environment variable names read by the client configuration
pub mod env_vars {
    /// API origin
    pub const API_BASE_URL: &str = "ROUTINE_API_BASE_URL";
    /// Workout GET path override
    pub const WORKOUTS_PATH: &str = "ROUTINE_WORKOUTS_PATH";
    /// Questionnaire POST path override
    pub const ROUTINES_PATH: &str = "ROUTINE_ROUTINES_PATH";
    /// Optional request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "ROUTINE_HTTP_TIMEOUT_SECS";
    /// User agent override
    pub const USER_AGENT: &str = "ROUTINE_USER_AGENT";
    /// Bearer token for the CLI's static token provider
    pub const ACCESS_TOKEN: &str = "ROUTINE_ACCESS_TOKEN";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Questionnaire defaults and bounds
pub mod questionnaire {
    /// Lowest accepted space constraint
    pub const MIN_SPACE_CONSTRAINT: u8 = 0;
    /// Highest accepted space constraint
    pub const MAX_SPACE_CONSTRAINT: u8 = 10;
    /// Slider default for available space
    pub const DEFAULT_SPACE_CONSTRAINT: u8 = 5;
    /// Default session length in minutes
    pub const DEFAULT_WORKOUT_DURATION_MINUTES: u32 = 30;
}

/// Service identity used in logs and the user agent
pub mod service {
    /// Service name
    pub const NAME: &str = "routine-planner";
}

/// Canned text for the local chat stub and notifications
pub mod messages {
    /// Assistant reply sent for every user message
    pub const CHAT_STUB_REPLY: &str =
        "I'm your AI fitness assistant. How can I help you customize your workout today?";
    /// Title of the workout completion notification
    pub const WORKOUT_COMPLETE_TITLE: &str = "Congrats";
    /// Title of a failed data load notification
    pub const FETCH_FAILED_TITLE: &str = "Could not load your workout";
    /// Title of a successful questionnaire submission
    pub const ROUTINE_CREATED_TITLE: &str = "Success";
    /// Body of a successful questionnaire submission
    pub const ROUTINE_CREATED_BODY: &str = "Your workout routine has been created!";
}
