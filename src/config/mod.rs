// ABOUTME: Environment-driven client configuration for the workout API
// ABOUTME: Resolves base URL, endpoint paths, timeout, user agent, and access token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

//! Client configuration loaded from `ROUTINE_*` environment variables

/// Deployment environment selection
pub mod environment;

pub use environment::Environment;

use anyhow::{Context, Result};
use routine_core::constants::{endpoints, env_vars, service};
use routine_core::{RoutineError, RoutineResult};
use std::env;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Settings for the HTTP collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Deployment environment
    pub environment: Environment,
    /// API origin
    pub base_url: Url,
    /// Path of the authenticated workout GET
    pub workouts_path: String,
    /// Path of the questionnaire POST
    pub routines_path: String,
    /// Request timeout in seconds, `None` waits indefinitely
    pub http_timeout_secs: Option<u64>,
    /// User agent sent on every request
    pub user_agent: String,
    /// Static bearer token, if one was provided
    pub access_token: Option<String>,
}

impl ClientConfig {
    /// Default configuration pointed at `base_url`
    ///
    /// # Errors
    ///
    /// Returns `Config` when `base_url` does not parse or is not http(s)
    pub fn for_base_url(base_url: &str) -> RoutineResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RoutineError::config(env_vars::API_BASE_URL, e.to_string()))?;
        let config = Self {
            environment: Environment::default(),
            base_url,
            workouts_path: endpoints::WORKOUTS.to_owned(),
            routines_path: endpoints::ROUTINES.to_owned(),
            http_timeout_secs: None,
            user_agent: default_user_agent(),
            access_token: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable fails to parse or the result does not validate
    pub fn from_env() -> Result<Self> {
        let raw_base =
            env::var(env_vars::API_BASE_URL).unwrap_or_else(|_| endpoints::DEFAULT_BASE_URL.into());
        let base_url = Url::parse(&raw_base)
            .with_context(|| format!("Invalid {}: {raw_base}", env_vars::API_BASE_URL))?;

        let http_timeout_secs = env::var(env_vars::HTTP_TIMEOUT_SECS)
            .ok()
            .map(|v| {
                v.parse::<u64>()
                    .with_context(|| format!("Invalid {}: {v}", env_vars::HTTP_TIMEOUT_SECS))
            })
            .transpose()?;

        let config = Self {
            environment: env::var(env_vars::ENVIRONMENT)
                .map(|v| Environment::from_str_or_default(&v))
                .unwrap_or_default(),
            base_url,
            workouts_path: env::var(env_vars::WORKOUTS_PATH)
                .unwrap_or_else(|_| endpoints::WORKOUTS.into()),
            routines_path: env::var(env_vars::ROUTINES_PATH)
                .unwrap_or_else(|_| endpoints::ROUTINES.into()),
            http_timeout_secs,
            user_agent: env::var(env_vars::USER_AGENT).unwrap_or_else(|_| default_user_agent()),
            access_token: env::var(env_vars::ACCESS_TOKEN)
                .ok()
                .filter(|token| !token.trim().is_empty()),
        };

        config
            .validate()
            .context("Client configuration failed validation")?;
        config.log_summary();
        Ok(config)
    }

    /// Check URL scheme, path shape, and timeout
    ///
    /// # Errors
    ///
    /// Returns `Config` naming the offending variable
    pub fn validate(&self) -> RoutineResult<()> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(RoutineError::config(
                env_vars::API_BASE_URL,
                format!("scheme must be http or https, got '{}'", self.base_url.scheme()),
            ));
        }
        if self.base_url.host_str().is_none() {
            return Err(RoutineError::config(env_vars::API_BASE_URL, "missing host"));
        }
        for (key, path) in [
            (env_vars::WORKOUTS_PATH, &self.workouts_path),
            (env_vars::ROUTINES_PATH, &self.routines_path),
        ] {
            if !path.starts_with('/') {
                return Err(RoutineError::config(
                    key,
                    format!("path must start with '/', got '{path}'"),
                ));
            }
        }
        if self.http_timeout_secs == Some(0) {
            return Err(RoutineError::config(
                env_vars::HTTP_TIMEOUT_SECS,
                "timeout must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Full URL of the workout GET
    #[must_use]
    pub fn workouts_url(&self) -> String {
        self.endpoint(&self.workouts_path)
    }

    /// Full URL of the questionnaire POST
    #[must_use]
    pub fn routines_url(&self) -> String {
        self.endpoint(&self.routines_path)
    }

    /// Configured request timeout
    #[must_use]
    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    fn log_summary(&self) {
        info!(
            environment = %self.environment,
            http.base_url = %self.base_url,
            http.timeout_secs = ?self.http_timeout_secs,
            auth.static_token = self.access_token.is_some(),
            "Client configuration loaded"
        );
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", service::NAME, env!("CARGO_PKG_VERSION"))
}
