// ABOUTME: Access-token seam between the identity provider and the HTTP collaborators
// ABOUTME: TokenProvider trait, a static provider, and the AuthSession readiness guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

//! # Authentication
//!
//! The client never performs a login flow itself. Whatever owns the user's
//! identity implements [`TokenProvider`]; the HTTP collaborators only ask an
//! [`AuthSession`] for a bearer token. A session without a provider is
//! "not established" and data loads are skipped rather than failed.

use async_trait::async_trait;
use routine_core::{RoutineError, RoutineResult};
use std::fmt;
use std::sync::Arc;

use crate::config::ClientConfig;

/// Source of bearer tokens for the workout API
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Obtain a currently valid access token
    ///
    /// # Errors
    ///
    /// Returns `AuthUnavailable` when no token can be issued
    async fn access_token(&self) -> RoutineResult<String>;
}

/// Provider returning a fixed token, e.g. one taken from the environment
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Wrap a pre-issued token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> RoutineResult<String> {
        if self.token.trim().is_empty() {
            return Err(RoutineError::auth_unavailable("static token is empty"));
        }
        Ok(self.token.clone())
    }
}

/// Authentication state handed to each request
#[derive(Clone, Default)]
pub struct AuthSession {
    provider: Option<Arc<dyn TokenProvider>>,
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("established", &self.is_established())
            .finish()
    }
}

impl AuthSession {
    /// Session with no signed-in user
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session backed by `provider`
    #[must_use]
    pub fn established(provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Session using the configured static token, anonymous when none is set
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        config
            .access_token
            .as_ref()
            .map_or_else(Self::anonymous, |token| {
                Self::established(Arc::new(StaticTokenProvider::new(token.clone())))
            })
    }

    /// Whether a signed-in user is present
    #[must_use]
    pub fn is_established(&self) -> bool {
        self.provider.is_some()
    }

    /// Ask the provider for a token
    ///
    /// # Errors
    ///
    /// Returns `AuthUnavailable` when the session is anonymous or the
    /// provider cannot issue a token
    pub async fn access_token(&self) -> RoutineResult<String> {
        match &self.provider {
            Some(provider) => provider.access_token().await,
            None => Err(RoutineError::auth_unavailable("no signed-in user")),
        }
    }
}
