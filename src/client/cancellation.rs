// ABOUTME: Cooperative cancellation handle shared between a request and its owner
// ABOUTME: Built on a tokio watch channel so every clone observes the same flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

use routine_core::{RoutineError, RoutineResult};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Cancellation flag for in-flight requests
///
/// Clones share state. Once cancelled a token stays cancelled.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    state: Arc<watch::Sender<bool>>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    /// Create a token that is not cancelled
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state: Arc::new(state),
        }
    }

    /// Signal cancellation to every clone
    pub fn cancel(&self) {
        self.state.send_replace(true);
    }

    /// Whether `cancel` has been called
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.state.borrow()
    }

    /// Resolve once the token is cancelled
    pub async fn cancelled(&self) {
        let mut rx = self.state.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }

    /// Drive `future` unless cancellation wins first
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` when the token fires before `future` completes,
    /// otherwise whatever `future` returns
    pub async fn run<F, T>(&self, future: F) -> RoutineResult<T>
    where
        F: Future<Output = RoutineResult<T>>,
    {
        if self.is_cancelled() {
            return Err(RoutineError::Cancelled);
        }
        tokio::select! {
            biased;
            () = self.cancelled() => Err(RoutineError::Cancelled),
            result = future => result,
        }
    }
}
