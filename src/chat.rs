// ABOUTME: Local-only assistant chat transcript for the dashboard
// ABOUTME: Appends the user's message followed by a canned assistant reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

use chrono::{DateTime, Utc};
use routine_core::constants::messages::CHAT_STUB_REPLY;
use serde::Serialize;

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The signed-in user
    User,
    /// The assistant stub
    Assistant,
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    /// Author
    pub role: ChatRole,
    /// Text as entered
    pub content: String,
    /// When the entry was appended
    pub sent_at: DateTime<Utc>,
}

/// Chat transcript; nothing is sent over the network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Empty transcript
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message and the canned reply
    ///
    /// Returns `false` and leaves the transcript untouched for blank input.
    pub fn send(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let now = Utc::now();
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: text.to_owned(),
            sent_at: now,
        });
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: CHAT_STUB_REPLY.to_owned(),
            sent_at: now,
        });
        true
    }

    /// Transcript in order
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
