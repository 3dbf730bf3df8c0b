// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One-shot user notices.
//!
//! Mutations queue a message; the next rendered page drains the queue
//! and carries the messages.

use serde::{Deserialize, Serialize};

/// Whether a flash message reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Error,
}

/// A single queued notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Success or failure.
    pub category: FlashCategory,
    /// The text shown to the user.
    pub message: String,
}

impl FlashMessage {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            message: message.into(),
        }
    }

    /// Creates a failure notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Error,
            message: message.into(),
        }
    }
}

/// Messages waiting for the next page render, oldest first.
#[derive(Debug, Default)]
pub struct FlashQueue {
    pending: Vec<FlashMessage>,
}

impl FlashQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Queues a message.
    pub fn push(&mut self, message: FlashMessage) {
        self.pending.push(message);
    }

    /// Removes and returns every queued message.
    pub fn drain(&mut self) -> Vec<FlashMessage> {
        std::mem::take(&mut self.pending)
    }

    /// Returns the number of queued messages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether no messages are queued.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
