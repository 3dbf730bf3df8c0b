// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while assembling view-models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A show start time could not be formatted for display.
    TimeFormatting {
        /// The show whose start time failed to format.
        show_id: i64,
        /// The formatter's explanation.
        reason: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimeFormatting { show_id, reason } => {
                write!(f, "Failed to format start time of show {show_id}: {reason}")
            }
        }
    }
}

impl std::error::Error for CoreError {}
