// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Name is empty or invalid.
    InvalidName(String),
    /// City is empty or invalid.
    InvalidCity(String),
    /// Address is empty or invalid.
    InvalidAddress(String),
    /// State is not one of the accepted state codes.
    InvalidState(String),
    /// A genre is not one of the accepted genres.
    InvalidGenre(String),
    /// No genres were selected.
    MissingGenres,
    /// Phone number is not in `NNN-NNN-NNNN` form.
    InvalidPhone(String),
    /// A free-text field exceeds its maximum length.
    FieldTooLong {
        /// The field that was too long.
        field: &'static str,
        /// The maximum allowed length in characters.
        max: usize,
        /// The actual length in characters.
        actual: usize,
    },
    /// A show start time could not be parsed.
    InvalidStartTime {
        /// The rejected input.
        value: String,
        /// The parser's explanation.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidCity(msg) => write!(f, "Invalid city: {msg}"),
            Self::InvalidAddress(msg) => write!(f, "Invalid address: {msg}"),
            Self::InvalidState(state) => write!(f, "Invalid state: '{state}'"),
            Self::InvalidGenre(genre) => write!(f, "Invalid genre: '{genre}'"),
            Self::MissingGenres => write!(f, "At least one genre is required"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number '{phone}': expected NNN-NNN-NNNN")
            }
            Self::FieldTooLong { field, max, actual } => {
                write!(f, "Field '{field}' is {actual} characters long (max {max})")
            }
            Self::InvalidStartTime { value, error } => {
                write!(f, "Invalid start time '{value}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
