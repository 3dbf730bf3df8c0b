// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use fyyur::CoreError;
use fyyur_domain::DomainError;
use fyyur_persistence::PersistenceError;

use crate::request_response::FormError;

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent
/// the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Builds the not-found error for a venue.
    #[must_use]
    pub fn venue_not_found(venue_id: i64) -> Self {
        Self::ResourceNotFound {
            resource_type: String::from("Venue"),
            message: format!("Venue {venue_id} does not exist"),
        }
    }

    /// Builds the not-found error for an artist.
    #[must_use]
    pub fn artist_not_found(artist_id: i64) -> Self {
        Self::ResourceNotFound {
            resource_type: String::from("Artist"),
            message: format!("Artist {artist_id} does not exist"),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        Self::InvalidInput {
            field: String::from(err.field()),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::InvalidName(_) => "name",
        DomainError::InvalidCity(_) => "city",
        DomainError::InvalidAddress(_) => "address",
        DomainError::InvalidState(_) => "state",
        DomainError::InvalidGenre(_) | DomainError::MissingGenres => "genres",
        DomainError::InvalidPhone(_) => "phone",
        DomainError::FieldTooLong { field, .. } => *field,
        DomainError::InvalidStartTime { .. } => "start_time",
    };

    ApiError::InvalidInput {
        field: String::from(field),
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    ApiError::Internal {
        message: err.to_string(),
    }
}

/// Translates a persistence error into an API error.
///
/// Missing rows become not-found errors and rejected references or
/// constraints become invalid input. Everything else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::VenueNotFound(venue_id) => ApiError::venue_not_found(venue_id),
        PersistenceError::ArtistNotFound(artist_id) => ApiError::artist_not_found(artist_id),
        PersistenceError::ForeignKeyViolation(msg) => ApiError::InvalidInput {
            field: String::from("show"),
            message: format!("Referenced artist or venue does not exist: {msg}"),
        },
        PersistenceError::ConstraintViolation(msg) => ApiError::InvalidInput {
            field: String::from("record"),
            message: msg,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
