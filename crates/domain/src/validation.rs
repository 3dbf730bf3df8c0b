// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::choices::{is_known_genre, is_known_state};
use crate::error::DomainError;
use crate::types::{ArtistFields, VenueFields};

/// Maximum length of the free-text "seeking" description.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Validates the fields of a venue submission.
///
/// This checks field-level rules only. It does NOT check that the
/// venue exists or that related rows exist; that requires storage.
///
/// # Errors
///
/// Returns an error if:
/// - The name, city or address is blank
/// - The state is not an accepted state code
/// - No genre is given, or a genre is not an accepted genre
/// - The phone number is present but malformed
/// - The description is longer than [`MAX_DESCRIPTION_LEN`]
pub fn validate_venue_fields(fields: &VenueFields) -> Result<(), DomainError> {
    validate_name(&fields.name)?;
    validate_city(&fields.city)?;
    validate_state(&fields.state)?;

    if fields.address.trim().is_empty() {
        return Err(DomainError::InvalidAddress(String::from(
            "Address cannot be empty",
        )));
    }

    if let Some(phone) = &fields.phone {
        validate_phone(phone)?;
    }
    validate_genres(&fields.genres)?;
    validate_description_len("seeking_description", &fields.description)
}

/// Validates the fields of an artist submission.
///
/// # Errors
///
/// Returns an error if:
/// - The name or city is blank
/// - The state is not an accepted state code
/// - No genre is given, or a genre is not an accepted genre
/// - The phone number is present but malformed
/// - The seeking description is longer than [`MAX_DESCRIPTION_LEN`]
pub fn validate_artist_fields(fields: &ArtistFields) -> Result<(), DomainError> {
    validate_name(&fields.name)?;
    validate_city(&fields.city)?;
    validate_state(&fields.state)?;

    if let Some(phone) = &fields.phone {
        validate_phone(phone)?;
    }
    validate_genres(&fields.genres)?;
    validate_description_len("seeking_description", &fields.seeking_description)
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}

fn validate_city(city: &str) -> Result<(), DomainError> {
    if city.trim().is_empty() {
        return Err(DomainError::InvalidCity(String::from(
            "City cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that `state` is an accepted US state code.
///
/// # Errors
///
/// Returns `DomainError::InvalidState` for any code not in the state choices.
pub fn validate_state(state: &str) -> Result<(), DomainError> {
    if !is_known_state(state) {
        return Err(DomainError::InvalidState(state.to_string()));
    }
    Ok(())
}

/// Validates a genre selection.
///
/// At least one genre is required and every genre must be an accepted choice.
///
/// # Errors
///
/// Returns `DomainError::MissingGenres` for an empty selection, or
/// `DomainError::InvalidGenre` naming the first unknown genre.
pub fn validate_genres(genres: &[String]) -> Result<(), DomainError> {
    if genres.is_empty() {
        return Err(DomainError::MissingGenres);
    }

    if let Some(unknown) = genres.iter().find(|genre| !is_known_genre(genre)) {
        return Err(DomainError::InvalidGenre(unknown.clone()));
    }

    Ok(())
}

/// Validates a phone number of the form `NNN-NNN-NNNN`.
///
/// # Errors
///
/// Returns `DomainError::InvalidPhone` if the number has any other shape.
pub fn validate_phone(phone: &str) -> Result<(), DomainError> {
    let groups: Vec<&str> = phone.split('-').collect();
    let well_formed: bool = groups.len() == 3
        && groups
            .iter()
            .zip([3_usize, 3, 4])
            .all(|(group, len)| group.len() == len && group.bytes().all(|b| b.is_ascii_digit()));

    if !well_formed {
        return Err(DomainError::InvalidPhone(phone.to_string()));
    }
    Ok(())
}

fn validate_description_len(field: &'static str, text: &str) -> Result<(), DomainError> {
    let actual: usize = text.chars().count();
    if actual > MAX_DESCRIPTION_LEN {
        return Err(DomainError::FieldTooLong {
            field,
            max: MAX_DESCRIPTION_LEN,
            actual,
        });
    }
    Ok(())
}
