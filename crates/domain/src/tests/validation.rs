// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_artist_fields, create_test_venue_fields};
use crate::{
    ArtistFields, DomainError, MAX_DESCRIPTION_LEN, VenueFields, validate_artist_fields,
    validate_genres, validate_phone, validate_state, validate_venue_fields,
};

#[test]
fn test_validate_venue_fields_accepts_valid_venue() {
    let fields: VenueFields = create_test_venue_fields();
    assert!(validate_venue_fields(&fields).is_ok());
}

#[test]
fn test_validate_venue_fields_rejects_blank_name() {
    let mut fields: VenueFields = create_test_venue_fields();
    fields.name = String::from("   ");

    let result: Result<(), DomainError> = validate_venue_fields(&fields);
    assert!(matches!(result, Err(DomainError::InvalidName(_))));
}

#[test]
fn test_validate_venue_fields_rejects_blank_address() {
    let mut fields: VenueFields = create_test_venue_fields();
    fields.address = String::new();

    let result: Result<(), DomainError> = validate_venue_fields(&fields);
    assert!(matches!(result, Err(DomainError::InvalidAddress(_))));
}

#[test]
fn test_validate_venue_fields_allows_missing_phone() {
    let mut fields: VenueFields = create_test_venue_fields();
    fields.phone = None;
    assert!(validate_venue_fields(&fields).is_ok());
}

#[test]
fn test_validate_venue_fields_rejects_long_description() {
    let mut fields: VenueFields = create_test_venue_fields();
    fields.description = "x".repeat(MAX_DESCRIPTION_LEN + 1);

    let result: Result<(), DomainError> = validate_venue_fields(&fields);
    assert_eq!(
        result,
        Err(DomainError::FieldTooLong {
            field: "seeking_description",
            max: MAX_DESCRIPTION_LEN,
            actual: MAX_DESCRIPTION_LEN + 1,
        })
    );
}

#[test]
fn test_validate_artist_fields_accepts_valid_artist() {
    let fields: ArtistFields = create_test_artist_fields();
    assert!(validate_artist_fields(&fields).is_ok());
}

#[test]
fn test_validate_artist_fields_rejects_blank_city() {
    let mut fields: ArtistFields = create_test_artist_fields();
    fields.city = String::new();

    let result: Result<(), DomainError> = validate_artist_fields(&fields);
    assert!(matches!(result, Err(DomainError::InvalidCity(_))));
}

#[test]
fn test_validate_artist_fields_rejects_unknown_state() {
    let mut fields: ArtistFields = create_test_artist_fields();
    fields.state = String::from("ZZ");

    let result: Result<(), DomainError> = validate_artist_fields(&fields);
    assert_eq!(result, Err(DomainError::InvalidState(String::from("ZZ"))));
}

#[test]
fn test_validate_state_is_case_sensitive() {
    assert!(validate_state("NY").is_ok());
    assert!(validate_state("ny").is_err());
}

#[test]
fn test_validate_genres_requires_at_least_one() {
    assert_eq!(validate_genres(&[]), Err(DomainError::MissingGenres));
}

#[test]
fn test_validate_genres_names_first_unknown_genre() {
    let genres: Vec<String> = vec![
        String::from("Jazz"),
        String::from("Polka"),
        String::from("Yodel"),
    ];
    assert_eq!(
        validate_genres(&genres),
        Err(DomainError::InvalidGenre(String::from("Polka")))
    );
}

#[test]
fn test_validate_phone_accepts_dashed_form() {
    assert!(validate_phone("415-000-1234").is_ok());
}

#[test]
fn test_validate_phone_rejects_other_forms() {
    for phone in ["4150001234", "415-000-123", "415-0a0-1234", "415-000-1234-5", ""] {
        assert!(
            matches!(validate_phone(phone), Err(DomainError::InvalidPhone(_))),
            "expected '{phone}' to be rejected"
        );
    }
}
