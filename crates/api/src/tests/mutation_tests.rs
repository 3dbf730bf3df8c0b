// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use super::helpers::{
    NOW, create_test_artist_request, create_test_show, create_test_venue_request, form, setup,
    setup_venue_and_artist,
};
use crate::{
    FlashCategory, FlashMessage, MutationOutcome, ShowRequest, create_artist, create_show,
    create_venue, delete_artist, delete_venue, get_venue, list_shows, update_artist,
    update_venue,
};

#[test]
fn test_create_venue_success() {
    let (mut persistence, mut flashes) = setup();

    let outcome = create_venue(
        &mut persistence,
        &mut flashes,
        create_test_venue_request("The Musical Hop"),
    );

    assert!(outcome.committed);
    let venue_id = outcome.id.unwrap();
    assert_eq!(
        flashes.drain(),
        vec![FlashMessage::success("Venue The Musical Hop was successfully listed!")]
    );
    assert!(persistence.get_venue(venue_id).unwrap().is_some());
}

#[test]
fn test_create_venue_invalid_phone_writes_nothing() {
    let (mut persistence, mut flashes) = setup();
    let mut request = create_test_venue_request("The Musical Hop");
    request.phone = Some(String::from("555-1234"));

    let outcome = create_venue(&mut persistence, &mut flashes, request);

    assert_eq!(outcome, MutationOutcome::failure());
    assert_eq!(
        flashes.drain(),
        vec![FlashMessage::error(
            "An error occurred. Venue The Musical Hop could not be listed."
        )]
    );
    assert!(persistence.list_venues().unwrap().is_empty());
}

#[test]
fn test_create_venue_unknown_genre_rejected() {
    let (mut persistence, mut flashes) = setup();
    let mut request = create_test_venue_request("The Musical Hop");
    request.genres.push(String::from("Polka"));

    let outcome = create_venue(&mut persistence, &mut flashes, request);

    assert!(!outcome.committed);
    assert_eq!(flashes.len(), 1);
    assert!(persistence.list_venues().unwrap().is_empty());
}

#[test]
fn test_create_venue_stores_repeated_genre_once() {
    let (mut persistence, mut flashes) = setup();
    let mut request = create_test_venue_request("The Musical Hop");
    request.genres = vec![
        String::from("Jazz"),
        String::from("Reggae"),
        String::from("Jazz"),
    ];

    let outcome = create_venue(&mut persistence, &mut flashes, request);

    let venue = persistence.get_venue(outcome.id.unwrap()).unwrap().unwrap();
    assert_eq!(venue.fields.genres, vec!["Jazz", "Reggae"]);
}

#[test]
fn test_update_venue_success() {
    let (mut persistence, mut flashes, venue_id, _) = setup_venue_and_artist();
    let mut request = create_test_venue_request("The Musical Hop Annex");
    request.seeking_talent = false;

    let outcome = update_venue(&mut persistence, &mut flashes, venue_id, request);

    assert_eq!(outcome, MutationOutcome::success(Some(venue_id)));
    assert_eq!(
        flashes.drain(),
        vec![FlashMessage::success(
            "Venue The Musical Hop Annex was successfully edited!"
        )]
    );
    let venue = persistence.get_venue(venue_id).unwrap().unwrap();
    assert_eq!(venue.fields.name, "The Musical Hop Annex");
    assert!(!venue.fields.seeking_talent);
}

#[test]
fn test_update_venue_missing_row() {
    let (mut persistence, mut flashes) = setup();

    let outcome = update_venue(
        &mut persistence,
        &mut flashes,
        99,
        create_test_venue_request("Nowhere"),
    );

    assert!(!outcome.committed);
    let messages = flashes.drain();
    assert_eq!(messages[0].category, FlashCategory::Error);
    assert_eq!(
        messages[0].message,
        "An error occurred. Venue Nowhere could not be edited."
    );
}

#[test]
fn test_delete_venue_removes_its_shows() {
    let (mut persistence, mut flashes, venue_id, artist_id) = setup_venue_and_artist();
    create_test_show(&mut persistence, venue_id, artist_id, datetime!(2035-04-01 20:00:00));

    let outcome = delete_venue(&mut persistence, &mut flashes, venue_id);

    assert!(outcome.committed);
    assert_eq!(
        flashes.drain(),
        vec![FlashMessage::success("Venue The Musical Hop is deleted.")]
    );
    assert!(get_venue(&mut persistence, venue_id, NOW).is_err());
    assert!(list_shows(&mut persistence).unwrap().shows.is_empty());
}

#[test]
fn test_delete_venue_missing_uses_id() {
    let (mut persistence, mut flashes) = setup();

    let outcome = delete_venue(&mut persistence, &mut flashes, 5);

    assert!(!outcome.committed);
    assert_eq!(
        flashes.drain(),
        vec![FlashMessage::error(
            "An error occurred. Venue 5 could not be deleted."
        )]
    );
}

#[test]
fn test_create_artist_success_and_failure() {
    let (mut persistence, mut flashes) = setup();

    let outcome = create_artist(
        &mut persistence,
        &mut flashes,
        create_test_artist_request("Guns N Petals"),
    );
    assert!(outcome.committed);

    let mut bad = create_test_artist_request("The Wild Sax Band");
    bad.state = String::from("ZZ");
    let outcome = create_artist(&mut persistence, &mut flashes, bad);
    assert!(!outcome.committed);

    assert_eq!(
        flashes.drain(),
        vec![
            FlashMessage::success("Artist Guns N Petals was successfully listed!"),
            FlashMessage::error("An error occurred. Artist The Wild Sax Band could not be listed."),
        ]
    );
    assert_eq!(persistence.list_artists().unwrap().len(), 1);
}

#[test]
fn test_update_artist_rejects_long_description() {
    let (mut persistence, mut flashes, _, artist_id) = setup_venue_and_artist();
    let mut request = create_test_artist_request("Guns N Petals");
    request.seeking_description = "x".repeat(501);

    let outcome = update_artist(&mut persistence, &mut flashes, artist_id, request);

    assert!(!outcome.committed);
    assert_eq!(
        flashes.drain()[0].message,
        "An error occurred. Artist Guns N Petals could not be edited."
    );
    let artist = persistence.get_artist(artist_id).unwrap().unwrap();
    assert_eq!(
        artist.fields.seeking_description,
        "Looking for shows in the Bay Area!"
    );
}

#[test]
fn test_delete_artist() {
    let (mut persistence, mut flashes, venue_id, artist_id) = setup_venue_and_artist();
    create_test_show(&mut persistence, venue_id, artist_id, datetime!(2019-05-21 21:30:00));

    let outcome = delete_artist(&mut persistence, &mut flashes, artist_id);
    assert!(outcome.committed);

    let outcome = delete_artist(&mut persistence, &mut flashes, artist_id);
    assert!(!outcome.committed);

    assert_eq!(
        flashes.drain(),
        vec![
            FlashMessage::success("Artist Guns N Petals is deleted."),
            FlashMessage::error(format!(
                "An error occurred. Artist {artist_id} could not be deleted."
            )),
        ]
    );
    assert!(list_shows(&mut persistence).unwrap().shows.is_empty());
}

#[test]
fn test_create_show_success() {
    let (mut persistence, mut flashes, venue_id, artist_id) = setup_venue_and_artist();
    let request = ShowRequest::from_form(&form(&[
        ("artist_id", &artist_id.to_string()),
        ("venue_id", &venue_id.to_string()),
        ("start_time", "2035-04-01 20:00:00"),
    ]));

    let outcome = create_show(&mut persistence, &mut flashes, &request);

    assert!(outcome.committed);
    assert_eq!(
        flashes.drain(),
        vec![FlashMessage::success("Show was successfully listed!")]
    );
    assert_eq!(list_shows(&mut persistence).unwrap().shows.len(), 1);
}

#[test]
fn test_create_show_unknown_artist() {
    let (mut persistence, mut flashes, venue_id, _) = setup_venue_and_artist();
    let request = ShowRequest {
        artist_id: String::from("999"),
        venue_id: venue_id.to_string(),
        start_time: String::from("2035-04-01 20:00:00"),
    };

    let outcome = create_show(&mut persistence, &mut flashes, &request);

    assert_eq!(outcome, MutationOutcome::failure());
    assert_eq!(
        flashes.drain(),
        vec![FlashMessage::error("An error occurred. Show could not be added.")]
    );
    assert!(list_shows(&mut persistence).unwrap().shows.is_empty());
}

#[test]
fn test_create_show_malformed_time() {
    let (mut persistence, mut flashes, venue_id, artist_id) = setup_venue_and_artist();
    let request = ShowRequest {
        artist_id: artist_id.to_string(),
        venue_id: venue_id.to_string(),
        start_time: String::from("tomorrow"),
    };

    let outcome = create_show(&mut persistence, &mut flashes, &request);

    assert!(!outcome.committed);
    assert_eq!(flashes.len(), 1);
    assert!(list_shows(&mut persistence).unwrap().shows.is_empty());
}
