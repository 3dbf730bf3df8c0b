// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use super::helpers::{
    NOW, create_test_artist_request, create_test_show, create_test_venue_request, setup,
    setup_venue_and_artist,
};
use crate::{
    ApiError, SearchRequest, edit_artist_form, edit_venue_form, get_artist, get_venue,
    list_artists, list_shows, list_venues, new_show_form, new_venue_form, search_artists,
    search_venues,
};

#[test]
fn test_list_venues_empty() {
    let (mut persistence, _) = setup();

    let response = list_venues(&mut persistence, NOW).unwrap();

    assert!(response.areas.is_empty());
}

#[test]
fn test_list_venues_groups_and_counts_upcoming() {
    let (mut persistence, _, venue_id, artist_id) = setup_venue_and_artist();
    let mut other = create_test_venue_request("Park Square Live Music & Coffee");
    other.city = String::from("New York");
    other.state = String::from("NY");
    let other_id = persistence.create_venue(&other.into_fields()).unwrap();

    create_test_show(&mut persistence, venue_id, artist_id, datetime!(2019-05-21 21:30:00));
    create_test_show(&mut persistence, venue_id, artist_id, datetime!(2035-04-01 20:00:00));
    create_test_show(&mut persistence, venue_id, artist_id, datetime!(2035-04-08 20:00:00));

    let response = list_venues(&mut persistence, NOW).unwrap();

    assert_eq!(response.areas.len(), 2);
    assert_eq!(response.areas[0].city, "San Francisco");
    assert_eq!(response.areas[0].venues[0].id, venue_id);
    assert_eq!(response.areas[0].venues[0].num_upcoming_shows, 2);
    assert_eq!(response.areas[1].state, "NY");
    assert_eq!(response.areas[1].venues[0].id, other_id);
    assert_eq!(response.areas[1].venues[0].num_upcoming_shows, 0);
}

#[test]
fn test_search_venues_case_insensitive() {
    let (mut persistence, _, venue_id, _) = setup_venue_and_artist();
    persistence
        .create_venue(&create_test_venue_request("The Dueling Pianos Bar").into_fields())
        .unwrap();

    let response = search_venues(
        &mut persistence,
        &SearchRequest {
            search_term: String::from("hop"),
        },
        NOW,
    )
    .unwrap();

    assert_eq!(response.search_term, "hop");
    assert_eq!(response.results.count, 1);
    assert_eq!(response.results.data[0].id, venue_id);
    assert_eq!(response.results.data[0].name, "The Musical Hop");
}

#[test]
fn test_search_venues_empty_term_matches_all() {
    let (mut persistence, _, _, _) = setup_venue_and_artist();
    persistence
        .create_venue(&create_test_venue_request("The Dueling Pianos Bar").into_fields())
        .unwrap();

    let response = search_venues(&mut persistence, &SearchRequest::default(), NOW).unwrap();

    assert_eq!(response.results.count, 2);
}

#[test]
fn test_get_venue_partitions_shows() {
    let (mut persistence, _, venue_id, artist_id) = setup_venue_and_artist();
    create_test_show(&mut persistence, venue_id, artist_id, datetime!(2035-04-15 20:00:00));
    create_test_show(&mut persistence, venue_id, artist_id, datetime!(2019-05-21 21:30:00));

    let response = get_venue(&mut persistence, venue_id, NOW).unwrap();
    let venue = response.venue;

    assert_eq!(venue.name, "The Musical Hop");
    assert_eq!(venue.genres, vec!["Jazz", "Reggae"]);
    assert!(venue.seeking_talent);
    assert_eq!(venue.past_shows_count, 1);
    assert_eq!(venue.upcoming_shows_count, 1);
    assert_eq!(venue.past_shows[0].artist_name, "Guns N Petals");
    assert_eq!(venue.past_shows[0].start_time, "Tue 05, 21, 2019 9:30PM");
    assert_eq!(venue.upcoming_shows[0].start_time, "Sun 04, 15, 2035 8:00PM");
}

#[test]
fn test_get_venue_not_found() {
    let (mut persistence, _) = setup();

    let err = get_venue(&mut persistence, 42, NOW).unwrap_err();

    assert_eq!(err, ApiError::venue_not_found(42));
}

#[test]
fn test_edit_venue_form_prefills() {
    let (mut persistence, _, venue_id, _) = setup_venue_and_artist();

    let response = edit_venue_form(&mut persistence, venue_id).unwrap();

    let venue = response.venue.unwrap();
    assert_eq!(venue.id, venue_id);
    assert_eq!(venue.fields.phone.as_deref(), Some("123-123-1234"));
    assert!(!response.form.states.is_empty());

    assert!(new_venue_form().venue.is_none());
}

#[test]
fn test_list_and_search_artists() {
    let (mut persistence, _, _, artist_id) = setup_venue_and_artist();
    let second_id = persistence
        .create_artist(&create_test_artist_request("Matt Quevedo").into_fields())
        .unwrap();

    let listed = list_artists(&mut persistence).unwrap();
    assert_eq!(listed.artists.len(), 2);
    assert_eq!(listed.artists[0].id, artist_id);
    assert_eq!(listed.artists[1].id, second_id);

    let found = search_artists(
        &mut persistence,
        &SearchRequest {
            search_term: String::from("A"),
        },
    )
    .unwrap();
    assert_eq!(found.results.count, 2);

    let found = search_artists(
        &mut persistence,
        &SearchRequest {
            search_term: String::from("band"),
        },
    )
    .unwrap();
    assert_eq!(found.results.count, 0);
    assert!(found.results.data.is_empty());
}

#[test]
fn test_get_artist_partitions_shows() {
    let (mut persistence, _, venue_id, artist_id) = setup_venue_and_artist();
    create_test_show(&mut persistence, venue_id, artist_id, datetime!(2019-06-15 23:00:00));

    let artist = get_artist(&mut persistence, artist_id, NOW).unwrap().artist;

    assert_eq!(artist.name, "Guns N Petals");
    assert_eq!(artist.past_shows_count, 1);
    assert_eq!(artist.upcoming_shows_count, 0);
    assert_eq!(artist.past_shows[0].venue_id, venue_id);
    assert_eq!(artist.past_shows[0].venue_name, "The Musical Hop");
}

#[test]
fn test_get_artist_not_found() {
    let (mut persistence, _) = setup();

    assert_eq!(
        get_artist(&mut persistence, 9, NOW).unwrap_err(),
        ApiError::artist_not_found(9)
    );
    assert_eq!(
        edit_artist_form(&mut persistence, 9).unwrap_err(),
        ApiError::artist_not_found(9)
    );
}

#[test]
fn test_list_shows_newest_first() {
    let (mut persistence, _, venue_id, artist_id) = setup_venue_and_artist();
    create_test_show(&mut persistence, venue_id, artist_id, datetime!(2019-05-21 21:30:00));
    create_test_show(&mut persistence, venue_id, artist_id, datetime!(2035-04-15 20:00:00));

    let shows = list_shows(&mut persistence).unwrap().shows;

    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].start_time, "Sun 04, 15, 2035 8:00PM");
    assert_eq!(shows[1].start_time, "Tue 05, 21, 2019 9:30PM");
    assert_eq!(shows[0].venue_name, "The Musical Hop");
    assert_eq!(shows[0].artist_name, "Guns N Petals");
}

#[test]
fn test_new_show_form_defaults_to_now() {
    let response = new_show_form(NOW);

    assert_eq!(response.default_start_time, "2024-06-01 12:00:00");
}
