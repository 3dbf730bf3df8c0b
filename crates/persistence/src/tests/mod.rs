// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod search_tests;

use fyyur_domain::{ArtistFields, NewShow, VenueFields};
use time::PrimitiveDateTime;

use crate::Persistence;

pub fn create_test_venue_fields(name: &str) -> VenueFields {
    VenueFields {
        name: name.to_string(),
        city: String::from("San Francisco"),
        state: String::from("CA"),
        address: String::from("1015 Folsom Street"),
        phone: Some(String::from("123-123-1234")),
        genres: vec![String::from("Jazz"), String::from("Reggae")],
        image_link: Some(String::from("https://images.example.com/venue.jpg")),
        facebook_link: None,
        website: Some(String::from("https://www.themusicalhop.com")),
        seeking_talent: true,
        description: String::from("We are on the lookout for a local artist."),
    }
}

pub fn create_test_artist_fields(name: &str) -> ArtistFields {
    ArtistFields {
        name: name.to_string(),
        city: String::from("San Francisco"),
        state: String::from("CA"),
        phone: Some(String::from("326-123-5000")),
        genres: vec![String::from("Rock n Roll")],
        image_link: Some(String::from("https://images.example.com/artist.jpg")),
        facebook_link: Some(String::from("https://www.facebook.com/GunsNPetals")),
        website: None,
        seeking_venue: true,
        seeking_description: String::from("Looking for shows in the San Francisco Bay Area!"),
    }
}

/// Creates a database holding one venue and one artist.
///
/// Returns the persistence handle with the venue ID and artist ID.
pub fn setup_venue_and_artist() -> (Persistence, i64, i64) {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let venue_id = persistence
        .create_venue(&create_test_venue_fields("The Musical Hop"))
        .unwrap();
    let artist_id = persistence
        .create_artist(&create_test_artist_fields("Guns N Petals"))
        .unwrap();
    (persistence, venue_id, artist_id)
}

pub fn create_test_show(
    persistence: &mut Persistence,
    venue_id: i64,
    artist_id: i64,
    start_time: PrimitiveDateTime,
) -> i64 {
    persistence
        .create_show(&NewShow {
            artist_id,
            venue_id,
            start_time,
        })
        .unwrap()
        .id
}
