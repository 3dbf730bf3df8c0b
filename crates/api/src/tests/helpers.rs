// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fyyur_domain::NewShow;
use fyyur_persistence::Persistence;
use time::PrimitiveDateTime;
use time::macros::datetime;

use crate::{ArtistRequest, FlashQueue, VenueRequest};

pub const NOW: PrimitiveDateTime = datetime!(2024-06-01 12:00:00);

/// Builds decoded form pairs from string literals.
pub fn form(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

pub fn create_test_venue_request(name: &str) -> VenueRequest {
    VenueRequest::from_form(&form(&[
        ("name", name),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("address", "1015 Folsom Street"),
        ("phone", "123-123-1234"),
        ("genres", "Jazz"),
        ("genres", "Reggae"),
        ("website", "https://www.themusicalhop.com"),
        ("seeking_talent", "y"),
        ("seeking_description", "Looking for local artists."),
    ]))
}

pub fn create_test_artist_request(name: &str) -> ArtistRequest {
    ArtistRequest::from_form(&form(&[
        ("name", name),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("phone", "326-123-5000"),
        ("genres", "Rock n Roll"),
        ("seeking_venue", "y"),
        ("seeking_description", "Looking for shows in the Bay Area!"),
    ]))
}

/// Creates a fresh database and flash queue.
pub fn setup() -> (Persistence, FlashQueue) {
    (Persistence::new_in_memory().unwrap(), FlashQueue::new())
}

/// Creates one venue and one artist directly through persistence.
pub fn setup_venue_and_artist() -> (Persistence, FlashQueue, i64, i64) {
    let (mut persistence, flashes) = setup();
    let venue_id = persistence
        .create_venue(&create_test_venue_request("The Musical Hop").into_fields())
        .unwrap();
    let artist_id = persistence
        .create_artist(&create_test_artist_request("Guns N Petals").into_fields())
        .unwrap();
    (persistence, flashes, venue_id, artist_id)
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
