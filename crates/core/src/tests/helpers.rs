// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fyyur_domain::{Artist, ArtistFields, ArtistShow, Venue, VenueFields, VenueShow};
use time::PrimitiveDateTime;
use time::macros::datetime;

/// The reference "now" used across detail tests.
pub const NOW: PrimitiveDateTime = datetime!(2024-06-01 12:00:00);

pub fn create_test_venue(id: i64, name: &str, city: &str, state: &str) -> Venue {
    Venue::new(
        id,
        VenueFields {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: String::from("1015 Folsom Street"),
            phone: Some(String::from("123-123-1234")),
            genres: vec![String::from("Jazz"), String::from("Reggae")],
            image_link: None,
            facebook_link: None,
            website: Some(String::from("https://www.themusicalhop.com")),
            seeking_talent: true,
            description: String::from("We are on the lookout for a local artist."),
        },
    )
}

pub fn create_test_artist(id: i64, name: &str) -> Artist {
    Artist::new(
        id,
        ArtistFields {
            name: name.to_string(),
            city: String::from("San Francisco"),
            state: String::from("CA"),
            phone: Some(String::from("326-123-5000")),
            genres: vec![String::from("Rock n Roll")],
            image_link: Some(String::from("https://images.example.com/artist.jpg")),
            facebook_link: None,
            website: None,
            seeking_venue: false,
            seeking_description: String::new(),
        },
    )
}

pub fn create_test_venue_show(show_id: i64, start_time: PrimitiveDateTime) -> VenueShow {
    VenueShow {
        show_id,
        artist_id: 4,
        artist_name: String::from("Guns N Petals"),
        artist_image_link: Some(String::from("https://images.example.com/artist.jpg")),
        start_time,
    }
}

pub fn create_test_artist_show(show_id: i64, start_time: PrimitiveDateTime) -> ArtistShow {
    ArtistShow {
        show_id,
        venue_id: 1,
        venue_name: String::from("The Musical Hop"),
        venue_image_link: None,
        start_time,
    }
}
