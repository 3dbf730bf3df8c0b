// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod validation;

use crate::{ArtistFields, VenueFields};

pub fn create_test_venue_fields() -> VenueFields {
    VenueFields {
        name: String::from("The Musical Hop"),
        city: String::from("San Francisco"),
        state: String::from("CA"),
        address: String::from("1015 Folsom Street"),
        phone: Some(String::from("123-123-1234")),
        genres: vec![String::from("Jazz"), String::from("Reggae")],
        image_link: None,
        facebook_link: Some(String::from("https://www.facebook.com/TheMusicalHop")),
        website: Some(String::from("https://www.themusicalhop.com")),
        seeking_talent: true,
        description: String::from("We are on the lookout for a local artist."),
    }
}

pub fn create_test_artist_fields() -> ArtistFields {
    ArtistFields {
        name: String::from("Guns N Petals"),
        city: String::from("San Francisco"),
        state: String::from("CA"),
        phone: Some(String::from("326-123-5000")),
        genres: vec![String::from("Rock n Roll")],
        image_link: None,
        facebook_link: None,
        website: None,
        seeking_venue: false,
        seeking_description: String::new(),
    }
}
