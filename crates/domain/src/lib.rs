// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod choices;
mod error;
mod show_time;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use choices::{GENRE_CHOICES, STATE_CHOICES, is_known_genre, is_known_state};
pub use error::DomainError;
pub use show_time::{from_storage_string, parse_start_time, to_storage_string};
pub use types::{
    Artist, ArtistFields, ArtistShow, NewShow, Scheduled, Show, ShowListing, Venue, VenueFields,
    VenueShow,
};
pub use validation::{
    MAX_DESCRIPTION_LEN, validate_artist_fields, validate_genres, validate_phone, validate_state,
    validate_venue_fields,
};
