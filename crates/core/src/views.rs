// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display-ready view-models.
//!
//! These are denormalized: each carries everything a page needs without
//! further lookups.

use serde::{Deserialize, Serialize};

/// A venue as it appears inside a location group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSummary {
    /// The venue identifier.
    pub id: i64,
    /// The venue name.
    pub name: String,
    /// Number of shows at this venue starting after "now".
    pub num_upcoming_shows: usize,
}

/// All venues sharing one `(city, state)` location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueArea {
    /// The city.
    pub city: String,
    /// The state code.
    pub state: String,
    /// The venues in this location.
    pub venues: Vec<VenueSummary>,
}

/// An artist as it appears in the artist list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    /// The artist identifier.
    pub id: i64,
    /// The artist name.
    pub name: String,
}

/// The result of a name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// Number of matching rows.
    pub count: usize,
    /// The matching rows.
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    /// Wraps matching rows with their count.
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A show on a venue's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueShowEntry {
    /// The performing artist.
    pub artist_id: i64,
    /// The performing artist's name.
    pub artist_name: String,
    /// The performing artist's image link.
    pub artist_image_link: Option<String>,
    /// The formatted start time.
    pub start_time: String,
}

/// A show on an artist's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistShowEntry {
    /// The hosting venue.
    pub venue_id: i64,
    /// The hosting venue's name.
    pub venue_name: String,
    /// The hosting venue's image link.
    pub venue_image_link: Option<String>,
    /// The formatted start time.
    pub start_time: String,
}

/// A show in the global show list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowEntry {
    /// The hosting venue.
    pub venue_id: i64,
    /// The hosting venue's name.
    pub venue_name: String,
    /// The performing artist.
    pub artist_id: i64,
    /// The performing artist's name.
    pub artist_name: String,
    /// The performing artist's image link.
    pub artist_image_link: Option<String>,
    /// The formatted start time.
    pub start_time: String,
}

/// Everything the venue page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShowEntry>,
    pub upcoming_shows: Vec<VenueShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Everything the artist page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShowEntry>,
    pub upcoming_shows: Vec<ArtistShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
