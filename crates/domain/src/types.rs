// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// The editable fields of a venue.
///
/// This is the shape submitted by the create and edit forms. It carries
/// no identifier; the database assigns one on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFields {
    /// The venue's display name.
    pub name: String,
    /// The city the venue is located in.
    pub city: String,
    /// The two-letter US state code.
    pub state: String,
    /// The street address.
    pub address: String,
    /// Contact phone number, if any.
    pub phone: Option<String>,
    /// Genres the venue books.
    pub genres: Vec<String>,
    /// Link to an image of the venue.
    pub image_link: Option<String>,
    /// Link to the venue's Facebook page.
    pub facebook_link: Option<String>,
    /// The venue's website.
    pub website: Option<String>,
    /// Whether the venue is currently looking for talent.
    pub seeking_talent: bool,
    /// Free-text description of what the venue is looking for.
    pub description: String,
}

/// A persisted venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// The identifier assigned by the database.
    pub id: i64,
    /// The venue's fields.
    #[serde(flatten)]
    pub fields: VenueFields,
}

impl Venue {
    /// Creates a venue from an identifier and its fields.
    #[must_use]
    pub const fn new(id: i64, fields: VenueFields) -> Self {
        Self { id, fields }
    }

    /// Returns the venue's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields.name
    }
}

/// The editable fields of an artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistFields {
    /// The artist's display name.
    pub name: String,
    /// The artist's home city.
    pub city: String,
    /// The two-letter US state code.
    pub state: String,
    /// Contact phone number, if any.
    pub phone: Option<String>,
    /// Genres the artist performs.
    pub genres: Vec<String>,
    /// Link to an image of the artist.
    pub image_link: Option<String>,
    /// Link to the artist's Facebook page.
    pub facebook_link: Option<String>,
    /// The artist's website.
    pub website: Option<String>,
    /// Whether the artist is currently looking for a venue.
    pub seeking_venue: bool,
    /// Free-text description of what the artist is looking for.
    pub seeking_description: String,
}

/// A persisted artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// The identifier assigned by the database.
    pub id: i64,
    /// The artist's fields.
    #[serde(flatten)]
    pub fields: ArtistFields,
}

impl Artist {
    /// Creates an artist from an identifier and its fields.
    #[must_use]
    pub const fn new(id: i64, fields: ArtistFields) -> Self {
        Self { id, fields }
    }

    /// Returns the artist's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields.name
    }
}

/// A show that has not been persisted yet.
///
/// A show is a join record and is only valid when both references
/// point at existing rows. That is enforced by the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewShow {
    /// The performing artist.
    pub artist_id: i64,
    /// The hosting venue.
    pub venue_id: i64,
    /// When the show starts.
    pub start_time: PrimitiveDateTime,
}

/// A persisted show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Show {
    /// The identifier assigned by the database.
    pub id: i64,
    /// The performing artist.
    pub artist_id: i64,
    /// The hosting venue.
    pub venue_id: i64,
    /// When the show starts.
    pub start_time: PrimitiveDateTime,
}

/// Anything that happens at a point in time.
///
/// Used to split show lists into past and upcoming.
pub trait Scheduled {
    /// Returns when this item starts.
    fn start_time(&self) -> PrimitiveDateTime;
}

impl Scheduled for Show {
    fn start_time(&self) -> PrimitiveDateTime {
        self.start_time
    }
}

/// A show at a venue, joined with the performing artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueShow {
    /// The show identifier.
    pub show_id: i64,
    /// The performing artist.
    pub artist_id: i64,
    /// The performing artist's name.
    pub artist_name: String,
    /// The performing artist's image link.
    pub artist_image_link: Option<String>,
    /// When the show starts.
    pub start_time: PrimitiveDateTime,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> PrimitiveDateTime {
        self.start_time
    }
}

/// A show by an artist, joined with the hosting venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistShow {
    /// The show identifier.
    pub show_id: i64,
    /// The hosting venue.
    pub venue_id: i64,
    /// The hosting venue's name.
    pub venue_name: String,
    /// The hosting venue's image link.
    pub venue_image_link: Option<String>,
    /// When the show starts.
    pub start_time: PrimitiveDateTime,
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> PrimitiveDateTime {
        self.start_time
    }
}

/// A show joined with both its venue and its artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    /// The show identifier.
    pub show_id: i64,
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
    /// When the show starts.
    pub start_time: PrimitiveDateTime,
}

impl Scheduled for ShowListing {
    fn start_time(&self) -> PrimitiveDateTime {
        self.start_time
    }
}
