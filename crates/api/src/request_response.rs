// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests are built from decoded form pairs. A field may repeat
//! (`genres`), so the pairs are kept as a list rather than a map.

use std::collections::HashSet;

use fyyur::{
    ArtistDetail, ArtistSummary, SearchResults, ShowEntry, VenueArea, VenueDetail, VenueSummary,
};
use fyyur_domain::{
    Artist, ArtistFields, GENRE_CHOICES, NewShow, STATE_CHOICES, Venue, VenueFields,
    parse_start_time,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{ApiError, translate_domain_error};
use crate::flash::FlashMessage;

/// Form values that could not be interpreted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// A required field was absent or blank.
    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },

    /// An identifier field was not a whole number.
    #[error("Field '{field}' must be a whole number, got '{value}'")]
    InvalidId { field: &'static str, value: String },
}

impl FormError {
    /// Returns the name of the offending form field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::InvalidId { field, .. } => *field,
        }
    }
}

/// Returns the first value submitted for `name`, or an empty string.
fn text(pairs: &[(String, String)], name: &str) -> String {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

/// Returns the trimmed value for `name`, or `None` when absent or blank.
fn optional_text(pairs: &[(String, String)], name: &str) -> Option<String> {
    let value: String = text(pairs, name);
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Returns every value submitted for `name`, in order.
fn all_values(pairs: &[(String, String)], name: &str) -> Vec<String> {
    pairs
        .iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
        .collect()
}

/// Drops repeated genres, keeping the first occurrence of each.
fn distinct_genres(genres: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(genres.len());
    genres
        .into_iter()
        .filter(|genre| seen.insert(genre.clone()))
        .collect()
}

/// Interprets an HTML checkbox: present with `y`, `on`, `true` or `1`.
fn checkbox(pairs: &[(String, String)], name: &str) -> bool {
    pairs.iter().any(|(key, value)| {
        key == name
            && matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "y" | "on" | "true" | "1"
            )
    })
}

/// API request to create or edit a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueRequest {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueRequest {
    /// Reads a venue submission from decoded form pairs.
    ///
    /// Absent text fields read as empty; validation rejects them later.
    #[must_use]
    pub fn from_form(pairs: &[(String, String)]) -> Self {
        Self {
            name: text(pairs, "name").trim().to_string(),
            city: text(pairs, "city").trim().to_string(),
            state: text(pairs, "state").trim().to_string(),
            address: text(pairs, "address").trim().to_string(),
            phone: optional_text(pairs, "phone"),
            genres: all_values(pairs, "genres"),
            image_link: optional_text(pairs, "image_link"),
            facebook_link: optional_text(pairs, "facebook_link"),
            website: optional_text(pairs, "website"),
            seeking_talent: checkbox(pairs, "seeking_talent"),
            seeking_description: text(pairs, "seeking_description"),
        }
    }

    /// Converts the request into venue fields.
    ///
    /// Genres form a set; a genre selected twice is stored once.
    #[must_use]
    pub fn into_fields(self) -> VenueFields {
        VenueFields {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            genres: distinct_genres(self.genres),
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_talent: self.seeking_talent,
            description: self.seeking_description,
        }
    }
}

/// API request to create or edit an artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRequest {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistRequest {
    /// Reads an artist submission from decoded form pairs.
    #[must_use]
    pub fn from_form(pairs: &[(String, String)]) -> Self {
        Self {
            name: text(pairs, "name").trim().to_string(),
            city: text(pairs, "city").trim().to_string(),
            state: text(pairs, "state").trim().to_string(),
            phone: optional_text(pairs, "phone"),
            genres: all_values(pairs, "genres"),
            image_link: optional_text(pairs, "image_link"),
            facebook_link: optional_text(pairs, "facebook_link"),
            website: optional_text(pairs, "website"),
            seeking_venue: checkbox(pairs, "seeking_venue"),
            seeking_description: text(pairs, "seeking_description"),
        }
    }

    /// Converts the request into artist fields, dropping repeated genres.
    #[must_use]
    pub fn into_fields(self) -> ArtistFields {
        ArtistFields {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: distinct_genres(self.genres),
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
        }
    }
}

/// API request to create a show. Values are kept as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowRequest {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowRequest {
    /// Reads a show submission from decoded form pairs.
    #[must_use]
    pub fn from_form(pairs: &[(String, String)]) -> Self {
        Self {
            artist_id: text(pairs, "artist_id"),
            venue_id: text(pairs, "venue_id"),
            start_time: text(pairs, "start_time"),
        }
    }

    /// Interprets the submitted values as a new show.
    ///
    /// # Errors
    ///
    /// Returns an error if an identifier is missing or not a number, or
    /// if the start time cannot be parsed.
    pub fn to_new_show(&self) -> Result<NewShow, ApiError> {
        Ok(NewShow {
            artist_id: parse_id("artist_id", &self.artist_id)?,
            venue_id: parse_id("venue_id", &self.venue_id)?,
            start_time: parse_start_time(&self.start_time).map_err(translate_domain_error)?,
        })
    }
}

fn parse_id(field: &'static str, value: &str) -> Result<i64, FormError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField { field });
    }
    trimmed.parse::<i64>().map_err(|_| FormError::InvalidId {
        field,
        value: value.to_string(),
    })
}

/// API request to search by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub search_term: String,
}

impl SearchRequest {
    /// Reads the `search_term` field; absent reads as empty.
    #[must_use]
    pub fn from_form(pairs: &[(String, String)]) -> Self {
        Self {
            search_term: text(pairs, "search_term"),
        }
    }
}

/// The fixed choices a venue or artist form offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormChoices {
    /// Accepted genres.
    pub genres: Vec<String>,
    /// Accepted state codes.
    pub states: Vec<String>,
}

impl Default for FormChoices {
    fn default() -> Self {
        Self {
            genres: GENRE_CHOICES.iter().map(ToString::to_string).collect(),
            states: STATE_CHOICES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// A page body together with the flash messages drained for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The page body.
    #[serde(flatten)]
    pub body: T,
    /// Flash messages queued since the previous page.
    pub messages: Vec<FlashMessage>,
}

impl<T> Page<T> {
    /// Attaches drained flash messages to a page body.
    #[must_use]
    pub const fn new(body: T, messages: Vec<FlashMessage>) -> Self {
        Self { body, messages }
    }
}

/// The home page. It carries nothing but flash messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeResponse {}

/// API response listing venues grouped by location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenuesResponse {
    pub areas: Vec<VenueArea>,
}

/// API response for a venue search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchVenuesResponse {
    pub search_term: String,
    pub results: SearchResults<VenueSummary>,
}

/// API response for a single venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueResponse {
    pub venue: VenueDetail,
}

/// API response for the venue create and edit forms.
///
/// `venue` is present only when editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFormResponse {
    pub form: FormChoices,
    pub venue: Option<Venue>,
}

/// API response listing artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistsResponse {
    pub artists: Vec<ArtistSummary>,
}

/// API response for an artist search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchArtistsResponse {
    pub search_term: String,
    pub results: SearchResults<ArtistSummary>,
}

/// API response for a single artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistResponse {
    pub artist: ArtistDetail,
}

/// API response for the artist create and edit forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistFormResponse {
    pub form: FormChoices,
    pub artist: Option<Artist>,
}

/// API response listing shows, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowsResponse {
    pub shows: Vec<ShowEntry>,
}

/// API response for the show create form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowFormResponse {
    pub form: FormChoices,
    /// Pre-filled start time, in storage encoding.
    pub default_start_time: String,
}

/// The result of a create, edit or delete.
///
/// The flash message has already been queued; this tells the caller
/// where to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationOutcome {
    /// Whether the change was committed.
    pub committed: bool,
    /// The ID of the created row, when one was created.
    pub id: Option<i64>,
}

impl MutationOutcome {
    /// A committed change.
    #[must_use]
    pub const fn success(id: Option<i64>) -> Self {
        Self {
            committed: true,
            id,
        }
    }

    /// A rolled-back change.
    #[must_use]
    pub const fn failure() -> Self {
        Self {
            committed: false,
            id: None,
        }
    }
}
