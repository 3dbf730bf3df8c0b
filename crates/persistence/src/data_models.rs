// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row representations and their conversion to domain types.
//!
//! Booleans are stored as `0`/`1` integers and genres as a JSON array
//! in a text column.

use diesel::prelude::*;
use fyyur_domain::{Artist, ArtistFields, Venue, VenueFields};

use crate::diesel_schema::{artists, venues};
use crate::error::PersistenceError;

/// Diesel Queryable struct for venue rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = venues)]
pub struct VenueRow {
    pub venue_id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: i32,
    pub description: String,
}

impl VenueRow {
    /// Converts the row into a domain venue.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored genres are not a JSON string array.
    pub fn into_venue(self) -> Result<Venue, PersistenceError> {
        let genres: Vec<String> = decode_genres(self.venue_id, &self.genres)?;
        Ok(Venue::new(
            self.venue_id,
            VenueFields {
                name: self.name,
                city: self.city,
                state: self.state,
                address: self.address,
                phone: self.phone,
                genres,
                image_link: self.image_link,
                facebook_link: self.facebook_link,
                website: self.website,
                seeking_talent: self.seeking_talent != 0,
                description: self.description,
            },
        ))
    }
}

/// Insertable and updatable venue columns.
///
/// `None` writes NULL on update so a cleared optional field is cleared
/// in storage.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = venues)]
#[diesel(treat_none_as_null = true)]
pub struct VenueChanges<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub address: &'a str,
    pub phone: Option<&'a str>,
    pub genres: String,
    pub image_link: Option<&'a str>,
    pub facebook_link: Option<&'a str>,
    pub website: Option<&'a str>,
    pub seeking_talent: i32,
    pub description: &'a str,
}

impl<'a> VenueChanges<'a> {
    /// Builds the column values for a venue submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the genres cannot be encoded.
    pub fn from_fields(fields: &'a VenueFields) -> Result<Self, PersistenceError> {
        Ok(Self {
            name: &fields.name,
            city: &fields.city,
            state: &fields.state,
            address: &fields.address,
            phone: fields.phone.as_deref(),
            genres: serde_json::to_string(&fields.genres)?,
            image_link: fields.image_link.as_deref(),
            facebook_link: fields.facebook_link.as_deref(),
            website: fields.website.as_deref(),
            seeking_talent: i32::from(fields.seeking_talent),
            description: &fields.description,
        })
    }
}

/// Diesel Queryable struct for artist rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = artists)]
pub struct ArtistRow {
    pub artist_id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: i32,
    pub seeking_description: String,
}

impl ArtistRow {
    /// Converts the row into a domain artist.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored genres are not a JSON string array.
    pub fn into_artist(self) -> Result<Artist, PersistenceError> {
        let genres: Vec<String> = decode_genres(self.artist_id, &self.genres)?;
        Ok(Artist::new(
            self.artist_id,
            ArtistFields {
                name: self.name,
                city: self.city,
                state: self.state,
                phone: self.phone,
                genres,
                image_link: self.image_link,
                facebook_link: self.facebook_link,
                website: self.website,
                seeking_venue: self.seeking_venue != 0,
                seeking_description: self.seeking_description,
            },
        ))
    }
}

/// Insertable and updatable artist columns.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = artists)]
#[diesel(treat_none_as_null = true)]
pub struct ArtistChanges<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub phone: Option<&'a str>,
    pub genres: String,
    pub image_link: Option<&'a str>,
    pub facebook_link: Option<&'a str>,
    pub website: Option<&'a str>,
    pub seeking_venue: i32,
    pub seeking_description: &'a str,
}

impl<'a> ArtistChanges<'a> {
    /// Builds the column values for an artist submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the genres cannot be encoded.
    pub fn from_fields(fields: &'a ArtistFields) -> Result<Self, PersistenceError> {
        Ok(Self {
            name: &fields.name,
            city: &fields.city,
            state: &fields.state,
            phone: fields.phone.as_deref(),
            genres: serde_json::to_string(&fields.genres)?,
            image_link: fields.image_link.as_deref(),
            facebook_link: fields.facebook_link.as_deref(),
            website: fields.website.as_deref(),
            seeking_venue: i32::from(fields.seeking_venue),
            seeking_description: &fields.seeking_description,
        })
    }
}

fn decode_genres(row_id: i64, raw: &str) -> Result<Vec<String>, PersistenceError> {
    serde_json::from_str(raw)
        .map_err(|e| PersistenceError::CorruptRow(format!("genres of row {row_id}: {e}")))
}
