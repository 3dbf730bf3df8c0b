// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Venue queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use fyyur_domain::Venue;
use tracing::debug;

use crate::data_models::VenueRow;
use crate::diesel_schema::venues;
use crate::error::PersistenceError;
use crate::queries::{LIKE_ESCAPE, substring_pattern, unicode_lower};

/// Retrieves every venue in id order.
///
/// # Errors
///
/// Returns an error if the database query fails or a row cannot be decoded.
pub fn list_venues(conn: &mut SqliteConnection) -> Result<Vec<Venue>, PersistenceError> {
    venues::table
        .order(venues::venue_id.asc())
        .select(VenueRow::as_select())
        .load::<VenueRow>(conn)?
        .into_iter()
        .map(VenueRow::into_venue)
        .collect()
}

/// Retrieves a venue by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the venue is not found.
pub fn get_venue(
    conn: &mut SqliteConnection,
    venue_id: i64,
) -> Result<Option<Venue>, PersistenceError> {
    debug!(venue_id, "Looking up venue");

    venues::table
        .filter(venues::venue_id.eq(venue_id))
        .select(VenueRow::as_select())
        .first::<VenueRow>(conn)
        .optional()?
        .map(VenueRow::into_venue)
        .transpose()
}

/// Retrieves venues whose name contains `term`, ignoring case.
///
/// An empty term matches every venue.
///
/// # Errors
///
/// Returns an error if the database query fails or a row cannot be decoded.
pub fn search_venues(
    conn: &mut SqliteConnection,
    term: &str,
) -> Result<Vec<Venue>, PersistenceError> {
    debug!(term, "Searching venues");

    venues::table
        .filter(
            unicode_lower(venues::name)
                .like(substring_pattern(&term.to_lowercase()))
                .escape(LIKE_ESCAPE),
        )
        .order(venues::venue_id.asc())
        .select(VenueRow::as_select())
        .load::<VenueRow>(conn)?
        .into_iter()
        .map(VenueRow::into_venue)
        .collect()
}
