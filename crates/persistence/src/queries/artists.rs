// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Artist queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use fyyur_domain::Artist;
use tracing::debug;

use crate::data_models::ArtistRow;
use crate::diesel_schema::artists;
use crate::error::PersistenceError;
use crate::queries::{LIKE_ESCAPE, substring_pattern, unicode_lower};

/// Retrieves every artist in id order.
///
/// # Errors
///
/// Returns an error if the database query fails or a row cannot be decoded.
pub fn list_artists(conn: &mut SqliteConnection) -> Result<Vec<Artist>, PersistenceError> {
    artists::table
        .order(artists::artist_id.asc())
        .select(ArtistRow::as_select())
        .load::<ArtistRow>(conn)?
        .into_iter()
        .map(ArtistRow::into_artist)
        .collect()
}

/// Retrieves an artist by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the artist is not found.
pub fn get_artist(
    conn: &mut SqliteConnection,
    artist_id: i64,
) -> Result<Option<Artist>, PersistenceError> {
    debug!(artist_id, "Looking up artist");

    artists::table
        .filter(artists::artist_id.eq(artist_id))
        .select(ArtistRow::as_select())
        .first::<ArtistRow>(conn)
        .optional()?
        .map(ArtistRow::into_artist)
        .transpose()
}

/// Retrieves artists whose name contains `term`, ignoring case.
///
/// An empty term matches every artist.
///
/// # Errors
///
/// Returns an error if the database query fails or a row cannot be decoded.
pub fn search_artists(
    conn: &mut SqliteConnection,
    term: &str,
) -> Result<Vec<Artist>, PersistenceError> {
    debug!(term, "Searching artists");

    artists::table
        .filter(
            unicode_lower(artists::name)
                .like(substring_pattern(&term.to_lowercase()))
                .escape(LIKE_ESCAPE),
        )
        .order(artists::artist_id.asc())
        .select(ArtistRow::as_select())
        .load::<ArtistRow>(conn)?
        .into_iter()
        .map(ArtistRow::into_artist)
        .collect()
}
