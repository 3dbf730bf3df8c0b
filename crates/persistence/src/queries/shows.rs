// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Show queries.
//!
//! Start times are stored as `YYYY-MM-DD HH:MM:SS` text, so comparing
//! and ordering the text column is chronological.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel::SqliteConnection;
use fyyur_domain::{ArtistShow, ShowListing, VenueShow, from_storage_string, to_storage_string};
use num_traits::ToPrimitive;
use time::PrimitiveDateTime;

use crate::diesel_schema::{artists, shows, venues};
use crate::error::PersistenceError;

fn decode_start_time(show_id: i64, raw: &str) -> Result<PrimitiveDateTime, PersistenceError> {
    from_storage_string(raw)
        .map_err(|e| PersistenceError::CorruptRow(format!("start_time of show {show_id}: {e}")))
}

/// Retrieves the shows at a venue joined with their artists, earliest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a start time cannot be decoded.
pub fn shows_for_venue(
    conn: &mut SqliteConnection,
    venue_id: i64,
) -> Result<Vec<VenueShow>, PersistenceError> {
    let rows = shows::table
        .inner_join(artists::table)
        .filter(shows::venue_id.eq(venue_id))
        .order((shows::start_time.asc(), shows::show_id.asc()))
        .select((
            shows::show_id,
            shows::artist_id,
            artists::name,
            artists::image_link,
            shows::start_time,
        ))
        .load::<(i64, i64, String, Option<String>, String)>(conn)?;

    rows.into_iter()
        .map(
            |(show_id, artist_id, artist_name, artist_image_link, start_time)| {
                Ok(VenueShow {
                    start_time: decode_start_time(show_id, &start_time)?,
                    show_id,
                    artist_id,
                    artist_name,
                    artist_image_link,
                })
            },
        )
        .collect()
}

/// Retrieves the shows by an artist joined with their venues, earliest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a start time cannot be decoded.
pub fn shows_for_artist(
    conn: &mut SqliteConnection,
    artist_id: i64,
) -> Result<Vec<ArtistShow>, PersistenceError> {
    let rows = shows::table
        .inner_join(venues::table)
        .filter(shows::artist_id.eq(artist_id))
        .order((shows::start_time.asc(), shows::show_id.asc()))
        .select((
            shows::show_id,
            shows::venue_id,
            venues::name,
            venues::image_link,
            shows::start_time,
        ))
        .load::<(i64, i64, String, Option<String>, String)>(conn)?;

    rows.into_iter()
        .map(
            |(show_id, venue_id, venue_name, venue_image_link, start_time)| {
                Ok(ArtistShow {
                    start_time: decode_start_time(show_id, &start_time)?,
                    show_id,
                    venue_id,
                    venue_name,
                    venue_image_link,
                })
            },
        )
        .collect()
}

/// Retrieves every show joined with its venue and artist, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a start time cannot be decoded.
pub fn list_shows(conn: &mut SqliteConnection) -> Result<Vec<ShowListing>, PersistenceError> {
    let rows = shows::table
        .inner_join(venues::table)
        .inner_join(artists::table)
        .order((shows::start_time.desc(), shows::show_id.desc()))
        .select((
            shows::show_id,
            shows::venue_id,
            venues::name,
            shows::artist_id,
            artists::name,
            artists::image_link,
            shows::start_time,
        ))
        .load::<(i64, i64, String, i64, String, Option<String>, String)>(conn)?;

    rows.into_iter()
        .map(
            |(show_id, venue_id, venue_name, artist_id, artist_name, artist_image_link, start_time)| {
                Ok(ShowListing {
                    start_time: decode_start_time(show_id, &start_time)?,
                    show_id,
                    venue_id,
                    venue_name,
                    artist_id,
                    artist_name,
                    artist_image_link,
                })
            },
        )
        .collect()
}

/// Counts shows starting strictly after `now`, per venue.
///
/// Venues without upcoming shows are absent from the map.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or if count conversion fails.
pub fn count_upcoming_by_venue(
    conn: &mut SqliteConnection,
    now: PrimitiveDateTime,
) -> Result<HashMap<i64, usize>, PersistenceError> {
    let rows = shows::table
        .filter(shows::start_time.gt(to_storage_string(now)))
        .group_by(shows::venue_id)
        .select((shows::venue_id, diesel::dsl::count(shows::show_id)))
        .load::<(i64, i64)>(conn)?;

    let mut result: HashMap<i64, usize> = HashMap::with_capacity(rows.len());
    for (venue_id, count_i64) in rows {
        let count_usize: usize = count_i64.to_usize().ok_or_else(|| {
            PersistenceError::DatabaseError("Count conversion failed".to_string())
        })?;
        result.insert(venue_id, count_usize);
    }

    Ok(result)
}
