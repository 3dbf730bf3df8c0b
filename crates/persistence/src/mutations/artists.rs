// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Artist mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use fyyur_domain::ArtistFields;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::ArtistChanges;
use crate::diesel_schema::{artists, shows};
use crate::error::PersistenceError;

/// Inserts a new artist.
///
/// # Returns
///
/// The ID assigned to the artist.
///
/// # Errors
///
/// Returns an error if the row violates a constraint or the insert fails.
/// Nothing is written in that case.
pub fn insert_artist(
    conn: &mut SqliteConnection,
    fields: &ArtistFields,
) -> Result<i64, PersistenceError> {
    let changes: ArtistChanges<'_> = ArtistChanges::from_fields(fields)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(artists::table)
            .values(&changes)
            .execute(conn)?;

        let artist_id: i64 = conn.get_last_insert_rowid()?;
        info!(artist_id, name = %fields.name, "Artist created");
        Ok(artist_id)
    })
}

/// Replaces every editable field of an existing artist.
///
/// # Errors
///
/// Returns `PersistenceError::ArtistNotFound` if no artist has `artist_id`,
/// or an error if the update fails.
pub fn update_artist(
    conn: &mut SqliteConnection,
    artist_id: i64,
    fields: &ArtistFields,
) -> Result<(), PersistenceError> {
    let changes: ArtistChanges<'_> = ArtistChanges::from_fields(fields)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let updated: usize = diesel::update(artists::table)
            .filter(artists::artist_id.eq(artist_id))
            .set(&changes)
            .execute(conn)?;

        if updated == 0 {
            return Err(PersistenceError::ArtistNotFound(artist_id));
        }

        info!(artist_id, "Artist updated");
        Ok(())
    })
}

/// Deletes an artist and every show they perform.
///
/// Shows are deleted first, then the artist, in one transaction.
///
/// # Returns
///
/// The deleted artist's name.
///
/// # Errors
///
/// Returns `PersistenceError::ArtistNotFound` if no artist has `artist_id`,
/// or an error if a delete fails.
pub fn delete_artist(conn: &mut SqliteConnection, artist_id: i64) -> Result<String, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let name: String = artists::table
            .filter(artists::artist_id.eq(artist_id))
            .select(artists::name)
            .first::<String>(conn)
            .optional()?
            .ok_or(PersistenceError::ArtistNotFound(artist_id))?;

        let removed_shows: usize =
            diesel::delete(shows::table.filter(shows::artist_id.eq(artist_id))).execute(conn)?;
        debug!(artist_id, removed_shows, "Removed shows of deleted artist");

        diesel::delete(artists::table.filter(artists::artist_id.eq(artist_id))).execute(conn)?;

        info!(artist_id, name = %name, "Artist deleted");
        Ok(name)
    })
}
