// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Venue mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use fyyur_domain::VenueFields;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::VenueChanges;
use crate::diesel_schema::{shows, venues};
use crate::error::PersistenceError;

/// Inserts a new venue.
///
/// # Returns
///
/// The ID assigned to the venue.
///
/// # Errors
///
/// Returns an error if the row violates a constraint or the insert fails.
/// Nothing is written in that case.
pub fn insert_venue(
    conn: &mut SqliteConnection,
    fields: &VenueFields,
) -> Result<i64, PersistenceError> {
    let changes: VenueChanges<'_> = VenueChanges::from_fields(fields)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(venues::table)
            .values(&changes)
            .execute(conn)?;

        let venue_id: i64 = conn.get_last_insert_rowid()?;
        info!(venue_id, name = %fields.name, "Venue created");
        Ok(venue_id)
    })
}

/// Replaces every editable field of an existing venue.
///
/// # Errors
///
/// Returns `PersistenceError::VenueNotFound` if no venue has `venue_id`,
/// or an error if the update fails.
pub fn update_venue(
    conn: &mut SqliteConnection,
    venue_id: i64,
    fields: &VenueFields,
) -> Result<(), PersistenceError> {
    let changes: VenueChanges<'_> = VenueChanges::from_fields(fields)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let updated: usize = diesel::update(venues::table)
            .filter(venues::venue_id.eq(venue_id))
            .set(&changes)
            .execute(conn)?;

        if updated == 0 {
            return Err(PersistenceError::VenueNotFound(venue_id));
        }

        info!(venue_id, "Venue updated");
        Ok(())
    })
}

/// Deletes a venue and every show held there.
///
/// Shows are deleted first, then the venue, in one transaction.
///
/// # Returns
///
/// The deleted venue's name.
///
/// # Errors
///
/// Returns `PersistenceError::VenueNotFound` if no venue has `venue_id`,
/// or an error if a delete fails.
pub fn delete_venue(conn: &mut SqliteConnection, venue_id: i64) -> Result<String, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let name: String = venues::table
            .filter(venues::venue_id.eq(venue_id))
            .select(venues::name)
            .first::<String>(conn)
            .optional()?
            .ok_or(PersistenceError::VenueNotFound(venue_id))?;

        let removed_shows: usize =
            diesel::delete(shows::table.filter(shows::venue_id.eq(venue_id))).execute(conn)?;
        debug!(venue_id, removed_shows, "Removed shows of deleted venue");

        diesel::delete(venues::table.filter(venues::venue_id.eq(venue_id))).execute(conn)?;

        info!(venue_id, name = %name, "Venue deleted");
        Ok(name)
    })
}
