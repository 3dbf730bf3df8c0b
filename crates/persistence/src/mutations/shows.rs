// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Show mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use fyyur_domain::{NewShow, Show, to_storage_string};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::shows;
use crate::error::PersistenceError;

/// Inserts a new show.
///
/// The artist and venue must both exist; the foreign key constraints
/// reject the insert otherwise and the transaction rolls back.
///
/// # Returns
///
/// The persisted show with its assigned ID.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if the artist or venue
/// does not exist, or an error if the insert fails.
pub fn insert_show(conn: &mut SqliteConnection, show: &NewShow) -> Result<Show, PersistenceError> {
    let start_time: String = to_storage_string(show.start_time);

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(shows::table)
            .values((
                shows::artist_id.eq(show.artist_id),
                shows::venue_id.eq(show.venue_id),
                shows::start_time.eq(&start_time),
            ))
            .execute(conn)?;

        let show_id: i64 = conn.get_last_insert_rowid()?;
        info!(
            show_id,
            artist_id = show.artist_id,
            venue_id = show.venue_id,
            start_time = %start_time,
            "Show created"
        );
        Ok(Show {
            id: show_id,
            artist_id: show.artist_id,
            venue_id: show.venue_id,
            start_time: show.start_time,
        })
    })
}
