// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Fyyur booking service.
//!
//! This crate stores venues, artists and the shows that join them. It is
//! built on Diesel over `SQLite`.
//!
//! ## Storage Model
//!
//! - `venues` and `artists` hold the listed entities. Genres are a JSON
//!   array in a text column and booleans are `0`/`1` integers.
//! - `shows` references one artist and one venue. Foreign keys are
//!   enforced and verified when a connection is opened.
//! - Deleting a venue or artist deletes its shows first, in the same
//!   transaction.
//!
//! ## Testing Philosophy
//!
//! - Every test gets its own shared-cache in-memory database
//! - Migrations run on every connection, so tests exercise the real schema

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;
use fyyur_domain::{
    Artist, ArtistFields, ArtistShow, NewShow, Show, ShowListing, Venue, VenueFields, VenueShow,
};
use time::PrimitiveDateTime;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for venues, artists and shows.
///
/// Holds a single connection. Callers that share it across tasks must
/// serialize access.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_fyyur_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Venues
    // ========================================================================

    /// Retrieves every venue in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_venues(&mut self) -> Result<Vec<Venue>, PersistenceError> {
        queries::venues::list_venues(&mut self.conn)
    }

    /// Retrieves a venue by ID, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_venue(&mut self, venue_id: i64) -> Result<Option<Venue>, PersistenceError> {
        queries::venues::get_venue(&mut self.conn, venue_id)
    }

    /// Retrieves venues whose name contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search_venues(&mut self, term: &str) -> Result<Vec<Venue>, PersistenceError> {
        queries::venues::search_venues(&mut self.conn, term)
    }

    /// Counts shows starting strictly after `now`, keyed by venue ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_upcoming_shows_by_venue(
        &mut self,
        now: PrimitiveDateTime,
    ) -> Result<HashMap<i64, usize>, PersistenceError> {
        queries::shows::count_upcoming_by_venue(&mut self.conn, now)
    }

    /// Retrieves the shows at a venue with their artists, earliest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn shows_for_venue(&mut self, venue_id: i64) -> Result<Vec<VenueShow>, PersistenceError> {
        queries::shows::shows_for_venue(&mut self.conn, venue_id)
    }

    /// Inserts a venue and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails; nothing is written.
    pub fn create_venue(&mut self, fields: &VenueFields) -> Result<i64, PersistenceError> {
        mutations::venues::insert_venue(&mut self.conn, fields)
    }

    /// Replaces the fields of an existing venue.
    ///
    /// # Errors
    ///
    /// Returns an error if the venue does not exist or the update fails.
    pub fn update_venue(
        &mut self,
        venue_id: i64,
        fields: &VenueFields,
    ) -> Result<(), PersistenceError> {
        mutations::venues::update_venue(&mut self.conn, venue_id, fields)
    }

    /// Deletes a venue and its shows, returning the venue's name.
    ///
    /// # Errors
    ///
    /// Returns an error if the venue does not exist or a delete fails.
    pub fn delete_venue(&mut self, venue_id: i64) -> Result<String, PersistenceError> {
        mutations::venues::delete_venue(&mut self.conn, venue_id)
    }

    // ========================================================================
    // Artists
    // ========================================================================

    /// Retrieves every artist in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_artists(&mut self) -> Result<Vec<Artist>, PersistenceError> {
        queries::artists::list_artists(&mut self.conn)
    }

    /// Retrieves an artist by ID, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_artist(&mut self, artist_id: i64) -> Result<Option<Artist>, PersistenceError> {
        queries::artists::get_artist(&mut self.conn, artist_id)
    }

    /// Retrieves artists whose name contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search_artists(&mut self, term: &str) -> Result<Vec<Artist>, PersistenceError> {
        queries::artists::search_artists(&mut self.conn, term)
    }

    /// Retrieves the shows by an artist with their venues, earliest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn shows_for_artist(
        &mut self,
        artist_id: i64,
    ) -> Result<Vec<ArtistShow>, PersistenceError> {
        queries::shows::shows_for_artist(&mut self.conn, artist_id)
    }

    /// Inserts an artist and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails; nothing is written.
    pub fn create_artist(&mut self, fields: &ArtistFields) -> Result<i64, PersistenceError> {
        mutations::artists::insert_artist(&mut self.conn, fields)
    }

    /// Replaces the fields of an existing artist.
    ///
    /// # Errors
    ///
    /// Returns an error if the artist does not exist or the update fails.
    pub fn update_artist(
        &mut self,
        artist_id: i64,
        fields: &ArtistFields,
    ) -> Result<(), PersistenceError> {
        mutations::artists::update_artist(&mut self.conn, artist_id, fields)
    }

    /// Deletes an artist and their shows, returning the artist's name.
    ///
    /// # Errors
    ///
    /// Returns an error if the artist does not exist or a delete fails.
    pub fn delete_artist(&mut self, artist_id: i64) -> Result<String, PersistenceError> {
        mutations::artists::delete_artist(&mut self.conn, artist_id)
    }

    // ========================================================================
    // Shows
    // ========================================================================

    /// Retrieves every show with its venue and artist, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_shows(&mut self) -> Result<Vec<ShowListing>, PersistenceError> {
        queries::shows::list_shows(&mut self.conn)
    }

    /// Inserts a show and returns it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ForeignKeyViolation` if the artist or
    /// venue does not exist, or an error if the insert fails.
    pub fn create_show(&mut self, show: &NewShow) -> Result<Show, PersistenceError> {
        mutations::shows::insert_show(&mut self.conn, show)
    }
}
