// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assembly of detail pages and show listings.
//!
//! Every function here is pure: callers fetch rows and pass in the
//! reference "now" used to split past from upcoming.

use fyyur_domain::{Artist, ArtistShow, Scheduled, ShowListing, Venue, VenueShow};
use time::PrimitiveDateTime;

use crate::display::{DisplayFormat, format_show_time};
use crate::error::CoreError;
use crate::views::{ArtistDetail, ArtistShowEntry, ShowEntry, VenueDetail, VenueShowEntry};

/// Splits shows into `(past, upcoming)` relative to `now`.
///
/// A show is upcoming only when it starts strictly after `now`. Both
/// halves are returned in ascending start time order.
#[must_use]
pub fn partition_by_time<T: Scheduled>(
    mut shows: Vec<T>,
    now: PrimitiveDateTime,
) -> (Vec<T>, Vec<T>) {
    shows.sort_by_key(Scheduled::start_time);
    shows.into_iter().partition(|show| show.start_time() <= now)
}

fn format_entry_time(show_id: i64, start_time: PrimitiveDateTime) -> Result<String, CoreError> {
    format_show_time(start_time, DisplayFormat::Medium).map_err(|e| CoreError::TimeFormatting {
        show_id,
        reason: e.to_string(),
    })
}

fn venue_show_entry(show: VenueShow) -> Result<VenueShowEntry, CoreError> {
    Ok(VenueShowEntry {
        start_time: format_entry_time(show.show_id, show.start_time)?,
        artist_id: show.artist_id,
        artist_name: show.artist_name,
        artist_image_link: show.artist_image_link,
    })
}

fn artist_show_entry(show: ArtistShow) -> Result<ArtistShowEntry, CoreError> {
    Ok(ArtistShowEntry {
        start_time: format_entry_time(show.show_id, show.start_time)?,
        venue_id: show.venue_id,
        venue_name: show.venue_name,
        venue_image_link: show.venue_image_link,
    })
}

/// Builds the venue page from a venue and its joined shows.
///
/// # Errors
///
/// Returns an error if a show start time cannot be formatted.
pub fn assemble_venue_detail(
    venue: Venue,
    shows: Vec<VenueShow>,
    now: PrimitiveDateTime,
) -> Result<VenueDetail, CoreError> {
    let (past, upcoming) = partition_by_time(shows, now);
    let past_shows: Vec<VenueShowEntry> = past
        .into_iter()
        .map(venue_show_entry)
        .collect::<Result<_, _>>()?;
    let upcoming_shows: Vec<VenueShowEntry> = upcoming
        .into_iter()
        .map(venue_show_entry)
        .collect::<Result<_, _>>()?;

    let fields = venue.fields;
    Ok(VenueDetail {
        id: venue.id,
        name: fields.name,
        genres: fields.genres,
        address: fields.address,
        city: fields.city,
        state: fields.state,
        phone: fields.phone,
        website: fields.website,
        facebook_link: fields.facebook_link,
        seeking_talent: fields.seeking_talent,
        seeking_description: fields.description,
        image_link: fields.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

/// Builds the artist page from an artist and its joined shows.
///
/// # Errors
///
/// Returns an error if a show start time cannot be formatted.
pub fn assemble_artist_detail(
    artist: Artist,
    shows: Vec<ArtistShow>,
    now: PrimitiveDateTime,
) -> Result<ArtistDetail, CoreError> {
    let (past, upcoming) = partition_by_time(shows, now);
    let past_shows: Vec<ArtistShowEntry> = past
        .into_iter()
        .map(artist_show_entry)
        .collect::<Result<_, _>>()?;
    let upcoming_shows: Vec<ArtistShowEntry> = upcoming
        .into_iter()
        .map(artist_show_entry)
        .collect::<Result<_, _>>()?;

    let fields = artist.fields;
    Ok(ArtistDetail {
        id: artist.id,
        name: fields.name,
        genres: fields.genres,
        city: fields.city,
        state: fields.state,
        phone: fields.phone,
        website: fields.website,
        facebook_link: fields.facebook_link,
        seeking_venue: fields.seeking_venue,
        seeking_description: fields.seeking_description,
        image_link: fields.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

/// Formats the global show list, newest first.
///
/// # Errors
///
/// Returns an error if a show start time cannot be formatted.
pub fn assemble_show_listing(mut shows: Vec<ShowListing>) -> Result<Vec<ShowEntry>, CoreError> {
    shows.sort_by(|a, b| {
        b.start_time
            .cmp(&a.start_time)
            .then_with(|| b.show_id.cmp(&a.show_id))
    });

    shows
        .into_iter()
        .map(|show| {
            Ok(ShowEntry {
                start_time: format_entry_time(show.show_id, show.start_time)?,
                venue_id: show.venue_id,
                venue_name: show.venue_name,
                artist_id: show.artist_id,
                artist_name: show.artist_name,
                artist_image_link: show.artist_image_link,
            })
        })
        .collect()
}
