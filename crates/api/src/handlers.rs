// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read and mutation handlers.
//!
//! Read handlers assemble page bodies and return an `ApiError` when a
//! record is missing or storage fails. Mutation handlers never fail:
//! they queue a success or error flash message, log the underlying error,
//! and report whether the change was committed.

use std::collections::HashMap;

use fyyur::{
    ArtistSummary, SearchResults, VenueSummary, assemble_artist_detail, assemble_show_listing,
    assemble_venue_detail, group_venues_by_location, summarize_artists,
};
use fyyur_domain::{
    Artist, ArtistFields, NewShow, Venue, VenueFields, to_storage_string, validate_artist_fields,
    validate_venue_fields,
};
use fyyur_persistence::Persistence;
use time::PrimitiveDateTime;
use tracing::{error, info, warn};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::flash::{FlashMessage, FlashQueue};
use crate::request_response::{
    ArtistFormResponse, ArtistRequest, ArtistResponse, ArtistsResponse, FormChoices,
    MutationOutcome, SearchArtistsResponse, SearchRequest, SearchVenuesResponse,
    ShowFormResponse, ShowRequest, ShowsResponse, VenueFormResponse, VenueRequest,
    VenueResponse, VenuesResponse,
};

// ============================================================================
// Venues
// ============================================================================

/// Lists venues grouped by `(city, state)` with their upcoming show counts.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `now` - The reference time separating past from upcoming shows
///
/// # Errors
///
/// Returns an error if storage cannot be read.
pub fn list_venues(
    persistence: &mut Persistence,
    now: PrimitiveDateTime,
) -> Result<VenuesResponse, ApiError> {
    let venues: Vec<Venue> = persistence
        .list_venues()
        .map_err(translate_persistence_error)?;
    let upcoming: HashMap<i64, usize> = persistence
        .count_upcoming_shows_by_venue(now)
        .map_err(translate_persistence_error)?;

    Ok(VenuesResponse {
        areas: group_venues_by_location(&venues, &upcoming),
    })
}

/// Searches venues by case-insensitive substring of their name.
///
/// # Errors
///
/// Returns an error if storage cannot be read.
pub fn search_venues(
    persistence: &mut Persistence,
    request: &SearchRequest,
    now: PrimitiveDateTime,
) -> Result<SearchVenuesResponse, ApiError> {
    let venues: Vec<Venue> = persistence
        .search_venues(&request.search_term)
        .map_err(translate_persistence_error)?;
    let upcoming: HashMap<i64, usize> = persistence
        .count_upcoming_shows_by_venue(now)
        .map_err(translate_persistence_error)?;

    let data: Vec<VenueSummary> = venues
        .into_iter()
        .map(|venue| VenueSummary {
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
            id: venue.id,
            name: venue.fields.name,
        })
        .collect();

    Ok(SearchVenuesResponse {
        search_term: request.search_term.clone(),
        results: SearchResults::new(data),
    })
}

/// Assembles the detail page of a venue.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the venue does not exist, or an
/// error if storage cannot be read.
pub fn get_venue(
    persistence: &mut Persistence,
    venue_id: i64,
    now: PrimitiveDateTime,
) -> Result<VenueResponse, ApiError> {
    let venue: Venue = persistence
        .get_venue(venue_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::venue_not_found(venue_id))?;
    let shows = persistence
        .shows_for_venue(venue_id)
        .map_err(translate_persistence_error)?;

    Ok(VenueResponse {
        venue: assemble_venue_detail(venue, shows, now).map_err(translate_core_error)?,
    })
}

/// Returns the choices for an empty venue form.
#[must_use]
pub fn new_venue_form() -> VenueFormResponse {
    VenueFormResponse {
        form: FormChoices::default(),
        venue: None,
    }
}

/// Returns a venue form pre-filled with the stored venue.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the venue does not exist.
pub fn edit_venue_form(
    persistence: &mut Persistence,
    venue_id: i64,
) -> Result<VenueFormResponse, ApiError> {
    let venue: Venue = persistence
        .get_venue(venue_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::venue_not_found(venue_id))?;

    Ok(VenueFormResponse {
        form: FormChoices::default(),
        venue: Some(venue),
    })
}

fn try_create_venue(persistence: &mut Persistence, fields: &VenueFields) -> Result<i64, ApiError> {
    validate_venue_fields(fields).map_err(translate_domain_error)?;
    persistence
        .create_venue(fields)
        .map_err(translate_persistence_error)
}

/// Creates a venue and queues the outcome as a flash message.
pub fn create_venue(
    persistence: &mut Persistence,
    flashes: &mut FlashQueue,
    request: VenueRequest,
) -> MutationOutcome {
    let fields: VenueFields = request.into_fields();

    match try_create_venue(persistence, &fields) {
        Ok(venue_id) => {
            info!(venue_id, name = %fields.name, "Venue listed");
            flashes.push(FlashMessage::success(format!(
                "Venue {} was successfully listed!",
                fields.name
            )));
            MutationOutcome::success(Some(venue_id))
        }
        Err(e) => {
            error!(name = %fields.name, error = %e, "Venue could not be listed");
            flashes.push(FlashMessage::error(format!(
                "An error occurred. Venue {} could not be listed.",
                fields.name
            )));
            MutationOutcome::failure()
        }
    }
}

fn try_update_venue(
    persistence: &mut Persistence,
    venue_id: i64,
    fields: &VenueFields,
) -> Result<(), ApiError> {
    validate_venue_fields(fields).map_err(translate_domain_error)?;
    persistence
        .update_venue(venue_id, fields)
        .map_err(translate_persistence_error)
}

/// Replaces the fields of a venue and queues the outcome as a flash message.
pub fn update_venue(
    persistence: &mut Persistence,
    flashes: &mut FlashQueue,
    venue_id: i64,
    request: VenueRequest,
) -> MutationOutcome {
    let fields: VenueFields = request.into_fields();

    match try_update_venue(persistence, venue_id, &fields) {
        Ok(()) => {
            info!(venue_id, name = %fields.name, "Venue edited");
            flashes.push(FlashMessage::success(format!(
                "Venue {} was successfully edited!",
                fields.name
            )));
            MutationOutcome::success(Some(venue_id))
        }
        Err(e) => {
            error!(venue_id, error = %e, "Venue could not be edited");
            flashes.push(FlashMessage::error(format!(
                "An error occurred. Venue {} could not be edited.",
                fields.name
            )));
            MutationOutcome::failure()
        }
    }
}

/// Deletes a venue with its shows and queues the outcome as a flash message.
///
/// When the venue does not exist its ID stands in for the name.
pub fn delete_venue(
    persistence: &mut Persistence,
    flashes: &mut FlashQueue,
    venue_id: i64,
) -> MutationOutcome {
    match persistence.delete_venue(venue_id) {
        Ok(name) => {
            info!(venue_id, name = %name, "Venue deleted");
            flashes.push(FlashMessage::success(format!("Venue {name} is deleted.")));
            MutationOutcome::success(Some(venue_id))
        }
        Err(e) => {
            let e: ApiError = translate_persistence_error(e);
            error!(venue_id, error = %e, "Venue could not be deleted");
            let label: String = persistence
                .get_venue(venue_id)
                .ok()
                .flatten()
                .map_or_else(|| venue_id.to_string(), |venue| venue.fields.name);
            flashes.push(FlashMessage::error(format!(
                "An error occurred. Venue {label} could not be deleted."
            )));
            MutationOutcome::failure()
        }
    }
}

// ============================================================================
// Artists
// ============================================================================

/// Lists every artist by id and name.
///
/// # Errors
///
/// Returns an error if storage cannot be read.
pub fn list_artists(persistence: &mut Persistence) -> Result<ArtistsResponse, ApiError> {
    let artists: Vec<Artist> = persistence
        .list_artists()
        .map_err(translate_persistence_error)?;

    Ok(ArtistsResponse {
        artists: summarize_artists(&artists),
    })
}

/// Searches artists by case-insensitive substring of their name.
///
/// # Errors
///
/// Returns an error if storage cannot be read.
pub fn search_artists(
    persistence: &mut Persistence,
    request: &SearchRequest,
) -> Result<SearchArtistsResponse, ApiError> {
    let artists: Vec<Artist> = persistence
        .search_artists(&request.search_term)
        .map_err(translate_persistence_error)?;
    let data: Vec<ArtistSummary> = summarize_artists(&artists);

    Ok(SearchArtistsResponse {
        search_term: request.search_term.clone(),
        results: SearchResults::new(data),
    })
}

/// Assembles the detail page of an artist.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the artist does not exist, or an
/// error if storage cannot be read.
pub fn get_artist(
    persistence: &mut Persistence,
    artist_id: i64,
    now: PrimitiveDateTime,
) -> Result<ArtistResponse, ApiError> {
    let artist: Artist = persistence
        .get_artist(artist_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::artist_not_found(artist_id))?;
    let shows = persistence
        .shows_for_artist(artist_id)
        .map_err(translate_persistence_error)?;

    Ok(ArtistResponse {
        artist: assemble_artist_detail(artist, shows, now).map_err(translate_core_error)?,
    })
}

/// Returns the choices for an empty artist form.
#[must_use]
pub fn new_artist_form() -> ArtistFormResponse {
    ArtistFormResponse {
        form: FormChoices::default(),
        artist: None,
    }
}

/// Returns an artist form pre-filled with the stored artist.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the artist does not exist.
pub fn edit_artist_form(
    persistence: &mut Persistence,
    artist_id: i64,
) -> Result<ArtistFormResponse, ApiError> {
    let artist: Artist = persistence
        .get_artist(artist_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::artist_not_found(artist_id))?;

    Ok(ArtistFormResponse {
        form: FormChoices::default(),
        artist: Some(artist),
    })
}

fn try_create_artist(
    persistence: &mut Persistence,
    fields: &ArtistFields,
) -> Result<i64, ApiError> {
    validate_artist_fields(fields).map_err(translate_domain_error)?;
    persistence
        .create_artist(fields)
        .map_err(translate_persistence_error)
}

/// Creates an artist and queues the outcome as a flash message.
pub fn create_artist(
    persistence: &mut Persistence,
    flashes: &mut FlashQueue,
    request: ArtistRequest,
) -> MutationOutcome {
    let fields: ArtistFields = request.into_fields();

    match try_create_artist(persistence, &fields) {
        Ok(artist_id) => {
            info!(artist_id, name = %fields.name, "Artist listed");
            flashes.push(FlashMessage::success(format!(
                "Artist {} was successfully listed!",
                fields.name
            )));
            MutationOutcome::success(Some(artist_id))
        }
        Err(e) => {
            error!(name = %fields.name, error = %e, "Artist could not be listed");
            flashes.push(FlashMessage::error(format!(
                "An error occurred. Artist {} could not be listed.",
                fields.name
            )));
            MutationOutcome::failure()
        }
    }
}

fn try_update_artist(
    persistence: &mut Persistence,
    artist_id: i64,
    fields: &ArtistFields,
) -> Result<(), ApiError> {
    validate_artist_fields(fields).map_err(translate_domain_error)?;
    persistence
        .update_artist(artist_id, fields)
        .map_err(translate_persistence_error)
}

/// Replaces the fields of an artist and queues the outcome as a flash message.
pub fn update_artist(
    persistence: &mut Persistence,
    flashes: &mut FlashQueue,
    artist_id: i64,
    request: ArtistRequest,
) -> MutationOutcome {
    let fields: ArtistFields = request.into_fields();

    match try_update_artist(persistence, artist_id, &fields) {
        Ok(()) => {
            info!(artist_id, name = %fields.name, "Artist edited");
            flashes.push(FlashMessage::success(format!(
                "Artist {} was successfully edited!",
                fields.name
            )));
            MutationOutcome::success(Some(artist_id))
        }
        Err(e) => {
            error!(artist_id, error = %e, "Artist could not be edited");
            flashes.push(FlashMessage::error(format!(
                "An error occurred. Artist {} could not be edited.",
                fields.name
            )));
            MutationOutcome::failure()
        }
    }
}

/// Deletes an artist with their shows and queues the outcome as a flash message.
///
/// When the artist does not exist their ID stands in for the name.
pub fn delete_artist(
    persistence: &mut Persistence,
    flashes: &mut FlashQueue,
    artist_id: i64,
) -> MutationOutcome {
    match persistence.delete_artist(artist_id) {
        Ok(name) => {
            info!(artist_id, name = %name, "Artist deleted");
            flashes.push(FlashMessage::success(format!("Artist {name} is deleted.")));
            MutationOutcome::success(Some(artist_id))
        }
        Err(e) => {
            let e: ApiError = translate_persistence_error(e);
            error!(artist_id, error = %e, "Artist could not be deleted");
            let label: String = persistence
                .get_artist(artist_id)
                .ok()
                .flatten()
                .map_or_else(|| artist_id.to_string(), |artist| artist.fields.name);
            flashes.push(FlashMessage::error(format!(
                "An error occurred. Artist {label} could not be deleted."
            )));
            MutationOutcome::failure()
        }
    }
}

// ============================================================================
// Shows
// ============================================================================

/// Lists every show, newest first.
///
/// # Errors
///
/// Returns an error if storage cannot be read.
pub fn list_shows(persistence: &mut Persistence) -> Result<ShowsResponse, ApiError> {
    let shows = persistence
        .list_shows()
        .map_err(translate_persistence_error)?;

    Ok(ShowsResponse {
        shows: assemble_show_listing(shows).map_err(translate_core_error)?,
    })
}

/// Returns the show form, pre-filled with `now` as the start time.
#[must_use]
pub fn new_show_form(now: PrimitiveDateTime) -> ShowFormResponse {
    ShowFormResponse {
        form: FormChoices::default(),
        default_start_time: to_storage_string(now),
    }
}

fn try_create_show(persistence: &mut Persistence, request: &ShowRequest) -> Result<i64, ApiError> {
    let show: NewShow = request.to_new_show()?;
    persistence
        .create_show(&show)
        .map(|show| show.id)
        .map_err(translate_persistence_error)
}

/// Creates a show and queues the outcome as a flash message.
///
/// The artist and venue must exist.
pub fn create_show(
    persistence: &mut Persistence,
    flashes: &mut FlashQueue,
    request: &ShowRequest,
) -> MutationOutcome {
    match try_create_show(persistence, request) {
        Ok(show_id) => {
            info!(show_id, "Show listed");
            flashes.push(FlashMessage::success("Show was successfully listed!"));
            MutationOutcome::success(Some(show_id))
        }
        Err(e) => {
            if matches!(e, ApiError::InvalidInput { .. }) {
                warn!(error = %e, "Show submission rejected");
            } else {
                error!(error = %e, "Show could not be added");
            }
            flashes.push(FlashMessage::error(
                "An error occurred. Show could not be added.",
            ));
            MutationOutcome::failure()
        }
    }
}
