// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Route handlers.
//!
//! Read pages lock persistence, build the body, then drain the flash
//! queue into it. Mutations queue their flash and either render the home
//! page or redirect.

use axum::{
    Form, Json,
    extract::{Path, State as AxumState},
    response::Redirect,
};
use fyyur_api::{
    ArtistFormResponse, ArtistRequest, ArtistResponse, ArtistsResponse, HomeResponse,
    MutationOutcome, Page, SearchArtistsResponse, SearchRequest, SearchVenuesResponse,
    ShowFormResponse, ShowRequest, ShowsResponse, VenueFormResponse, VenueRequest, VenueResponse,
    VenuesResponse,
};
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};
use tracing::info;

use crate::AppState;
use crate::error::HttpError;

/// Decoded form pairs; a field may repeat.
type FormPairs = Form<Vec<(String, String)>>;

/// The current wall-clock time at `utc_offset`, without the offset.
///
/// Show times are stored as entered, so "now" must be read on the same
/// clock before comparing against them.
#[must_use]
pub fn current_time(utc_offset: UtcOffset) -> PrimitiveDateTime {
    let now: OffsetDateTime = OffsetDateTime::now_utc().to_offset(utc_offset);
    PrimitiveDateTime::new(now.date(), now.time())
}

/// Parses a path identifier. Anything but an integer is an unknown page.
fn parse_path_id(raw: &str) -> Result<i64, HttpError> {
    raw.parse::<i64>()
        .map_err(|_| HttpError::not_found(format!("No page at id '{raw}'")))
}

/// Wraps a body with the flash messages queued since the last render.
async fn render<T: Send>(app_state: &AppState, body: T) -> Json<Page<T>> {
    let messages = app_state.flashes.lock().await.drain();
    Json(Page::new(body, messages))
}

/// Handler for GET `/`.
pub async fn handle_home(AxumState(app_state): AxumState<AppState>) -> Json<Page<HomeResponse>> {
    render(&app_state, HomeResponse::default()).await
}

/// Handler for unknown routes.
#[allow(clippy::unused_async)]
pub async fn handle_not_found() -> HttpError {
    HttpError::not_found("Page not found")
}

// ============================================================================
// Venues
// ============================================================================

/// Handler for GET `/venues`.
pub async fn handle_list_venues(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Page<VenuesResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let body: VenuesResponse =
        fyyur_api::list_venues(&mut persistence, current_time(app_state.utc_offset))?;
    drop(persistence);

    Ok(render(&app_state, body).await)
}

/// Handler for POST `/venues/search`.
pub async fn handle_search_venues(
    AxumState(app_state): AxumState<AppState>,
    Form(pairs): FormPairs,
) -> Result<Json<Page<SearchVenuesResponse>>, HttpError> {
    let request: SearchRequest = SearchRequest::from_form(&pairs);
    info!(search_term = %request.search_term, "Searching venues");

    let mut persistence = app_state.persistence.lock().await;
    let body: SearchVenuesResponse =
        fyyur_api::search_venues(&mut persistence, &request, current_time(app_state.utc_offset))?;
    drop(persistence);

    Ok(render(&app_state, body).await)
}

/// Handler for GET `/venues/{id}`.
pub async fn handle_get_venue(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Page<VenueResponse>>, HttpError> {
    let venue_id: i64 = parse_path_id(&raw_id)?;

    let mut persistence = app_state.persistence.lock().await;
    let body: VenueResponse =
        fyyur_api::get_venue(&mut persistence, venue_id, current_time(app_state.utc_offset))?;
    drop(persistence);

    Ok(render(&app_state, body).await)
}

/// Handler for GET `/venues/create`.
pub async fn handle_new_venue_form(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Page<VenueFormResponse>> {
    render(&app_state, fyyur_api::new_venue_form()).await
}

/// Handler for POST `/venues/create`.
///
/// Renders the home page with the outcome.
pub async fn handle_create_venue(
    AxumState(app_state): AxumState<AppState>,
    Form(pairs): FormPairs,
) -> Json<Page<HomeResponse>> {
    let request: VenueRequest = VenueRequest::from_form(&pairs);
    info!(name = %request.name, "Handling create venue request");

    let mut persistence = app_state.persistence.lock().await;
    let mut flashes = app_state.flashes.lock().await;
    let outcome: MutationOutcome = fyyur_api::create_venue(&mut persistence, &mut flashes, request);
    drop(flashes);
    drop(persistence);

    info!(committed = outcome.committed, "Create venue finished");
    render(&app_state, HomeResponse::default()).await
}

/// Handler for GET `/venues/{id}/edit`.
pub async fn handle_edit_venue_form(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Page<VenueFormResponse>>, HttpError> {
    let venue_id: i64 = parse_path_id(&raw_id)?;

    let mut persistence = app_state.persistence.lock().await;
    let body: VenueFormResponse = fyyur_api::edit_venue_form(&mut persistence, venue_id)?;
    drop(persistence);

    Ok(render(&app_state, body).await)
}

/// Handler for POST `/venues/{id}/edit`.
///
/// Redirects to the venue page whether or not the edit was committed.
pub async fn handle_update_venue(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
    Form(pairs): FormPairs,
) -> Result<Redirect, HttpError> {
    let venue_id: i64 = parse_path_id(&raw_id)?;
    let request: VenueRequest = VenueRequest::from_form(&pairs);
    info!(venue_id, "Handling edit venue request");

    let mut persistence = app_state.persistence.lock().await;
    let mut flashes = app_state.flashes.lock().await;
    let outcome: MutationOutcome =
        fyyur_api::update_venue(&mut persistence, &mut flashes, venue_id, request);
    drop(flashes);
    drop(persistence);

    info!(committed = outcome.committed, "Edit venue finished");

    Ok(Redirect::to(&format!("/venues/{venue_id}")))
}

/// Handler for DELETE `/venues/{id}`.
pub async fn handle_delete_venue(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, HttpError> {
    let venue_id: i64 = parse_path_id(&raw_id)?;
    info!(venue_id, "Handling delete venue request");

    let mut persistence = app_state.persistence.lock().await;
    let mut flashes = app_state.flashes.lock().await;
    let outcome: MutationOutcome =
        fyyur_api::delete_venue(&mut persistence, &mut flashes, venue_id);
    drop(flashes);
    drop(persistence);

    info!(committed = outcome.committed, "Delete venue finished");

    Ok(Redirect::to("/venues"))
}

// ============================================================================
// Artists
// ============================================================================

/// Handler for GET `/artists`.
pub async fn handle_list_artists(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Page<ArtistsResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let body: ArtistsResponse = fyyur_api::list_artists(&mut persistence)?;
    drop(persistence);

    Ok(render(&app_state, body).await)
}

/// Handler for POST `/artists/search`.
pub async fn handle_search_artists(
    AxumState(app_state): AxumState<AppState>,
    Form(pairs): FormPairs,
) -> Result<Json<Page<SearchArtistsResponse>>, HttpError> {
    let request: SearchRequest = SearchRequest::from_form(&pairs);
    info!(search_term = %request.search_term, "Searching artists");

    let mut persistence = app_state.persistence.lock().await;
    let body: SearchArtistsResponse = fyyur_api::search_artists(&mut persistence, &request)?;
    drop(persistence);

    Ok(render(&app_state, body).await)
}

/// Handler for GET `/artists/{id}`.
pub async fn handle_get_artist(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Page<ArtistResponse>>, HttpError> {
    let artist_id: i64 = parse_path_id(&raw_id)?;

    let mut persistence = app_state.persistence.lock().await;
    let body: ArtistResponse =
        fyyur_api::get_artist(&mut persistence, artist_id, current_time(app_state.utc_offset))?;
    drop(persistence);

    Ok(render(&app_state, body).await)
}

/// Handler for GET `/artists/create`.
pub async fn handle_new_artist_form(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Page<ArtistFormResponse>> {
    render(&app_state, fyyur_api::new_artist_form()).await
}

/// Handler for POST `/artists/create`.
pub async fn handle_create_artist(
    AxumState(app_state): AxumState<AppState>,
    Form(pairs): FormPairs,
) -> Json<Page<HomeResponse>> {
    let request: ArtistRequest = ArtistRequest::from_form(&pairs);
    info!(name = %request.name, "Handling create artist request");

    let mut persistence = app_state.persistence.lock().await;
    let mut flashes = app_state.flashes.lock().await;
    let outcome: MutationOutcome =
        fyyur_api::create_artist(&mut persistence, &mut flashes, request);
    drop(flashes);
    drop(persistence);

    info!(committed = outcome.committed, "Create artist finished");
    render(&app_state, HomeResponse::default()).await
}

/// Handler for GET `/artists/{id}/edit`.
pub async fn handle_edit_artist_form(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Page<ArtistFormResponse>>, HttpError> {
    let artist_id: i64 = parse_path_id(&raw_id)?;

    let mut persistence = app_state.persistence.lock().await;
    let body: ArtistFormResponse = fyyur_api::edit_artist_form(&mut persistence, artist_id)?;
    drop(persistence);

    Ok(render(&app_state, body).await)
}

/// Handler for POST `/artists/{id}/edit`.
pub async fn handle_update_artist(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
    Form(pairs): FormPairs,
) -> Result<Redirect, HttpError> {
    let artist_id: i64 = parse_path_id(&raw_id)?;
    let request: ArtistRequest = ArtistRequest::from_form(&pairs);
    info!(artist_id, "Handling edit artist request");

    let mut persistence = app_state.persistence.lock().await;
    let mut flashes = app_state.flashes.lock().await;
    let outcome: MutationOutcome =
        fyyur_api::update_artist(&mut persistence, &mut flashes, artist_id, request);
    drop(flashes);
    drop(persistence);

    info!(committed = outcome.committed, "Edit artist finished");

    Ok(Redirect::to(&format!("/artists/{artist_id}")))
}

/// Handler for DELETE `/artists/{id}`.
pub async fn handle_delete_artist(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, HttpError> {
    let artist_id: i64 = parse_path_id(&raw_id)?;
    info!(artist_id, "Handling delete artist request");

    let mut persistence = app_state.persistence.lock().await;
    let mut flashes = app_state.flashes.lock().await;
    let outcome: MutationOutcome =
        fyyur_api::delete_artist(&mut persistence, &mut flashes, artist_id);
    drop(flashes);
    drop(persistence);

    info!(committed = outcome.committed, "Delete artist finished");

    Ok(Redirect::to("/artists"))
}

// ============================================================================
// Shows
// ============================================================================

/// Handler for GET `/shows`.
pub async fn handle_list_shows(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Page<ShowsResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let body: ShowsResponse = fyyur_api::list_shows(&mut persistence)?;
    drop(persistence);

    Ok(render(&app_state, body).await)
}

/// Handler for GET `/shows/create`.
pub async fn handle_new_show_form(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Page<ShowFormResponse>> {
    let body: ShowFormResponse = fyyur_api::new_show_form(current_time(app_state.utc_offset));
    render(&app_state, body).await
}

/// Handler for POST `/shows/create`.
pub async fn handle_create_show(
    AxumState(app_state): AxumState<AppState>,
    Form(pairs): FormPairs,
) -> Json<Page<HomeResponse>> {
    let request: ShowRequest = ShowRequest::from_form(&pairs);
    info!(
        artist_id = %request.artist_id,
        venue_id = %request.venue_id,
        "Handling create show request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let mut flashes = app_state.flashes.lock().await;
    let outcome: MutationOutcome = fyyur_api::create_show(&mut persistence, &mut flashes, &request);
    drop(flashes);
    drop(persistence);

    info!(committed = outcome.committed, "Create show finished");
    render(&app_state, HomeResponse::default()).await
}
