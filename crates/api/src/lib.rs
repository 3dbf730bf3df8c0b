// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Fyyur booking service.
//!
//! Handlers take decoded form submissions, validate them against the
//! domain rules, call into persistence and assemble page bodies. Errors
//! from the lower layers are translated into `ApiError` and never leak
//! through. Mutations report their result as a queued flash message.

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

mod error;
mod flash;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use flash::{FlashCategory, FlashMessage, FlashQueue};
pub use handlers::{
    create_artist, create_show, create_venue, delete_artist, delete_venue, edit_artist_form,
    edit_venue_form, get_artist, get_venue, list_artists, list_shows, list_venues,
    new_artist_form, new_show_form, new_venue_form, search_artists, search_venues, update_artist,
    update_venue,
};
pub use request_response::{
    ArtistFormResponse, ArtistRequest, ArtistResponse, ArtistsResponse, FormChoices, FormError,
    HomeResponse, MutationOutcome, Page, SearchArtistsResponse, SearchRequest,
    SearchVenuesResponse, ShowFormResponse, ShowRequest, ShowsResponse, VenueFormResponse,
    VenueRequest, VenueResponse, VenuesResponse,
};
