// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod detail;
mod display;
mod error;
mod grouping;
mod views;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use detail::{
    assemble_artist_detail, assemble_show_listing, assemble_venue_detail, partition_by_time,
};
pub use display::{DisplayFormat, format_show_time};
pub use error::CoreError;
pub use grouping::{group_venues_by_location, summarize_artists};
pub use views::{
    ArtistDetail, ArtistShowEntry, ArtistSummary, SearchResults, ShowEntry, VenueArea,
    VenueDetail, VenueShowEntry, VenueSummary,
};
