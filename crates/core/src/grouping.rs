// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use fyyur_domain::{Artist, Venue};

use crate::views::{ArtistSummary, VenueArea, VenueSummary};

/// Groups venues by their `(city, state)` location.
///
/// Groups appear in the order of the lowest venue id in each location and
/// venues inside a group are ordered by id. Venues missing from
/// `upcoming_counts` have no upcoming shows.
///
/// # Arguments
///
/// * `venues` - Every venue to group, in any order
/// * `upcoming_counts` - Upcoming show count keyed by venue id
#[must_use]
pub fn group_venues_by_location(
    venues: &[Venue],
    upcoming_counts: &HashMap<i64, usize>,
) -> Vec<VenueArea> {
    let mut ordered: Vec<&Venue> = venues.iter().collect();
    ordered.sort_by_key(|venue| venue.id);

    let mut areas: Vec<VenueArea> = Vec::new();
    let mut index_by_location: HashMap<(&str, &str), usize> = HashMap::new();

    for venue in ordered {
        let summary: VenueSummary = VenueSummary {
            id: venue.id,
            name: venue.fields.name.clone(),
            num_upcoming_shows: upcoming_counts.get(&venue.id).copied().unwrap_or(0),
        };

        let location: (&str, &str) = (venue.fields.city.as_str(), venue.fields.state.as_str());
        if let Some(&index) = index_by_location.get(&location) {
            areas[index].venues.push(summary);
        } else {
            index_by_location.insert(location, areas.len());
            areas.push(VenueArea {
                city: venue.fields.city.clone(),
                state: venue.fields.state.clone(),
                venues: vec![summary],
            });
        }
    }

    areas
}

/// Reduces artists to the id and name shown in the artist list, in id order.
#[must_use]
pub fn summarize_artists(artists: &[Artist]) -> Vec<ArtistSummary> {
    let mut summaries: Vec<ArtistSummary> = artists
        .iter()
        .map(|artist| ArtistSummary {
            id: artist.id,
            name: artist.fields.name.clone(),
        })
        .collect();
    summaries.sort_by_key(|summary| summary.id);
    summaries
}
