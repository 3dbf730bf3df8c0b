// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fyyur_domain::{Show, ShowListing, VenueShow};
use time::macros::datetime;

use crate::tests::helpers::{
    NOW, create_test_artist, create_test_artist_show, create_test_venue, create_test_venue_show,
};
use crate::{
    ArtistDetail, ShowEntry, VenueDetail, assemble_artist_detail, assemble_show_listing,
    assemble_venue_detail, partition_by_time,
};

#[test]
fn test_partition_puts_future_shows_in_upcoming() {
    let shows: Vec<VenueShow> = vec![
        create_test_venue_show(1, datetime!(2019-05-21 21:30:00)),
        create_test_venue_show(2, datetime!(2035-04-01 20:00:00)),
    ];

    let (past, upcoming) = partition_by_time(shows, NOW);

    assert_eq!(past.len(), 1);
    assert_eq!(past[0].show_id, 1);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].show_id, 2);
}

#[test]
fn test_show_starting_exactly_now_is_past() {
    let shows: Vec<VenueShow> = vec![create_test_venue_show(1, NOW)];

    let (past, upcoming) = partition_by_time(shows, NOW);

    assert_eq!(past.len(), 1);
    assert!(upcoming.is_empty());
}

#[test]
fn test_partition_plain_shows() {
    let shows: Vec<Show> = vec![
        Show {
            id: 7,
            artist_id: 1,
            venue_id: 1,
            start_time: datetime!(2035-04-01 20:00:00),
        },
        Show {
            id: 8,
            artist_id: 1,
            venue_id: 2,
            start_time: datetime!(2024-05-31 23:59:59),
        },
    ];

    let (past, upcoming) = partition_by_time(shows, NOW);

    assert_eq!(past[0].id, 8);
    assert_eq!(upcoming[0].id, 7);
}

#[test]
fn test_partition_sorts_each_half_by_start_time() {
    let shows: Vec<VenueShow> = vec![
        create_test_venue_show(1, datetime!(2035-04-15 20:00:00)),
        create_test_venue_show(2, datetime!(2035-04-01 20:00:00)),
        create_test_venue_show(3, datetime!(2020-01-01 20:00:00)),
        create_test_venue_show(4, datetime!(2019-01-01 20:00:00)),
    ];

    let (past, upcoming) = partition_by_time(shows, NOW);

    assert_eq!(past.iter().map(|s| s.show_id).collect::<Vec<_>>(), vec![4, 3]);
    assert_eq!(
        upcoming.iter().map(|s| s.show_id).collect::<Vec<_>>(),
        vec![2, 1]
    );
}

#[test]
fn test_venue_detail_carries_fields_and_counts() {
    let venue = create_test_venue(1, "The Musical Hop", "San Francisco", "CA");
    let shows: Vec<VenueShow> = vec![
        create_test_venue_show(1, datetime!(2019-05-21 21:30:00)),
        create_test_venue_show(2, datetime!(2035-04-01 20:00:00)),
        create_test_venue_show(3, datetime!(2035-04-08 20:00:00)),
    ];

    let detail: VenueDetail = assemble_venue_detail(venue, shows, NOW).unwrap();

    assert_eq!(detail.id, 1);
    assert_eq!(detail.name, "The Musical Hop");
    assert_eq!(detail.address, "1015 Folsom Street");
    assert!(detail.seeking_talent);
    assert_eq!(
        detail.seeking_description,
        "We are on the lookout for a local artist."
    );
    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 2);
    assert_eq!(detail.past_shows[0].start_time, "Tue 05, 21, 2019 9:30PM");
    assert_eq!(detail.past_shows[0].artist_name, "Guns N Petals");
}

#[test]
fn test_venue_detail_without_shows_has_empty_lists() {
    let venue = create_test_venue(2, "Empty Room", "Boston", "MA");

    let detail: VenueDetail = assemble_venue_detail(venue, Vec::new(), NOW).unwrap();

    assert!(detail.past_shows.is_empty());
    assert!(detail.upcoming_shows.is_empty());
    assert_eq!(detail.past_shows_count, 0);
    assert_eq!(detail.upcoming_shows_count, 0);
}

#[test]
fn test_artist_detail_partitions_shows() {
    let artist = create_test_artist(4, "Guns N Petals");
    let shows = vec![
        create_test_artist_show(1, datetime!(2035-04-01 20:00:00)),
        create_test_artist_show(2, datetime!(2019-05-21 21:30:00)),
    ];

    let detail: ArtistDetail = assemble_artist_detail(artist, shows, NOW).unwrap();

    assert_eq!(detail.name, "Guns N Petals");
    assert_eq!(detail.genres, vec![String::from("Rock n Roll")]);
    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 1);
    assert_eq!(detail.upcoming_shows[0].venue_name, "The Musical Hop");
    assert_eq!(detail.upcoming_shows[0].start_time, "Sun 04, 01, 2035 8:00PM");
}

#[test]
fn test_show_listing_is_newest_first() {
    let listing = |show_id: i64, start_time| ShowListing {
        show_id,
        venue_id: 1,
        venue_name: String::from("The Musical Hop"),
        artist_id: 4,
        artist_name: String::from("Guns N Petals"),
        artist_image_link: None,
        start_time,
    };
    let shows: Vec<ShowListing> = vec![
        listing(1, datetime!(2019-05-21 21:30:00)),
        listing(2, datetime!(2035-04-15 20:00:00)),
        listing(3, datetime!(2035-04-01 20:00:00)),
    ];

    let entries: Vec<ShowEntry> = assemble_show_listing(shows).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].start_time, "Sun 04, 15, 2035 8:00PM");
    assert_eq!(entries[1].start_time, "Sun 04, 01, 2035 8:00PM");
    assert_eq!(entries[2].start_time, "Tue 05, 21, 2019 9:30PM");
}
