// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use crate::queries::substring_pattern;
use crate::tests::{create_test_artist_fields, create_test_venue_fields};

fn persistence_with_venues(names: &[&str]) -> Persistence {
    let mut persistence = Persistence::new_in_memory().unwrap();
    for name in names {
        persistence
            .create_venue(&create_test_venue_fields(name))
            .unwrap();
    }
    persistence
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let mut persistence = persistence_with_venues(&["The Rock Room", "Jazz Cellar"]);

    let results = persistence.search_venues("roc").unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name(), "The Rock Room");
}

#[test]
fn test_empty_term_matches_everything() {
    let mut persistence = persistence_with_venues(&["The Rock Room", "Jazz Cellar"]);

    assert_eq!(persistence.search_venues("").unwrap().len(), 2);
}

#[test]
fn test_wildcards_in_term_match_literally() {
    let mut persistence = persistence_with_venues(&["100% Jazz", "1000 Jazz", "A_B Club", "AxB Club"]);

    let percent = persistence.search_venues("100%").unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].name(), "100% Jazz");

    let underscore = persistence.search_venues("a_b").unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].name(), "A_B Club");
}

#[test]
fn test_no_match_returns_empty() {
    let mut persistence = persistence_with_venues(&["The Rock Room"]);

    assert!(persistence.search_venues("polka").unwrap().is_empty());
}

#[test]
fn test_artist_search_matches_substring() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"] {
        persistence
            .create_artist(&create_test_artist_fields(name))
            .unwrap();
    }

    let results = persistence.search_artists("A").unwrap();

    assert_eq!(
        results.iter().map(|a| a.name()).collect::<Vec<_>>(),
        vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]
    );
    assert_eq!(persistence.search_artists("band").unwrap().len(), 1);
}

#[test]
fn test_pattern_escapes_special_characters() {
    assert_eq!(substring_pattern("a%b_c\\d"), "%a\\%b\\_c\\\\d%");
    assert_eq!(substring_pattern(""), "%%");
}

#[test]
fn test_search_folds_non_ascii_case() {
    let mut persistence = persistence_with_venues(&["CAFÉ ÑANDÚ", "Österreich Halle", "Cafe Plain"]);

    let cafe = persistence.search_venues("café").unwrap();
    assert_eq!(cafe.len(), 1);
    assert_eq!(cafe[0].name(), "CAFÉ ÑANDÚ");

    let oster = persistence.search_venues("ÖSTER").unwrap();
    assert_eq!(oster.len(), 1);
    assert_eq!(oster[0].name(), "Österreich Halle");
}

#[test]
fn test_artist_search_folds_non_ascii_case() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .create_artist(&create_test_artist_fields("Ángel Núñez"))
        .unwrap();

    let results = persistence.search_artists("ángel nú").unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name(), "Ángel Núñez");
}
