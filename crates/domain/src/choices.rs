// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed choice lists offered by the venue and artist forms.

/// US state codes accepted for venues and artists.
pub const STATE_CHOICES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

/// Genres a venue can book or an artist can perform.
pub const GENRE_CHOICES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Returns whether `state` is one of [`STATE_CHOICES`].
#[must_use]
pub fn is_known_state(state: &str) -> bool {
    STATE_CHOICES.contains(&state)
}

/// Returns whether `genre` is one of [`GENRE_CHOICES`].
#[must_use]
pub fn is_known_genre(genre: &str) -> bool {
    GENRE_CHOICES.contains(&genre)
}
