// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `venues`: Venue lookup, listing and search
//! - `artists`: Artist lookup, listing and search
//! - `shows`: Show joins and upcoming-show counts

pub mod artists;
pub mod shows;
pub mod venues;

use diesel::define_sql_function;
use diesel::sql_types::Text;

define_sql_function! {
    /// Lowercases text with full Unicode case folding.
    ///
    /// `SQLite`'s own `lower()` and `LIKE` only fold ASCII letters, so name
    /// searches compare `unicode_lower(name)` against a lowercased term.
    /// Registered on every connection by `initialize_database`.
    fn unicode_lower(x: Text) -> Text;
}

/// The escape character used in `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Builds a `LIKE` pattern matching `term` as a literal substring.
///
/// The term is used as given; callers lowercase it to search without case.
///
/// `%`, `_` and the escape character itself are escaped so user input
/// cannot act as a wildcard.
#[must_use]
pub fn substring_pattern(term: &str) -> String {
    let mut pattern: String = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
