// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing and storage encoding of show start times.
//!
//! Start times are naive wall-clock timestamps with second precision.
//! They are stored as `YYYY-MM-DD HH:MM:SS` text so that lexical and
//! chronological ordering agree, which lets the database compare them
//! directly.

use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::DomainError;

/// The storage encoding. Also the primary accepted input form.
const STORAGE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Additional input forms accepted from forms, in order of preference.
///
/// The `T`-separated variants are what an HTML `datetime-local` input submits.
const INPUT_FORMATS: [&[BorrowedFormatItem<'static>]; 4] = [
    STORAGE_FORMAT,
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];

/// Parses a start time submitted by a form.
///
/// # Errors
///
/// Returns `DomainError::InvalidStartTime` if the input matches none of the
/// accepted forms.
pub fn parse_start_time(value: &str) -> Result<PrimitiveDateTime, DomainError> {
    let trimmed: &str = value.trim();
    let mut last_error: Option<String> = None;

    for format in INPUT_FORMATS {
        match PrimitiveDateTime::parse(trimmed, format) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => last_error = Some(e.to_string()),
        }
    }

    Err(DomainError::InvalidStartTime {
        value: value.to_string(),
        error: last_error.unwrap_or_else(|| String::from("empty input")),
    })
}

/// Encodes a start time for storage.
#[must_use]
pub fn to_storage_string(start_time: PrimitiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        start_time.year(),
        u8::from(start_time.month()),
        start_time.day(),
        start_time.hour(),
        start_time.minute(),
        start_time.second()
    )
}

/// Decodes a stored start time.
///
/// # Errors
///
/// Returns `DomainError::InvalidStartTime` if the stored text is not in
/// storage encoding.
pub fn from_storage_string(value: &str) -> Result<PrimitiveDateTime, DomainError> {
    PrimitiveDateTime::parse(value, STORAGE_FORMAT).map_err(|e| DomainError::InvalidStartTime {
        value: value.to_string(),
        error: e.to_string(),
    })
}
