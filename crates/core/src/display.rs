// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display formatting of show start times.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// `Tue 05, 21, 2019 9:30PM`
const MEDIUM: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short] [month], [day], [year] [hour repr:12 padding:none]:[minute][period]"
);

/// `Tuesday May, 21, 2019 at 9:30PM`
const FULL: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday] [month repr:long], [day padding:none], [year] at [hour repr:12 padding:none]:[minute][period]"
);

/// How much detail to show when rendering a start time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// Abbreviated weekday and numeric month. Used by every listing.
    #[default]
    Medium,
    /// Full weekday and month names.
    Full,
}

/// Formats a show start time for display.
///
/// # Errors
///
/// Returns an error if the formatter rejects the value.
pub fn format_show_time(
    start_time: PrimitiveDateTime,
    format: DisplayFormat,
) -> Result<String, time::error::Format> {
    match format {
        DisplayFormat::Medium => start_time.format(MEDIUM),
        DisplayFormat::Full => start_time.format(FULL),
    }
}
