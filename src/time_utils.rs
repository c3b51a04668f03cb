// SPDX-License-Identifier: MIT

//! Shared helpers for calendar-day handling.
//!
//! A "day" for logging purposes is the inclusive window
//! [00:00:00.000, 23:59:59.999] UTC on a calendar date.

use crate::error::AppError;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Inclusive start/end instants of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Compute the inclusive bounds of a calendar day.
pub fn day_bounds(date: NaiveDate) -> DayBounds {
    // and_hms_* cannot fail for these fixed in-range values
    let start = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap());
    let end = Utc.from_utc_datetime(&date.and_hms_milli_opt(23, 59, 59, 999).unwrap());
    DayBounds { start, end }
}

/// Parse an optional `date` query parameter (`YYYY-MM-DD`), defaulting to
/// the current UTC date when absent.
pub fn parse_date_param(raw: Option<&str>) -> Result<NaiveDate, AppError> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            AppError::BadRequest("Invalid 'date' parameter: must be YYYY-MM-DD".to_string())
        }),
        None => Ok(Utc::now().date_naive()),
    }
}
