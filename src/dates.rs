//! Date normalization for the heterogeneous date strings AP News renders.
//!
//! The listing shows dates in several shapes: `"8 mins ago"`, `"3 hours
//! ago"`, `"Yesterday"`, `"February 28"`, `"February 28, 2022"`. This module
//! converts any of them into a [`NaiveDateTime`] relative to a caller-supplied
//! clock so results are comparable and testable.
//!
//! The forms are tried in a fixed priority order because they are not
//! mutually exclusive: `"3 hours ago"` would otherwise parse as a bare
//! month-day string and fail.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::ScrapeError;

static HOURS_AGO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+) hours? ago").unwrap());
static MINS_AGO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+) mins? ago").unwrap());
static MONTH_DAY_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+ \d{1,2}, \d{4}").unwrap());
static MONTH_DAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+ \d{1,2}").unwrap());

/// Convert a date string from the listing into an absolute timestamp.
///
/// `now` is the clock the relative forms are resolved against. Calendar
/// dates come back at midnight. A bare `"<Month> <Day>"` assumes `now`'s
/// year, so a future month within the current year is accepted as-is; the
/// cutoff filter downstream makes this approximation harmless for the
/// recency window this tool works with.
///
/// # Errors
///
/// [`ScrapeError::UnrecognizedDateFormat`] when no known form matches.
pub fn normalize(text: &str, now: NaiveDateTime) -> Result<NaiveDateTime, ScrapeError> {
    let offset = |caps: &regex::Captures| -> Result<i64, ScrapeError> {
        caps[1]
            .parse()
            .map_err(|_| ScrapeError::UnrecognizedDateFormat(text.to_string()))
    };

    let parsed = if let Some(caps) = HOURS_AGO.captures(text) {
        now - Duration::hours(offset(&caps)?)
    } else if let Some(caps) = MINS_AGO.captures(text) {
        now - Duration::minutes(offset(&caps)?)
    } else if text == "Yesterday" {
        now - Duration::days(1)
    } else if MONTH_DAY_YEAR.is_match(text) {
        NaiveDate::parse_from_str(text, "%B %d, %Y")
            .map_err(|_| ScrapeError::UnrecognizedDateFormat(text.to_string()))?
            .and_hms_opt(0, 0, 0)
            .unwrap()
    } else if MONTH_DAY.is_match(text) {
        let with_year = format!("{}, {}", text, now.year());
        NaiveDate::parse_from_str(&with_year, "%B %d, %Y")
            .map_err(|_| ScrapeError::UnrecognizedDateFormat(text.to_string()))?
            .and_hms_opt(0, 0, 0)
            .unwrap()
    } else {
        return Err(ScrapeError::UnrecognizedDateFormat(text.to_string()));
    };

    debug!(raw = text, %parsed, "Normalized date string");
    Ok(parsed)
}
