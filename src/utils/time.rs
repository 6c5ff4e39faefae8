//! Time utilities: parsing HH:MM, day-first timestamps, wraparound windows.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Day-first formats accepted for the raw `Date` column, tried in order.
/// The `%y` variants come first: `%Y` also matches a bare two-digit year
/// and would resolve "24" to year 0024 instead of the 20xx pivot, while
/// `%y` rejects four-digit years and falls through to the `%Y` variants.
const TIMESTAMP_FORMATS: [&str; 8] = [
    "%d/%m/%y %H:%M:%S",
    "%d/%m/%y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%y %H:%M:%S",
    "%d-%m-%y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_date(d: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(d.to_string()))
}

/// Parse a day-first date-time string as found in the raw input rows.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Inclusive time-of-day window test. When `start > end` the window wraps
/// past midnight and a time matches if it is `>= start` OR `<= end`.
/// This is evaluated on time-of-day alone and is unrelated to the
/// shift-day rollover applied during classification.
pub fn time_in_window(t: NaiveTime, start: NaiveTime, end: NaiveTime) -> bool {
    if start <= end {
        t >= start && t <= end
    } else {
        t >= start || t <= end
    }
}

/// Parse a "HH:MM-HH:MM" window expression from the CLI.
pub fn parse_window(raw: &str) -> AppResult<(NaiveTime, NaiveTime)> {
    let (a, b) = raw
        .split_once('-')
        .ok_or_else(|| AppError::InvalidWindow(raw.to_string()))?;
    let start = parse_time(a.trim()).ok_or_else(|| AppError::InvalidTime(a.trim().to_string()))?;
    let end = parse_time(b.trim()).ok_or_else(|| AppError::InvalidTime(b.trim().to_string()))?;
    Ok((start, end))
}
