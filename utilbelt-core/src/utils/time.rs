//! Date and Time Formatting Utilities.
//!
//! Small `chrono`-based helpers for rendering dates the way report headers,
//! export filenames and audit columns expect them:
//!
//! - [`date_parts()`]: splits a date-time into zero-padded display fields.
//! - [`timestamp()`]: `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`.
//! - [`convert_to_eastern()`]: re-renders a GMT wall-clock string as US Eastern
//!   time in en-US 12-hour notation.
//!
//! The `*_now` variants use the local clock.

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
    Weekday,
};
use serde::Serialize;

use crate::error::CoreError;

/// Accepted layouts for a GMT date-time string, tried in order.
const GMT_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts; the time is taken as midnight GMT.
const GMT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// en-US numeric date with a 12-hour clock, e.g. `1/15/2024, 5:30:00 AM`.
const EN_US_DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const EASTERN_STANDARD_HOURS_WEST: i32 = 5;
const EASTERN_DAYLIGHT_HOURS_WEST: i32 = 4;

/// Display fields of a date-time, zero-padded to two digits where applicable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateParts {
    pub year: i32,
    /// `01`–`12`.
    pub month: String,
    /// Day of month, `01`–`31`.
    pub date: String,
    /// `HH:MM`, 24-hour clock.
    pub time: String,
    /// `00`–`59`.
    pub seconds: String,
}

/// Splits `dt` into its [`DateParts`].
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use utilbelt_core::utils::time::date_parts;
///
/// let dt = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 7, 3).unwrap();
/// let parts = date_parts(&dt);
/// assert_eq!(parts.month, "03");
/// assert_eq!(parts.time, "09:07");
/// assert_eq!(parts.seconds, "03");
/// ```
pub fn date_parts<T: Datelike + Timelike>(dt: &T) -> DateParts {
    DateParts {
        year: dt.year(),
        month: format!("{:02}", dt.month()),
        date: format!("{:02}", dt.day()),
        time: format!("{:02}:{:02}", dt.hour(), dt.minute()),
        seconds: format!("{:02}", dt.second()),
    }
}

/// [`date_parts`] for the current local time.
pub fn date_parts_now() -> DateParts {
    date_parts(&Local::now())
}

/// Formats `dt` as `YYYY-MM-DD`, followed by ` HH:MM:SS` when `include_time` is set.
pub fn timestamp<T: Datelike + Timelike>(dt: &T, include_time: bool) -> String {
    let parts = date_parts(dt);
    let day = format!("{}-{}-{}", parts.year, parts.month, parts.date);
    if include_time {
        format!("{} {}:{}", day, parts.time, parts.seconds)
    } else {
        day
    }
}

/// [`timestamp`] for the current local time.
pub fn timestamp_now(include_time: bool) -> String {
    timestamp(&Local::now(), include_time)
}

/// Parses a GMT wall-clock string in one of the accepted layouts.
pub fn parse_gmt(input: &str) -> Result<DateTime<Utc>, CoreError> {
    let trimmed = input.trim();

    let naive = GMT_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            GMT_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| CoreError::InvalidDate {
            input: input.to_string(),
        })?;

    Ok(Utc.from_utc_datetime(&naive))
}

/// UTC instant of `hour:00` on the `n`th Sunday of `month`.
fn nth_sunday_at(year: i32, month: u32, n: u8, hour: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Sun, n)?.and_hms_opt(hour, 0, 0)
}

/// UTC offset of America/New_York at `utc`, under the post-2007 US rule:
/// daylight time from the second Sunday of March 02:00 EST until the first
/// Sunday of November 02:00 EDT.
fn eastern_offset(utc: &DateTime<Utc>) -> Option<FixedOffset> {
    let instant = utc.naive_utc();
    let year = instant.year();
    let dst_start = nth_sunday_at(year, 3, 2, 2 + EASTERN_STANDARD_HOURS_WEST as u32)?;
    let dst_end = nth_sunday_at(year, 11, 1, 2 + EASTERN_DAYLIGHT_HOURS_WEST as u32)?;

    let hours_west = if instant >= dst_start && instant < dst_end {
        EASTERN_DAYLIGHT_HOURS_WEST
    } else {
        EASTERN_STANDARD_HOURS_WEST
    };
    FixedOffset::west_opt(hours_west * 3600)
}

/// Converts a UTC instant to US Eastern local time.
pub fn to_eastern(utc: &DateTime<Utc>) -> Result<DateTime<FixedOffset>, CoreError> {
    let offset = eastern_offset(utc).ok_or_else(|| {
        CoreError::Internal(format!("no Eastern offset for {}", utc))
    })?;
    Ok(utc.with_timezone(&offset))
}

/// Interprets `date` as GMT and renders it in US Eastern time, en-US style.
///
/// # Errors
/// Returns [`CoreError::InvalidDate`] if `date` matches none of the accepted layouts.
///
/// # Examples
/// ```
/// use utilbelt_core::utils::time::convert_to_eastern;
///
/// assert_eq!(convert_to_eastern("2024-01-15 10:30:00").unwrap(), "1/15/2024, 5:30:00 AM");
/// assert_eq!(convert_to_eastern("2024-07-04 16:00:00").unwrap(), "7/4/2024, 12:00:00 PM");
/// assert!(convert_to_eastern("yesterday").is_err());
/// ```
pub fn convert_to_eastern(date: &str) -> Result<String, CoreError> {
    let utc = parse_gmt(date)?;
    let eastern = to_eastern(&utc)?;
    Ok(eastern.format(EN_US_DATETIME_FORMAT).to_string())
}
