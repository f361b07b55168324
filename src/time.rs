//! Time / Date Helpers
//!
//! Conversions between local calendar dates and UTC instants, plus the
//! display formats used by chore cards.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Medium date style with short time style, e.g. `Jun 1, 2024, 11:59 PM`
const LOCAL_DATE_TIME_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

/// Value rendered for timestamps that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// ISO forms without an offset, read as local wall-clock time
const LOCAL_ISO_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a server timestamp; offset-less ISO values count as local time
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    parse_instant_in(value, &Local)
}

pub fn parse_instant_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    LOCAL_ISO_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Render a server timestamp in the viewer's local timezone
pub fn format_local_date_time(instant: &str) -> String {
    format_local_date_time_in(instant, &Local)
}

pub fn format_local_date_time_in<Tz>(instant: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_instant_in(instant, tz) {
        Some(dt) => dt
            .with_timezone(tz)
            .format(LOCAL_DATE_TIME_FORMAT)
            .to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Parse the `YYYY-MM-DD` value produced by a date input
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// End of `date` (23:59:59.999) in the local timezone, serialized as UTC
///
/// Returns `None` only when that local wall-clock time does not exist.
pub fn normalize_due_date(date: NaiveDate) -> Option<String> {
    normalize_due_date_in(date, &Local)
}

/// End of `date` in `tz`, serialized as UTC with millisecond precision
///
/// An ambiguous local time (DST fold) resolves to the earlier instant.
pub fn normalize_due_date_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<String> {
    let end_of_day = date.and_hms_milli_opt(23, 59, 59, 999)?;
    let local = tz.from_local_datetime(&end_of_day).earliest()?;

    Some(
        local
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Format a non-negative duration as `{d}d {h}h {m}m {s}s`
pub fn format_duration(ms: u64) -> String {
    let total_seconds = ms / 1000;

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
}
