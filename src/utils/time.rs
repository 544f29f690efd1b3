//! Time-related utility functions for rendering temporal column values.
//!
//! MySQL `DATETIME` and `TIMESTAMP` values carry no offset. sqlx pins the session
//! time zone to UTC, so both are rendered as RFC 3339 with a `Z` offset.

use time::format_description::well_known::Rfc3339;
use sqlx::mysql::types::MySqlTime;
use time::PrimitiveDateTime;

/// Formats a datetime column value as an RFC 3339 UTC string.
///
/// # Example
///
/// ```
/// use notes_app::utils::time::format_timestamp;
/// use time::{Date, Month, PrimitiveDateTime, Time};
///
/// let date = Date::from_calendar_date(2024, Month::March, 5).unwrap();
/// let dt = PrimitiveDateTime::new(date, Time::from_hms(9, 30, 0).unwrap());
/// assert_eq!(format_timestamp(dt).unwrap(), "2024-03-05T09:30:00Z");
/// ```
pub fn format_timestamp(date_time: PrimitiveDateTime) -> Result<String, time::error::Format> {
    date_time.assume_utc().format(&Rfc3339)
}

/// Formats a `TIME` column value the way MySQL prints it: `[-]HH:MM:SS`, with
/// microseconds when non-zero. Hours may exceed 23.
pub fn format_duration(time: &MySqlTime) -> String {
    let sign = if time.is_negative() { "-" } else { "" };
    let mut out = format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        time.hours(),
        time.minutes(),
        time.seconds()
    );
    if time.microseconds() != 0 {
        out.push_str(&format!(".{:06}", time.microseconds()));
    }
    out
}
