use chrono::{DateTime, Local, Offset, TimeZone};
use std::time::SystemTime;

/// Placeholder shown when a timestamp is not available.
pub const MISSING: &str = "-";

/// Format as RFC 822 (`02 Jan 06 15:04 MST`).
///
/// `Local` carries no zone abbreviation, so a zero offset prints `UTC` and
/// anything else prints the numeric offset (`+0100`).
pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let zone = if dt.offset().fix().local_minus_utc() == 0 {
        "UTC".to_string()
    } else {
        dt.format("%z").to_string()
    };
    format!("{} {}", dt.format("%d %b %y %H:%M"), zone)
}

#[must_use]
pub fn format_system_time(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    format_timestamp(&local)
}
