//! Civil date/time resolution to absolute UTC instants.
//!
//! Birth data arrives as a calendar date, a wall-clock time, and a zone
//! label (IANA name like `America/New_York` or a fixed abbreviation like
//! `EST`). Resolution applies the daylight-saving rules in force on the
//! historical date in question, not today's rules.

use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::error::TimeError;

/// Fixed-offset zone abbreviations accepted in addition to IANA names.
///
/// Offsets are seconds east of Greenwich. Abbreviations carry their own
/// DST-ness (EDT is already the summer offset), so no further rule lookup
/// applies.
const ZONE_ABBREVIATIONS: [(&str, i32); 16] = [
    ("UTC", 0),
    ("GMT", 0),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
    ("BST", 3600),
    ("CET", 3600),
    ("CEST", 2 * 3600),
    ("IST", 5 * 3600 + 1800),
    ("JST", 9 * 3600),
    ("AEST", 10 * 3600),
];

/// Resolve a civil date, time, and zone label to a UTC instant.
///
/// - `date`: `YYYY-MM-DD`
/// - `time`: `HH:MM` or `HH:MM:SS`
/// - `zone`: IANA zone name or one of [`ZONE_ABBREVIATIONS`]
///
/// An unknown zone label degrades to UTC+0 with a logged warning; it is
/// never surfaced as an error. Times inside a spring-forward gap resolve
/// to the first valid instant after the gap; ambiguous fall-back times
/// take the earlier offset.
pub fn resolve_utc_instant(date: &str, time: &str, zone: &str) -> Result<DateTime<Utc>, TimeError> {
    let naive_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(date.to_string()))?;
    let naive_time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| TimeError::InvalidTime(time.to_string()))?;
    let naive = naive_date.and_time(naive_time);

    if let Ok(tz) = zone.parse::<Tz>() {
        return Ok(local_to_utc(&tz, naive));
    }

    if let Some(&(_, secs)) = ZONE_ABBREVIATIONS.iter().find(|(name, _)| *name == zone) {
        // east_opt only fails outside +/-24h; the table is well within range
        if let Some(offset) = FixedOffset::east_opt(secs) {
            return Ok(local_to_utc(&offset, naive));
        }
    }

    warn!(zone, "unknown timezone label, treating civil time as UTC");
    Ok(Utc.from_utc_datetime(&naive))
}

/// Map a naive local time into UTC under a zone's rules.
///
/// Spring-forward gaps advance in 1-minute steps until the time exists;
/// fall-back ambiguity picks the earlier instant.
fn local_to_utc<Z: TimeZone>(tz: &Z, naive: chrono::NaiveDateTime) -> DateTime<Utc> {
    let mut probe = naive;
    loop {
        match tz.from_local_datetime(&probe) {
            LocalResult::Single(dt) => return dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earlier, _later) => return earlier.with_timezone(&Utc),
            LocalResult::None => {
                // inside a DST gap
                probe += Duration::minutes(1);
            }
        }
    }
}
