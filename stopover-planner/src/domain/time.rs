//! Wire timestamp handling for the NAVITIME API.
//!
//! NAVITIME reports times as local Japan time, either as
//! `YYYY-MM-DDTHH:MM:SS+09:00` or without the offset suffix. Requests are
//! sent without an offset. All arithmetic happens on `NaiveDateTime`,
//! because every timestamp in one route shares the same fixed offset.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Format with the fixed Japan offset suffix, as returned by the API.
const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+09:00";

/// Format without an offset, used for requests and accepted on input.
const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error returned when parsing an invalid wire timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: expected YYYY-MM-DDTHH:MM:SS with optional +09:00")]
pub struct TimeError {
    input: String,
}

/// Parse a wire timestamp, preferring the `+09:00` form.
///
/// # Examples
///
/// ```
/// use stopover_planner::domain::parse_wire_time;
///
/// let with_offset = parse_wire_time("2020-01-01T09:30:00+09:00").unwrap();
/// let without = parse_wire_time("2020-01-01T09:30:00").unwrap();
/// assert_eq!(with_offset, without);
///
/// assert!(parse_wire_time("2020-01-01T09:30:00+01:00").is_err());
/// assert!(parse_wire_time("09:30").is_err());
/// ```
pub fn parse_wire_time(s: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(s, OFFSET_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, LOCAL_FORMAT))
        .map_err(|_| TimeError {
            input: s.to_string(),
        })
}

/// Format a timestamp for an outgoing request (no offset suffix).
pub fn format_wire_time(t: NaiveDateTime) -> String {
    t.format(LOCAL_FORMAT).to_string()
}

/// Whole minutes from `earlier` to `later`, rounded towards negative infinity.
///
/// A span of 59 seconds counts as 0 minutes; a span of -30 seconds counts
/// as -1 minute.
pub fn floor_minutes_between(later: NaiveDateTime, earlier: NaiveDateTime) -> i64 {
    later
        .signed_duration_since(earlier)
        .num_seconds()
        .div_euclid(60)
}

/// The start of the next travel day: the following calendar day at `hour`:00:00.
///
/// The time of day of `t` is discarded, so a day that ended late in the
/// evening and one that ended at noon both roll over to the same morning.
/// Returns `None` on date overflow or an hour outside 0-23.
pub fn next_day_start(t: NaiveDateTime, hour: u32) -> Option<NaiveDateTime> {
    let date: NaiveDate = t.date().checked_add_signed(Duration::days(1))?;
    let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
    Some(date.and_time(time))
}
