// Date utility functions
// Parsing and formatting of milestone timestamps

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Formats accepted for zone-less timestamps, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const SHORT_DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("'{0}' is not a YYYY-MM-DDTHH:MM:SS timestamp")]
    Malformed(String),
    #[error("{0} does not exist in the schedule timezone")]
    Nonexistent(NaiveDateTime),
}

/// Timezone a milestone table is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleZone {
    /// Whatever zone the host is configured with.
    #[default]
    Local,
    Named(Tz),
}

impl ScheduleZone {
    /// Looks up an IANA zone name such as `Asia/Kolkata`.
    pub fn from_name(name: &str) -> Option<Self> {
        name.trim().parse::<Tz>().ok().map(Self::Named)
    }

    /// Pins a wall-clock time in this zone to an absolute instant.
    ///
    /// Times skipped by a DST jump are rejected. Times repeated by a DST
    /// fold resolve to the earlier instant.
    pub fn resolve(self, naive: NaiveDateTime) -> Result<DateTime<Utc>, TimestampError> {
        match self {
            Self::Local => pick_instant(Local.from_local_datetime(&naive), naive),
            Self::Named(tz) => pick_instant(tz.from_local_datetime(&naive), naive),
        }
    }

    /// Formats an instant as a short date in this zone, e.g. `Jan 15, 2026`.
    pub fn format_short_date(self, at: DateTime<Utc>) -> String {
        match self {
            Self::Local => at.with_timezone(&Local).format(SHORT_DATE_FORMAT).to_string(),
            Self::Named(tz) => at.with_timezone(&tz).format(SHORT_DATE_FORMAT).to_string(),
        }
    }
}

fn pick_instant<T: TimeZone>(
    result: LocalResult<DateTime<T>>,
    naive: NaiveDateTime,
) -> Result<DateTime<Utc>, TimestampError> {
    match result {
        LocalResult::Single(at) => Ok(at.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(TimestampError::Nonexistent(naive)),
    }
}

/// Parses an ISO-8601-like timestamp into an absolute instant.
///
/// Strings carrying an offset (RFC 3339) are taken as-is. Anything else is
/// read as wall-clock time in `zone`.
///
/// A bare `YYYY-MM-DD` is midnight on that date in `zone`, the same as
/// `YYYY-MM-DDT00:00:00`. It is not UTC midnight, which is how the
/// JavaScript `Date` constructor reads date-only strings; write
/// `2026-01-15T00:00:00Z` to pin a date to UTC.
pub fn parse_timestamp(value: &str, zone: ScheduleZone) -> Result<DateTime<Utc>, TimestampError> {
    let trimmed = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.with_timezone(&Utc));
    }

    let naive = parse_naive(trimmed).ok_or_else(|| TimestampError::Malformed(trimmed.to_string()))?;
    zone.resolve(naive)
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
