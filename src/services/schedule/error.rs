use thiserror::Error;

use crate::utils::date::TimestampError;

/// Reasons a milestone table is refused at load time.
///
/// Milestone indexes are 1-based, matching the order of `[[milestones]]`
/// entries in the file.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("failed to parse milestone table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("milestone #{index}: label must not be empty")]
    EmptyLabel { index: usize },

    #[error("milestone #{index} ({label}): {source}")]
    InvalidTimestamp {
        index: usize,
        label: String,
        #[source]
        source: TimestampError,
    },
}
