// Countdown module
// Remaining-time values derived from the selected milestone

use serde::{Deserialize, Serialize};

use super::milestone::Milestone;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Time left until a milestone, split into display units.
///
/// Hours, minutes and seconds stay within a day/hour/minute; days are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl CountdownState {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a whole-second duration. Zero or negative input yields [`Self::ZERO`].
    pub fn from_total_seconds(total: i64) -> Self {
        let Ok(total) = u64::try_from(total) else {
            return Self::ZERO;
        };

        let remainder = total % SECONDS_PER_DAY;
        Self {
            days: total / SECONDS_PER_DAY,
            // Each remainder is below 24/60/60, so the narrowing casts are lossless.
            hours: (remainder / SECONDS_PER_HOUR) as u8,
            minutes: (remainder % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
            seconds: (remainder % SECONDS_PER_MINUTE) as u8,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + u64::from(self.hours) * SECONDS_PER_HOUR
            + u64::from(self.minutes) * SECONDS_PER_MINUTE
            + u64::from(self.seconds)
    }

    /// Unit name and value pairs in display order.
    pub fn units(&self) -> [(&'static str, u64); 4] {
        [
            ("days", self.days),
            ("hours", u64::from(self.hours)),
            ("minutes", u64::from(self.minutes)),
            ("seconds", u64::from(self.seconds)),
        ]
    }
}

/// Urgency of the selected milestone based on time remaining
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CountdownUrgency {
    /// More than the approaching threshold remaining
    Normal,
    /// Within the approaching threshold (default: 1 day)
    Approaching,
    /// Within the imminent threshold (default: 1 hour)
    Imminent,
    /// Within the critical threshold (default: 5 minutes)
    Critical,
    /// Milestone reached, or nothing left to count down to
    Starting,
}

impl Default for CountdownUrgency {
    fn default() -> Self {
        Self::Normal
    }
}

impl CountdownUrgency {
    pub fn from_remaining_seconds(remaining: i64, thresholds: &WarningThresholds) -> Self {
        if remaining <= 0 {
            Self::Starting
        } else if remaining <= i64::from(thresholds.critical_minutes) * 60 {
            Self::Critical
        } else if remaining <= i64::from(thresholds.imminent_hours) * 3600 {
            Self::Imminent
        } else if remaining <= i64::from(thresholds.approaching_hours) * 3600 {
            Self::Approaching
        } else {
            Self::Normal
        }
    }
}

/// Thresholds for the different urgency levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningThresholds {
    /// Hours before the milestone to enter "approaching" (default: 24)
    pub approaching_hours: u32,
    /// Hours before the milestone to enter "imminent" (default: 1)
    pub imminent_hours: u32,
    /// Minutes before the milestone to enter "critical" (default: 5)
    pub critical_minutes: u32,
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            approaching_hours: 24,
            imminent_hours: 1,
            critical_minutes: 5,
        }
    }
}

impl WarningThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if self.imminent_hours > self.approaching_hours {
            return Err("imminent_hours must not exceed approaching_hours".to_string());
        }
        if u64::from(self.critical_minutes) > u64::from(self.imminent_hours) * 60 {
            return Err("critical_minutes must not exceed imminent_hours".to_string());
        }
        Ok(())
    }
}

/// Result of one calculator pass: the chosen milestone and what is left of it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CountdownSnapshot {
    pub selected: Option<Milestone>,
    pub remaining: CountdownState,
}
