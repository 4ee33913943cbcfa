// Milestone module
// A named point in the event timeline

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A named deadline or event in the symposium timeline.
///
/// Only [`Milestone::new`] builds one, so every value carries a non-empty
/// label. Milestone tables are read through the schedule loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Milestone {
    pub label: String,
    pub at: DateTime<Utc>,
}

impl Milestone {
    /// Create a milestone. The label is trimmed and must not be empty.
    ///
    /// # Examples
    /// ```
    /// use symposium_countdown::models::milestone::Milestone;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let at = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
    /// let milestone = Milestone::new("Full-length manuscript submission", at).unwrap();
    /// assert!(Milestone::new("   ", at).is_err());
    /// ```
    pub fn new(label: impl Into<String>, at: DateTime<Utc>) -> Result<Self, String> {
        let label = label.into();
        let trimmed = label.trim();

        if trimmed.is_empty() {
            return Err("Milestone label cannot be empty".to_string());
        }

        Ok(Self {
            label: trimmed.to_string(),
            at,
        })
    }

    /// True when the milestone lies strictly after `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.at > now
    }
}
