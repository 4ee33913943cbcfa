use chrono::{DateTime, Utc};
use serde::Serialize;

use super::calculator::compute_remaining;
use crate::models::countdown::{CountdownState, CountdownUrgency, WarningThresholds};
use crate::models::milestone::Milestone;
use crate::models::schedule::MilestoneSchedule;

pub const EVENT_START_HEADING: &str = "Conference Starts In";
pub const GENERIC_HEADING: &str = "Event Starts In";
/// Shown in the footer when the table has no event-start milestone.
pub const FALLBACK_EVENT_START_DATE: &str = "Dec 10, 2026";

/// One rendered frame of the hero countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownDisplay {
    pub heading: String,
    pub milestone_label: Option<String>,
    pub milestone_date: Option<String>,
    pub state: CountdownState,
    pub urgency: CountdownUrgency,
    pub event_start_date: String,
}

impl CountdownDisplay {
    /// Builds the frame for `selected` as seen at `now`.
    pub fn build(
        schedule: &MilestoneSchedule,
        selected: Option<&Milestone>,
        now: DateTime<Utc>,
        thresholds: &WarningThresholds,
    ) -> Self {
        let zone = schedule.zone();
        let event_start_date = schedule
            .event_start()
            .map(|start| zone.format_short_date(start.at))
            .unwrap_or_else(|| FALLBACK_EVENT_START_DATE.to_string());

        let Some(milestone) = selected else {
            return Self {
                heading: GENERIC_HEADING.to_string(),
                milestone_label: None,
                milestone_date: None,
                state: CountdownState::ZERO,
                urgency: CountdownUrgency::Starting,
                event_start_date,
            };
        };

        let remaining_seconds = milestone.at.signed_duration_since(now).num_seconds();
        Self {
            heading: heading_for(schedule, Some(milestone)),
            milestone_label: Some(milestone.label.clone()),
            milestone_date: Some(zone.format_short_date(milestone.at)),
            state: compute_remaining(milestone.at, now),
            urgency: CountdownUrgency::from_remaining_seconds(remaining_seconds, thresholds),
            event_start_date,
        }
    }

    pub fn footer(&self) -> String {
        format!("Conference start: {}", self.event_start_date)
    }

    /// Unit values padded to two digits, e.g. `("hours", "07")`.
    pub fn padded_units(&self) -> [(&'static str, String); 4] {
        self.state.units().map(|(unit, value)| (unit, format!("{value:02}")))
    }
}

pub fn heading_for(schedule: &MilestoneSchedule, selected: Option<&Milestone>) -> String {
    match selected {
        Some(milestone) if schedule.is_event_start(milestone) => EVENT_START_HEADING.to_string(),
        Some(milestone) => format!("Next: {}", milestone.label),
        None => GENERIC_HEADING.to_string(),
    }
}
