// Schedule module
// Validated milestone table plus the static event details shown beside it

use serde::{Deserialize, Serialize};

use super::milestone::Milestone;
use crate::utils::date::ScheduleZone;

/// Static facts about the event shown in the hero banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDetails {
    pub title: String,
    pub subtitle: String,
    pub host: String,
    pub dates: String,
    pub venue: String,
    pub participants: String,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            title: "18th Symposium on Earthquake Engineering".to_string(),
            subtitle: "Department of Earthquake Engineering".to_string(),
            host: "Indian Institute of Technology Roorkee".to_string(),
            dates: "December 10–12, 2026".to_string(),
            venue: "IIT Roorkee, Uttarakhand".to_string(),
            participants: "500+ Participants Expected".to_string(),
        }
    }
}

/// The milestone table handed to the countdown, already normalized to UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneSchedule {
    milestones: Vec<Milestone>,
    zone: ScheduleZone,
    event_start_label: Option<String>,
    details: EventDetails,
}

impl MilestoneSchedule {
    pub fn new(milestones: Vec<Milestone>, zone: ScheduleZone) -> Self {
        Self {
            milestones,
            zone,
            event_start_label: None,
            details: EventDetails::default(),
        }
    }

    /// Names the milestone that marks the start of the event itself.
    pub fn with_event_start_label(mut self, label: impl Into<String>) -> Self {
        self.event_start_label = Some(label.into());
        self
    }

    pub fn with_details(mut self, details: EventDetails) -> Self {
        self.details = details;
        self
    }

    /// Milestones in configured order (not necessarily chronological).
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn zone(&self) -> ScheduleZone {
        self.zone
    }

    pub fn details(&self) -> &EventDetails {
        &self.details
    }

    pub fn event_start_label(&self) -> Option<&str> {
        self.event_start_label.as_deref()
    }

    /// The event-start milestone, if the table has one.
    pub fn event_start(&self) -> Option<&Milestone> {
        let label = self.event_start_label.as_deref()?;
        self.milestones.iter().find(|milestone| milestone.label == label)
    }

    pub fn is_event_start(&self, milestone: &Milestone) -> bool {
        self.event_start_label.as_deref() == Some(milestone.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }
}
