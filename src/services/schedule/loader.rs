use serde::Deserialize;

use super::error::ScheduleError;
use crate::models::milestone::Milestone;
use crate::models::schedule::{EventDetails, MilestoneSchedule};
use crate::utils::date::{parse_timestamp, ScheduleZone};

/// On-disk shape of a milestone table, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScheduleFile {
    timezone: Option<String>,
    event_start_label: Option<String>,
    #[serde(default)]
    event: EventDetails,
    #[serde(default)]
    milestones: Vec<MilestoneEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MilestoneEntry {
    label: String,
    date: String,
}

/// Parses and validates a TOML milestone table.
///
/// Every timestamp is pinned to an absolute instant here; a single bad entry
/// rejects the whole table.
pub fn load_schedule_str(source: &str) -> Result<MilestoneSchedule, ScheduleError> {
    let file: ScheduleFile = toml::from_str(source)?;

    let zone = match file.timezone.as_deref() {
        Some(name) => ScheduleZone::from_name(name)
            .ok_or_else(|| ScheduleError::UnknownTimezone(name.to_string()))?,
        None => ScheduleZone::Local,
    };

    let mut milestones = Vec::with_capacity(file.milestones.len());
    for (offset, entry) in file.milestones.into_iter().enumerate() {
        let index = offset + 1;
        let at = parse_timestamp(&entry.date, zone).map_err(|source| {
            ScheduleError::InvalidTimestamp {
                index,
                label: entry.label.clone(),
                source,
            }
        })?;
        let milestone =
            Milestone::new(entry.label, at).map_err(|_| ScheduleError::EmptyLabel { index })?;
        milestones.push(milestone);
    }

    let mut schedule = MilestoneSchedule::new(milestones, zone).with_details(file.event);

    if let Some(label) = file.event_start_label {
        let label = label.trim().to_string();
        schedule = schedule.with_event_start_label(label);
        if schedule.event_start().is_none() {
            log::warn!(
                "Event start milestone '{}' is not in the table; falling back to the default start date",
                schedule.event_start_label().unwrap_or_default()
            );
        }
    }

    log::debug!(
        "Loaded {} milestone(s) in {:?}",
        schedule.milestones().len(),
        schedule.zone()
    );

    Ok(schedule)
}
