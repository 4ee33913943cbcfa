mod error;
mod loader;

pub use error::ScheduleError;
pub use loader::load_schedule_str;

use crate::models::schedule::MilestoneSchedule;

/// Milestone table compiled into the binary.
const BUILTIN_TABLE: &str = include_str!("../../../config/milestones.toml");

impl MilestoneSchedule {
    /// The symposium timeline shipped with the application.
    pub fn builtin() -> Result<Self, ScheduleError> {
        load_schedule_str(BUILTIN_TABLE)
    }
}
