// Test fixtures - reusable test data
// Provides consistent milestone tables across test files
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use symposium_countdown::models::milestone::Milestone;
use symposium_countdown::models::schedule::MilestoneSchedule;
use symposium_countdown::utils::date::ScheduleZone;

/// Sample instants for testing
pub mod dates {
    use super::*;

    pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    /// Returns Jan 15, 2026 at midnight (milestone "A")
    pub fn milestone_a() -> DateTime<Utc> {
        utc(2026, 1, 15, 0, 0, 0)
    }

    /// Returns Mar 15, 2026 at midnight (milestone "B")
    pub fn milestone_b() -> DateTime<Utc> {
        utc(2026, 3, 15, 0, 0, 0)
    }
}

/// Sample milestone tables
pub mod schedules {
    use super::*;

    pub fn two_milestones() -> Vec<Milestone> {
        vec![
            Milestone::new("A", dates::milestone_a()).unwrap(),
            Milestone::new("B", dates::milestone_b()).unwrap(),
        ]
    }

    /// The symposium timeline pinned to UTC so results do not depend on the host zone.
    pub const SYMPOSIUM_UTC: &str = r#"
        timezone = "UTC"
        event_start_label = "Symposium Start"

        [[milestones]]
        label = "Last date of receipt of abstract"
        date = "2025-12-15T00:00:00"

        [[milestones]]
        label = "Acceptance of abstracts"
        date = "2026-01-15T00:00:00"

        [[milestones]]
        label = "Full-length manuscript submission"
        date = "2026-03-15T00:00:00"

        [[milestones]]
        label = "Intimation of acceptance / Reviewer comments"
        date = "2026-04-30T00:00:00"

        [[milestones]]
        label = "Submission of final revised manuscripts"
        date = "2026-05-15T00:00:00"

        [[milestones]]
        label = "Symposium Start"
        date = "2026-12-10T09:00:00"
    "#;

    pub fn two_milestone_schedule() -> MilestoneSchedule {
        MilestoneSchedule::new(two_milestones(), ScheduleZone::Named(Tz::UTC))
    }
}
