//! Nearest-milestone selection and remaining-time arithmetic.
//!
//! Everything here is a pure function of `(milestones, now)`; the refresh
//! driver owns the clock and the timer.

use chrono::{DateTime, Utc};

use crate::models::countdown::{CountdownSnapshot, CountdownState};
use crate::models::milestone::Milestone;

/// Picks the earliest milestone strictly after `now`.
///
/// Milestones may arrive in any order. When two share the earliest
/// timestamp, the one listed first wins.
pub fn select_next_milestone(milestones: &[Milestone], now: DateTime<Utc>) -> Option<&Milestone> {
    milestones
        .iter()
        .filter(|milestone| milestone.is_upcoming(now))
        .min_by_key(|milestone| milestone.at)
}

/// Time from `now` until `target` in whole seconds, split into units.
/// A target at or before `now` gives an all-zero state.
pub fn compute_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> CountdownState {
    CountdownState::from_total_seconds(target.signed_duration_since(now).num_seconds())
}

pub fn evaluate(milestones: &[Milestone], now: DateTime<Utc>) -> CountdownSnapshot {
    match select_next_milestone(milestones, now) {
        Some(milestone) => CountdownSnapshot {
            remaining: compute_remaining(milestone.at, now),
            selected: Some(milestone.clone()),
        },
        None => CountdownSnapshot::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn milestone(label: &str, when: DateTime<Utc>) -> Milestone {
        Milestone::new(label, when).unwrap()
    }

    fn two_milestones() -> Vec<Milestone> {
        vec![
            milestone("A", at(2026, 1, 15, 0, 0, 0)),
            milestone("B", at(2026, 3, 15, 0, 0, 0)),
        ]
    }

    #[test]
    fn one_hour_before_first_milestone() {
        let snapshot = evaluate(&two_milestones(), at(2026, 1, 14, 23, 0, 0));

        assert_eq!(snapshot.selected.unwrap().label, "A");
        assert_eq!(
            snapshot.remaining,
            CountdownState {
                days: 0,
                hours: 1,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn one_second_after_first_moves_to_second() {
        let table = two_milestones();
        let selected = select_next_milestone(&table, at(2026, 1, 15, 0, 0, 1));
        assert_eq!(selected.unwrap().label, "B");
    }

    #[test]
    fn exactly_at_milestone_is_not_upcoming() {
        let table = two_milestones();
        let selected = select_next_milestone(&table, at(2026, 1, 15, 0, 0, 0));
        assert_eq!(selected.unwrap().label, "B");
    }

    #[test]
    fn after_all_milestones_nothing_selected() {
        let snapshot = evaluate(&two_milestones(), at(2026, 3, 15, 0, 0, 0));
        assert!(snapshot.selected.is_none());
        assert!(snapshot.remaining.is_zero());
    }

    #[test]
    fn empty_table_selects_nothing() {
        assert_eq!(evaluate(&[], at(2026, 1, 1, 0, 0, 0)), CountdownSnapshot::default());
    }

    #[test]
    fn order_of_input_does_not_matter() {
        let mut reversed = two_milestones();
        reversed.reverse();
        let now = at(2025, 6, 1, 0, 0, 0);
        assert_eq!(select_next_milestone(&reversed, now).unwrap().label, "A");
    }

    #[test]
    fn tie_goes_to_first_listed() {
        let when = at(2026, 1, 15, 0, 0, 0);
        let tied = vec![milestone("first", when), milestone("second", when)];
        let selected = select_next_milestone(&tied, at(2026, 1, 1, 0, 0, 0));
        assert_eq!(selected.unwrap().label, "first");
    }

    #[test]
    fn past_target_clamps_to_zero() {
        let target = at(2026, 1, 15, 0, 0, 0);
        assert!(compute_remaining(target, target).is_zero());
        assert!(compute_remaining(target, target + Duration::hours(3)).is_zero());
    }

    #[test]
    fn sub_second_remainder_is_dropped() {
        let target = at(2026, 1, 15, 0, 0, 0);
        let now = target - Duration::milliseconds(1500);
        assert_eq!(compute_remaining(target, now).seconds, 1);
        assert!(compute_remaining(target, target - Duration::milliseconds(400)).is_zero());
    }

    #[test]
    fn multi_day_breakdown() {
        let target = at(2026, 12, 10, 9, 0, 0);
        let now = at(2026, 10, 19, 7, 30, 15);
        assert_eq!(
            compute_remaining(target, now),
            CountdownState {
                days: 52,
                hours: 1,
                minutes: 29,
                seconds: 45
            }
        );
    }

    #[test]
    fn evaluation_is_repeatable() {
        let milestones = two_milestones();
        let now = at(2025, 12, 31, 12, 34, 56);
        assert_eq!(evaluate(&milestones, now), evaluate(&milestones, now));
    }
}
