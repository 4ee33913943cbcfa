// Property-based tests for milestone selection and countdown arithmetic

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use symposium_countdown::models::countdown::CountdownState;
use symposium_countdown::models::milestone::Milestone;
use symposium_countdown::services::countdown::{compute_remaining, evaluate, select_next_milestone};

/// Seconds between 2024-01-01 and roughly 2030.
const SPAN: i64 = 6 * 366 * 86_400;

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (0..SPAN).prop_map(|offset| epoch() + Duration::seconds(offset))
}

fn milestones() -> impl Strategy<Value = Vec<Milestone>> {
    prop::collection::vec(instant(), 1..12).prop_map(|instants| {
        instants
            .into_iter()
            .enumerate()
            .map(|(i, at)| Milestone::new(format!("M{i}"), at).unwrap())
            .collect()
    })
}

proptest! {
    /// Property: before the earliest milestone, the earliest one is selected
    #[test]
    fn prop_before_earliest_selects_earliest(
        table in milestones(),
        lead in 1..(30 * 86_400i64),
    ) {
        let earliest = table.iter().map(|m| m.at).min().unwrap();
        let now = earliest - Duration::seconds(lead);
        let selected = select_next_milestone(&table, now).unwrap();
        prop_assert_eq!(selected.at, earliest);
    }

    /// Property: at or after the last milestone, nothing is selected and the state is zero
    #[test]
    fn prop_after_last_selects_nothing(
        table in milestones(),
        lag in 0..(30 * 86_400i64),
    ) {
        let latest = table.iter().map(|m| m.at).max().unwrap();
        let snapshot = evaluate(&table, latest + Duration::seconds(lag));
        prop_assert!(snapshot.selected.is_none());
        prop_assert_eq!(snapshot.remaining, CountdownState::ZERO);
    }

    /// Property: the selection is upcoming and no other upcoming milestone is earlier
    #[test]
    fn prop_selection_is_nearest_future(table in milestones(), now in instant()) {
        if let Some(selected) = select_next_milestone(&table, now) {
            prop_assert!(selected.at > now);
            prop_assert!(table.iter().filter(|m| m.at > now).all(|m| m.at >= selected.at));
        } else {
            prop_assert!(table.iter().all(|m| m.at <= now));
        }
    }

    /// Property: unit components stay in range and sum back to the total
    #[test]
    fn prop_units_in_range(target in instant(), now in instant()) {
        let state = compute_remaining(target, now);
        prop_assert!(state.hours <= 23);
        prop_assert!(state.minutes <= 59);
        prop_assert!(state.seconds <= 59);

        let expected = (target - now).num_seconds().max(0) as u64;
        prop_assert_eq!(state.total_seconds(), expected);
    }

    /// Property: evaluating twice gives the same answer
    #[test]
    fn prop_evaluation_is_idempotent(table in milestones(), now in instant()) {
        prop_assert_eq!(evaluate(&table, now), evaluate(&table, now));
    }

    /// Property: input order does not change which instant is selected
    #[test]
    fn prop_order_independent(table in milestones(), now in instant()) {
        let mut reversed = table.clone();
        reversed.reverse();
        let forward = select_next_milestone(&table, now).map(|m| m.at);
        let backward = select_next_milestone(&reversed, now).map(|m| m.at);
        prop_assert_eq!(forward, backward);
    }
}
