//! Property tests for index selection (pure domain).
//!
//! Properties tested:
//! - The published index never exceeds the method cap
//! - The asterisk appears exactly when the sample is insufficient
//! - An empty result happens only when no non-zero differential exists
//! - Rounds older than the window never change the result

use proptest::prelude::*;

use crate::domain::index::{compute_index, parse_index, Method};
use crate::domain::tables::num_differentials_to_use;
use crate::domain::{test_gens, test_prelude};

fn methods() -> impl Strategy<Value = Method> {
    prop_oneof![Just(Method::Usga), Just(Method::Roch)]
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the index never exceeds the method cap, no matter how
    /// pathological the differentials are.
    #[test]
    fn prop_index_respects_cap(
        records in test_gens::differential_history(40),
        method in methods(),
    ) {
        let formatted = compute_index(&records, method);
        if let Some(value) = parse_index(&formatted) {
            prop_assert!(value <= method.cap(),
                "index {value} exceeds cap {}", method.cap());
        }
    }

    /// Property: the marker tracks the sample size exactly.
    #[test]
    fn prop_marker_tracks_sample_size(
        records in test_gens::differential_history(40),
        method in methods(),
    ) {
        let formatted = compute_index(&records, method);
        if formatted.is_empty() {
            let usable = records.iter().filter(|d| d.value != 0.0).count();
            prop_assert_eq!(usable, 0, "empty result despite usable differentials");
            return Ok(());
        }

        let n = records
            .iter()
            .filter(|d| d.value != 0.0)
            .count()
            .min(method.window());
        let insufficient = n < 3 || num_differentials_to_use(n, method) < 3;
        prop_assert_eq!(formatted.ends_with('*'), insufficient);
    }

    /// Property: a round strictly older than everything inside the window
    /// never changes the published index.
    #[test]
    fn prop_rounds_outside_window_are_inert(
        values in prop::collection::vec(1.0f64..60.0, 20..=30),
        stale in 1.0f64..60.0,
    ) {
        // Consecutive dates, oldest first, with one extra round predating
        // them all. The window (20) is already full without it.
        let start = time::Date::from_ordinal_date(2024, 100).unwrap();
        let dated = |offset: i64, value: f64| crate::domain::index::DatedDifferential {
            date: start + time::Duration::days(offset),
            value,
        };

        let records: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| dated(i as i64, v))
            .collect();
        let mut with_stale = vec![dated(-50, stale)];
        with_stale.extend(records.iter().copied());

        prop_assert_eq!(
            compute_index(&records, Method::Usga),
            compute_index(&with_stale, Method::Usga)
        );
    }
}
