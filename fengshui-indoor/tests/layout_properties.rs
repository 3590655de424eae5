//! Property-based tests for indoor scoring.
//!
//! # Invariants tested
//!
//! - **Score range:** every component and overall score lies in `0..=100`.
//! - **Tally consistency:** element counts and energy tallies both sum to
//!   the number of placed items.
//! - **Advice:** every layout receives at least one recommendation.

use fengshui_indoor::{IndoorScorer, ItemCatalog, PlacedItem};
use proptest::prelude::*;

fn item_types() -> Vec<String> {
    ItemCatalog::standard()
        .iter()
        .map(|(key, _)| key.to_owned())
        .collect()
}

fn layouts() -> impl Strategy<Value = Vec<PlacedItem>> {
    prop::collection::vec(
        (prop::sample::select(item_types()), -10.0..10.0_f64, -10.0..10.0_f64),
        0..30,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (item_type, x, y))| PlacedItem::new(index.to_string(), item_type, x, y))
            .collect()
    })
}

fn rooms() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["bedroom", "living_room", "Office", "kitchen"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn scores_stay_in_range(items in layouts(), room in rooms()) {
        let analysis = IndoorScorer::default()
            .analyze(&items, room)
            .map_err(|error| TestCaseError::fail(error.to_string()))?;
        for score in [
            analysis.overall_score,
            analysis.element_balance,
            analysis.energy_score,
            analysis.spacial_score,
            analysis.functional_score,
        ] {
            prop_assert!(score <= 100);
        }
    }

    #[test]
    fn tallies_match_item_count(items in layouts(), room in rooms()) {
        let analysis = IndoorScorer::default()
            .analyze(&items, room)
            .map_err(|error| TestCaseError::fail(error.to_string()))?;
        let count = u32::try_from(items.len()).unwrap_or(u32::MAX);
        prop_assert_eq!(analysis.element_counts.total(), count);
        prop_assert_eq!(analysis.energy_balance.total(), count);
        prop_assert!(!analysis.recommendations.is_empty());
    }
}
