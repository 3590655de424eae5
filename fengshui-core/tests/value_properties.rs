//! Property-based tests for the core value types.
//!
//! # Invariants tested
//!
//! - **Unit range:** every `FeatureVector` component lies in `0.0..=1.0`.
//! - **Score range:** category and element scores lie in `0.0..=100.0`.
//! - **Mean bounds:** the Five Elements mean lies between the weakest and
//!   strongest element.

use fengshui_core::{Category, CategoryScores, Element, FeatureVector, FiveElements};
use proptest::prelude::*;

fn any_float() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1_000.0..1_000.0_f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn feature_components_stay_in_unit_range(values in prop::array::uniform7(any_float())) {
        let vector = FeatureVector::new(values);
        for (_, value) in vector.iter() {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn category_scores_stay_in_range(values in prop::array::uniform7(any_float())) {
        let scores: CategoryScores = Category::ALL.into_iter().zip(values).collect();
        for (_, score) in scores.iter() {
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn element_mean_lies_between_extremes(values in prop::array::uniform5(any_float())) {
        let [wood, fire, earth, metal, water] = values;
        let elements = FiveElements::from_scores(wood, fire, earth, metal, water);
        let scores = Element::ALL.map(|element| elements.get(element));
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(elements.overall_score >= min - 1e-9);
        prop_assert!(elements.overall_score <= max + 1e-9);
    }
}
