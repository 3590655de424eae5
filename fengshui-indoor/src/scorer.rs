//! Indoor layout scoring.

use std::collections::BTreeSet;

use fengshui_core::{Element, ElementCounts, Energy};
use serde::Serialize;
use thiserror::Error;

use crate::recommendations::{LayoutSummary, recommendations};
use crate::{ItemCatalog, PlacedItem, RoomType};

/// Energy score of an empty layout.
const EMPTY_ENERGY_SCORE: u32 = 50;

/// Yin and Yang item tallies; neutral items count as Yin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EnergyBalance {
    /// Yin and neutral items.
    pub yin: u32,
    /// Yang items.
    pub yang: u32,
}

impl EnergyBalance {
    /// Tally one item of `energy`.
    pub const fn add(&mut self, energy: Energy) {
        match energy {
            Energy::Yang => self.yang = self.yang.saturating_add(1),
            Energy::Yin | Energy::Neutral => self.yin = self.yin.saturating_add(1),
        }
    }

    /// Total tallied items.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.yin.saturating_add(self.yang)
    }

    /// Report whether the Yang share exceeds `tenths / 10`.
    #[must_use]
    pub fn yang_share_above(&self, tenths: u64) -> bool {
        u64::from(self.yang) * 10 > u64::from(self.total()) * tenths
    }

    /// Report whether the Yang share is below `tenths / 10`.
    #[must_use]
    pub fn yang_share_below(&self, tenths: u64) -> bool {
        u64::from(self.yang) * 10 < u64::from(self.total()) * tenths
    }

    /// Energy score: 100 inside 40-60 % Yang, 80 inside 30-70 %, else 60.
    ///
    /// An empty room scores 50.
    #[must_use]
    pub fn score(&self) -> u32 {
        if self.total() == 0 {
            EMPTY_ENERGY_SCORE
        } else if !self.yang_share_below(4) && !self.yang_share_above(6) {
            100
        } else if !self.yang_share_below(3) && !self.yang_share_above(7) {
            80
        } else {
            60
        }
    }
}

/// Errors raised for invalid layouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndoorError {
    /// An item type is not in the catalog.
    #[error("item '{id}' has unknown type '{item_type}'")]
    UnknownItem {
        /// Identifier of the offending item.
        id: String,
        /// Unrecognised type.
        item_type: String,
    },
    /// An item position is NaN or infinite.
    #[error("item '{id}' has a non-finite position")]
    NonFinitePosition {
        /// Identifier of the offending item.
        id: String,
    },
}

/// Result of scoring a furnished room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndoorAnalysis {
    /// Weighted blend of the four component scores.
    pub overall_score: u32,
    /// How evenly items spread over the Five Elements.
    pub element_balance: u32,
    /// Yin-Yang balance of the items.
    pub energy_score: u32,
    /// Space-flow score from item count.
    pub spacial_score: u32,
    /// Fitness of the items for the room type.
    pub functional_score: u32,
    /// Items per element.
    pub element_counts: ElementCounts,
    /// Yin and Yang tallies.
    pub energy_balance: EnergyBalance,
    /// Ordered advice.
    pub recommendations: Vec<String>,
}

/// Score layouts against an item catalog.
///
/// # Examples
/// ```
/// use fengshui_indoor::{IndoorScorer, ItemCatalog, PlacedItem};
///
/// let scorer = IndoorScorer::new(ItemCatalog::standard());
/// let items = [
///     PlacedItem::new("1", "bed", 2.0, 1.0),
///     PlacedItem::new("2", "plant", 0.5, 0.5),
/// ];
/// let analysis = scorer.analyze(&items, "bedroom").expect("known items");
/// assert_eq!(analysis.functional_score, 85);
/// assert_eq!(analysis.spacial_score, 90);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IndoorScorer {
    catalog: ItemCatalog,
}

impl IndoorScorer {
    /// Score against `catalog`.
    #[must_use]
    pub const fn new(catalog: ItemCatalog) -> Self {
        Self { catalog }
    }

    /// Catalog used to resolve item types.
    #[must_use]
    pub const fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Score `items` placed in a room named `room_type`.
    ///
    /// # Errors
    /// Returns [`IndoorError::UnknownItem`] for an item type missing from the
    /// catalog and [`IndoorError::NonFinitePosition`] for a NaN or infinite
    /// coordinate.
    pub fn analyze(
        &self,
        items: &[PlacedItem],
        room_type: &str,
    ) -> Result<IndoorAnalysis, IndoorError> {
        let room = RoomType::parse(room_type);
        let mut element_counts = ElementCounts::default();
        let mut energy_balance = EnergyBalance::default();
        let mut present = BTreeSet::new();
        for item in items {
            if !item.has_finite_position() {
                return Err(IndoorError::NonFinitePosition {
                    id: item.id.clone(),
                });
            }
            let attributes =
                self.catalog
                    .get(&item.item_type)
                    .ok_or_else(|| IndoorError::UnknownItem {
                        id: item.id.clone(),
                        item_type: item.item_type.clone(),
                    })?;
            element_counts.add(attributes.element);
            energy_balance.add(attributes.energy);
            present.insert(item.item_type.as_str());
        }

        let element_balance = element_balance(&element_counts);
        let energy_score = energy_balance.score();
        let spacial_score = spacial_score(items.len());
        let functional_score = room.functional_score(&present);
        let overall_score =
            overall_score(element_balance, energy_score, spacial_score, functional_score);
        log::debug!(
            "{room} layout of {} items: elements {element_balance}, energy {energy_score}, space {spacial_score}, function {functional_score}",
            items.len()
        );

        let advice = recommendations(&LayoutSummary {
            counts: &element_counts,
            energy: &energy_balance,
            present: &present,
            room,
            item_count: items.len(),
        });
        Ok(IndoorAnalysis {
            overall_score,
            element_balance,
            energy_score,
            spacial_score,
            functional_score,
            element_counts,
            energy_balance,
            recommendations: advice,
        })
    }
}

/// Evenness of the element distribution.
///
/// Zero for an empty room; a room of a single element also scores zero.
#[expect(
    clippy::float_arithmetic,
    reason = "deviation from an even spread is a float ratio"
)]
fn element_balance(counts: &ElementCounts) -> u32 {
    if counts.total() == 0 {
        return 0;
    }
    let total = f64::from(counts.total());
    let ideal = total / 5.0;
    let deviation: f64 = Element::ALL
        .into_iter()
        .map(|element| (f64::from(counts.get(element)) - ideal).abs())
        .sum();
    to_score((100.0 - 62.5 * deviation / total).max(0.0))
}

const fn spacial_score(item_count: usize) -> u32 {
    match item_count {
        0..5 => 90,
        5..10 => 85,
        10..15 => 75,
        15..20 => 65,
        _ => 50,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the overall score is a weighted mean"
)]
fn overall_score(element_balance: u32, energy: u32, spacial: u32, functional: u32) -> u32 {
    to_score(
        0.30 * f64::from(element_balance)
            + 0.25 * f64::from(energy)
            + 0.25 * f64::from(spacial)
            + 0.20 * f64::from(functional),
    )
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped to 0..=100 first"
)]
fn to_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn scorer() -> IndoorScorer {
        IndoorScorer::default()
    }

    fn layout(types: &[&str]) -> Vec<PlacedItem> {
        types
            .iter()
            .enumerate()
            .map(|(index, item_type)| PlacedItem::new(index.to_string(), *item_type, 1.0, 1.0))
            .collect()
    }

    #[rstest]
    fn empty_room(scorer: IndoorScorer) {
        let analysis = scorer.analyze(&[], "bedroom").expect("empty layout");
        assert_eq!(analysis.element_balance, 0);
        assert_eq!(analysis.energy_score, 50);
        assert_eq!(analysis.spacial_score, 90);
        assert_eq!(analysis.functional_score, 70);
        assert_eq!(analysis.overall_score, 49);
        assert!(!analysis.recommendations.is_empty());
    }

    #[rstest]
    fn single_element_room_has_no_balance(scorer: IndoorScorer) {
        let analysis = scorer.analyze(&layout(&["tv"; 20]), "living").expect("tvs");
        assert_eq!(analysis.element_balance, 0);
        assert_eq!(analysis.energy_score, 60);
        assert_eq!(analysis.spacial_score, 50);
        assert_eq!(analysis.element_counts.fire, 20);
    }

    #[rstest]
    fn even_spread_is_perfectly_balanced(scorer: IndoorScorer) {
        let analysis = scorer
            .analyze(&layout(&["plant", "lamp", "rug", "clock", "fountain"]), "other")
            .expect("one of each element");
        assert_eq!(analysis.element_balance, 100);
    }

    #[rstest]
    fn neutral_items_count_as_yin(scorer: IndoorScorer) {
        let analysis = scorer.analyze(&layout(&["table", "lamp"]), "other").expect("layout");
        assert_eq!(analysis.energy_balance, EnergyBalance { yin: 1, yang: 1 });
        assert_eq!(analysis.energy_score, 100);
    }

    #[rstest]
    #[case(4, 90)]
    #[case(5, 85)]
    #[case(14, 75)]
    #[case(19, 65)]
    #[case(20, 50)]
    fn spacial_bands(#[case] count: usize, #[case] expected: u32) {
        assert_eq!(spacial_score(count), expected);
    }

    #[rstest]
    #[case(EnergyBalance { yin: 3, yang: 2 }, 100)]
    #[case(EnergyBalance { yin: 2, yang: 3 }, 100)]
    #[case(EnergyBalance { yin: 7, yang: 3 }, 80)]
    #[case(EnergyBalance { yin: 3, yang: 7 }, 80)]
    #[case(EnergyBalance { yin: 1, yang: 4 }, 60)]
    #[case(EnergyBalance { yin: 0, yang: 0 }, 50)]
    fn energy_bands(#[case] balance: EnergyBalance, #[case] expected: u32) {
        assert_eq!(balance.score(), expected);
    }

    #[rstest]
    fn unknown_item_is_rejected(scorer: IndoorScorer) {
        let error = scorer
            .analyze(&layout(&["bed", "hot_tub"]), "bedroom")
            .expect_err("unknown type");
        assert_eq!(
            error,
            IndoorError::UnknownItem {
                id: "1".to_owned(),
                item_type: "hot_tub".to_owned(),
            }
        );
    }

    #[rstest]
    fn non_finite_position_is_rejected(scorer: IndoorScorer) {
        let items = [PlacedItem::new("lamp-1", "lamp", f64::NAN, 0.0)];
        assert_eq!(
            scorer.analyze(&items, "office"),
            Err(IndoorError::NonFinitePosition {
                id: "lamp-1".to_owned()
            })
        );
    }

    #[rstest]
    fn serialises_with_camel_case_keys(scorer: IndoorScorer) {
        let analysis = scorer.analyze(&layout(&["desk"]), "office").expect("layout");
        let json = serde_json::to_value(&analysis).expect("encode analysis");
        for key in [
            "overallScore",
            "elementBalance",
            "energyScore",
            "spacialScore",
            "functionalScore",
            "elementCounts",
            "energyBalance",
            "recommendations",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json.pointer("/elementCounts/metal"), Some(&serde_json::json!(0)));
    }
}
