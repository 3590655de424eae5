//! Ordered recommendation rules for indoor layouts.

use std::collections::BTreeSet;

use fengshui_core::{Element, ElementCounts};

use crate::{EnergyBalance, RoomType};

/// Layouts with more items than this receive a clutter warning.
pub const CLUTTER_THRESHOLD: usize = 15;

/// Shown for any mirror in a bedroom.
pub const MIRROR_FACING_BED: &str = "Avoid placing mirrors directly facing the bed";

/// Shown when no other rule fires.
pub const BALANCED_ROOM: &str = "Your room design shows good Feng Shui balance";

/// Element prompts in priority order: `(element, minimum count, message)`.
const ELEMENT_PROMPTS: [(Element, u32, &str); 5] = [
    (
        Element::Wood,
        2,
        "Add more wood elements (plants, furniture) for growth energy",
    ),
    (
        Element::Fire,
        1,
        "Include fire elements (candles, red colours) for passion and warmth",
    ),
    (
        Element::Water,
        1,
        "Add water elements (fountain, mirror) for flow and prosperity",
    ),
    (
        Element::Earth,
        2,
        "Incorporate earth elements (crystals, pottery) for stability",
    ),
    (
        Element::Metal,
        1,
        "Include metal elements (clocks, metal frames) for clarity",
    ),
];

const TOO_MUCH_YANG: &str = "Balance yang energy with softer, yin elements (curtains, rugs)";
const TOO_MUCH_YIN: &str = "Add more yang energy with lighting and active elements";
const ADD_PLANTS: &str = "Add plants for fresh air and positive energy";
const DECLUTTER: &str = "Consider decluttering: too many items can block energy flow";

/// Inputs the recommendation rules inspect.
#[derive(Debug, Clone, Copy)]
pub struct LayoutSummary<'a> {
    /// Items per element.
    pub counts: &'a ElementCounts,
    /// Yin and Yang tallies.
    pub energy: &'a EnergyBalance,
    /// Distinct item types present.
    pub present: &'a BTreeSet<&'a str>,
    /// Kind of room.
    pub room: RoomType,
    /// Number of placed items.
    pub item_count: usize,
}

/// Produce recommendations in fixed priority order.
///
/// Element deficiencies come first, then energy imbalance, room warnings and
/// clutter. Each rule is independent; if none fires a single affirmative
/// message is returned.
#[must_use]
pub fn recommendations(summary: &LayoutSummary<'_>) -> Vec<String> {
    let mut lines: Vec<String> = ELEMENT_PROMPTS
        .iter()
        .filter(|(element, minimum, _)| summary.counts.get(*element) < *minimum)
        .map(|(_, _, message)| (*message).to_owned())
        .collect();

    if summary.item_count > 0 {
        if summary.energy.yang_share_above(7) {
            lines.push(TOO_MUCH_YANG.to_owned());
        } else if summary.energy.yang_share_below(3) {
            lines.push(TOO_MUCH_YIN.to_owned());
        }
    }

    if summary.room == RoomType::Bedroom {
        if !summary.present.contains("plant") {
            lines.push(ADD_PLANTS.to_owned());
        }
        if summary.present.contains("mirror") {
            lines.push(MIRROR_FACING_BED.to_owned());
        }
    }

    if summary.item_count > CLUTTER_THRESHOLD {
        lines.push(DECLUTTER.to_owned());
    }

    if lines.is_empty() {
        lines.push(BALANCED_ROOM.to_owned());
    }
    lines
}
