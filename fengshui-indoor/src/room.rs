//! Room types and the functional rules applied to each.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Functional score before any room rule applies.
pub const FUNCTIONAL_BASE: i32 = 70;

/// How a rule's items must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// At least one item is present.
    AnyOf,
    /// Every item is present.
    AllOf,
}

/// Functional adjustment applied when items are present in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomRule {
    /// Catalog keys the rule inspects.
    pub items: &'static [&'static str],
    /// Whether any or all of `items` must be present.
    pub presence: Presence,
    /// Points added to the functional score when the rule matches.
    pub adjustment: i32,
}

impl RoomRule {
    const fn any(items: &'static [&'static str], adjustment: i32) -> Self {
        Self {
            items,
            presence: Presence::AnyOf,
            adjustment,
        }
    }

    const fn all(items: &'static [&'static str], adjustment: i32) -> Self {
        Self {
            items,
            presence: Presence::AllOf,
            adjustment,
        }
    }

    /// Report whether the rule matches the set of present item types.
    #[must_use]
    pub fn matches(&self, present: &BTreeSet<&str>) -> bool {
        match self.presence {
            Presence::AnyOf => self.items.iter().any(|item| present.contains(item)),
            Presence::AllOf => self.items.iter().all(|item| present.contains(item)),
        }
    }
}

const BEDROOM_RULES: [RoomRule; 4] = [
    RoomRule::any(&["bed"], 10),
    RoomRule::any(&["plant"], 5),
    RoomRule::all(&["mirror", "bed"], -10),
    RoomRule::any(&["lamp"], 5),
];

const LIVING_RULES: [RoomRule; 3] = [
    RoomRule::any(&["sofa"], 10),
    RoomRule::any(&["plant"], 5),
    RoomRule::any(&["lamp", "chandelier"], 5),
];

const OFFICE_RULES: [RoomRule; 4] = [
    RoomRule::any(&["desk"], 10),
    RoomRule::any(&["chair"], 5),
    RoomRule::any(&["plant"], 5),
    RoomRule::any(&["bookshelf"], 5),
];

/// Kind of room being furnished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    /// A bedroom.
    Bedroom,
    /// A living room.
    Living,
    /// A study or office.
    Office,
    /// Any other room; only the base functional score applies.
    Other,
}

impl RoomType {
    /// Every room type.
    pub const ALL: [Self; 4] = [Self::Bedroom, Self::Living, Self::Office, Self::Other];

    /// Parse a room name, ignoring case and surrounding whitespace.
    ///
    /// `living` and `living_room` are synonyms; unrecognised names map to
    /// [`RoomType::Other`].
    ///
    /// # Examples
    /// ```
    /// use fengshui_indoor::RoomType;
    ///
    /// assert_eq!(RoomType::parse("Living_Room"), RoomType::Living);
    /// assert_eq!(RoomType::parse("garage"), RoomType::Other);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "bedroom" => Self::Bedroom,
            "living" | "living_room" => Self::Living,
            "office" => Self::Office,
            _ => Self::Other,
        }
    }

    /// Return the room name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bedroom => "bedroom",
            Self::Living => "living",
            Self::Office => "office",
            Self::Other => "other",
        }
    }

    /// Functional rules for this room, in application order.
    #[must_use]
    pub const fn rules(self) -> &'static [RoomRule] {
        match self {
            Self::Bedroom => &BEDROOM_RULES,
            Self::Living => &LIVING_RULES,
            Self::Office => &OFFICE_RULES,
            Self::Other => &[],
        }
    }

    /// Functional score for a room containing `present` item types.
    ///
    /// Starts from [`FUNCTIONAL_BASE`] and is capped to `0..=100`.
    #[must_use]
    pub fn functional_score(self, present: &BTreeSet<&str>) -> u32 {
        let adjusted = self
            .rules()
            .iter()
            .filter(|rule| rule.matches(present))
            .fold(FUNCTIONAL_BASE, |score, rule| {
                score.saturating_add(rule.adjustment)
            });
        u32::try_from(adjusted.clamp(0, 100)).unwrap_or_default()
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn present<'a>(items: &[&'a str]) -> BTreeSet<&'a str> {
        items.iter().copied().collect()
    }

    #[rstest]
    #[case("bedroom", RoomType::Bedroom)]
    #[case(" BEDROOM ", RoomType::Bedroom)]
    #[case("living", RoomType::Living)]
    #[case("living_room", RoomType::Living)]
    #[case("Office", RoomType::Office)]
    #[case("kitchen", RoomType::Other)]
    #[case("", RoomType::Other)]
    fn parses_room_names(#[case] name: &str, #[case] expected: RoomType) {
        assert_eq!(RoomType::parse(name), expected);
    }

    #[rstest]
    #[case(RoomType::Bedroom, &[], 70)]
    #[case(RoomType::Bedroom, &["bed"], 80)]
    #[case(RoomType::Bedroom, &["bed", "mirror"], 70)]
    #[case(RoomType::Bedroom, &["bed", "plant", "lamp"], 90)]
    #[case(RoomType::Living, &["sofa", "plant", "lamp", "chandelier"], 90)]
    #[case(RoomType::Office, &["desk", "chair", "plant", "bookshelf"], 95)]
    #[case(RoomType::Other, &["bed", "desk", "sofa"], 70)]
    fn functional_scores(
        #[case] room: RoomType,
        #[case] items: &[&str],
        #[case] expected: u32,
    ) {
        assert_eq!(room.functional_score(&present(items)), expected);
    }

    #[rstest]
    fn mirror_alone_is_not_penalised() {
        assert_eq!(RoomType::Bedroom.functional_score(&present(&["mirror"])), 70);
    }
}
