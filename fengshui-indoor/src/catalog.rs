//! Item catalog: the element, energy, placement and Bagua zone of every
//! furnishing the indoor scorer recognises.

use std::collections::BTreeMap;

use fengshui_core::{Element, Energy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::RoomType;

/// Broad kind of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Beds, seating, storage and screens.
    Furniture,
    /// Ornaments and wall pieces.
    Decor,
    /// Living plants.
    Plant,
    /// Light sources.
    Lighting,
    /// Doors and windows.
    Fixture,
}

/// Life area of the Bagua map an item is associated with.
///
/// Descriptive only; the scorer does not weight zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaguaZone {
    /// Wealth and prosperity.
    Wealth,
    /// Fame and reputation.
    Fame,
    /// Love and partnership.
    Relationships,
    /// Family and ancestors.
    Family,
    /// Health and centre.
    Health,
    /// Creativity and children.
    Children,
    /// Knowledge and self-cultivation.
    Knowledge,
    /// Career and life path.
    Career,
    /// Helpful people and travel.
    HelpfulPeople,
}

/// Attributes of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttributes {
    /// Element the item contributes.
    pub element: Element,
    /// Polarity of the item.
    pub energy: Energy,
    /// Broad kind of item.
    pub placement: Placement,
    /// Associated Bagua zone.
    pub bagua: BaguaZone,
}

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON could not be decoded.
    #[error("failed to parse item catalog")]
    Parse(#[source] serde_json::Error),
    /// An entry has an empty or blank key.
    #[error("item catalog contains an empty item key")]
    EmptyKey,
    /// A room rule refers to an item the catalog lacks.
    #[error("item catalog is missing '{item}', required by the {room} rules")]
    MissingRuleItem {
        /// Missing item key.
        item: &'static str,
        /// Room whose rules name the item.
        room: RoomType,
    },
}

use BaguaZone as Z;
use Element as El;
use Energy as En;
use Placement as P;

const STANDARD_ITEMS: [(&str, Element, Energy, Placement, BaguaZone); 25] = [
    ("bed", El::Earth, En::Yin, P::Furniture, Z::Relationships),
    ("sofa", El::Earth, En::Yin, P::Furniture, Z::Family),
    ("desk", El::Wood, En::Yang, P::Furniture, Z::Career),
    ("table", El::Wood, En::Neutral, P::Furniture, Z::Family),
    ("chair", El::Wood, En::Yang, P::Furniture, Z::Career),
    ("wardrobe", El::Wood, En::Yin, P::Furniture, Z::Health),
    ("bookshelf", El::Wood, En::Yang, P::Furniture, Z::Knowledge),
    ("tv", El::Fire, En::Yang, P::Furniture, Z::Fame),
    ("mirror", El::Water, En::Yang, P::Decor, Z::Career),
    ("painting", El::Fire, En::Yang, P::Decor, Z::Fame),
    ("clock", El::Metal, En::Yang, P::Decor, Z::HelpfulPeople),
    ("vase", El::Earth, En::Yin, P::Decor, Z::Relationships),
    ("rug", El::Earth, En::Yin, P::Decor, Z::Health),
    ("curtain", El::Water, En::Yin, P::Decor, Z::Career),
    ("window", El::Metal, En::Yang, P::Fixture, Z::Children),
    ("door", El::Wood, En::Yang, P::Fixture, Z::Career),
    ("fountain", El::Water, En::Yang, P::Decor, Z::Wealth),
    ("crystals", El::Earth, En::Yang, P::Decor, Z::Knowledge),
    ("bamboo", El::Wood, En::Yang, P::Plant, Z::Wealth),
    ("plant", El::Wood, En::Yang, P::Plant, Z::Family),
    ("bonsai", El::Wood, En::Yin, P::Plant, Z::Health),
    ("flowers", El::Wood, En::Yang, P::Plant, Z::Relationships),
    ("lamp", El::Fire, En::Yang, P::Lighting, Z::Fame),
    ("chandelier", El::Fire, En::Yang, P::Lighting, Z::Fame),
    ("candle", El::Fire, En::Yang, P::Lighting, Z::Fame),
];

/// Immutable lookup table from item key to [`ItemAttributes`].
///
/// # Examples
/// ```
/// use fengshui_core::{Element, Energy};
/// use fengshui_indoor::ItemCatalog;
///
/// let catalog = ItemCatalog::standard();
/// let bed = catalog.get("bed").expect("bed is catalogued");
/// assert_eq!(bed.element, Element::Earth);
/// assert_eq!(bed.energy, Energy::Yin);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    items: BTreeMap<String, ItemAttributes>,
}

impl ItemCatalog {
    /// The built-in catalog of 25 common furnishings.
    #[must_use]
    pub fn standard() -> Self {
        let items = STANDARD_ITEMS
            .into_iter()
            .map(|(key, element, energy, placement, bagua)| {
                (
                    key.to_owned(),
                    ItemAttributes {
                        element,
                        energy,
                        placement,
                        bagua,
                    },
                )
            })
            .collect();
        Self { items }
    }

    /// Build a catalog from `items`, checking keys and room-rule coverage.
    ///
    /// # Errors
    /// Returns [`CatalogError::EmptyKey`] for a blank key and
    /// [`CatalogError::MissingRuleItem`] when a room rule names an absent
    /// item.
    pub fn new(items: BTreeMap<String, ItemAttributes>) -> Result<Self, CatalogError> {
        if items.keys().any(|key| key.trim().is_empty()) {
            return Err(CatalogError::EmptyKey);
        }
        for room in RoomType::ALL {
            for rule in room.rules() {
                if let Some(item) = rule.items.iter().copied().find(|item| !items.contains_key(*item)) {
                    return Err(CatalogError::MissingRuleItem { item, room });
                }
            }
        }
        Ok(Self { items })
    }

    /// Decode a catalog from a JSON object of `key -> attributes`.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed JSON, otherwise the
    /// errors of [`ItemCatalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::new(items)
    }

    /// Look up the attributes of `item_type`.
    #[must_use]
    pub fn get(&self, item_type: &str) -> Option<&ItemAttributes> {
        self.items.get(item_type)
    }

    /// Number of catalogued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemAttributes)> + '_ {
        self.items.iter().map(|(key, attributes)| (key.as_str(), attributes))
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn standard_catalog_has_every_item() {
        let catalog = ItemCatalog::standard();
        assert_eq!(catalog.len(), 25);
        assert!(ItemCatalog::new(catalog.items.clone()).is_ok());
    }

    #[rstest]
    #[case("tv", Element::Fire, Energy::Yang)]
    #[case("table", Element::Wood, Energy::Neutral)]
    #[case("curtain", Element::Water, Energy::Yin)]
    #[case("window", Element::Metal, Energy::Yang)]
    fn standard_attributes(#[case] key: &str, #[case] element: Element, #[case] energy: Energy) {
        let attributes = ItemCatalog::standard().get(key).copied().expect("catalogued");
        assert_eq!(attributes.element, element);
        assert_eq!(attributes.energy, energy);
    }

    #[rstest]
    fn loads_extended_catalog_from_json() {
        let mut json: serde_json::Map<String, serde_json::Value> = ItemCatalog::standard()
            .iter()
            .map(|(key, attributes)| {
                (
                    key.to_owned(),
                    serde_json::to_value(attributes).expect("encode attributes"),
                )
            })
            .collect();
        json.insert(
            "koi_pond".to_owned(),
            serde_json::json!({
                "element": "water",
                "energy": "yin",
                "placement": "decor",
                "bagua": "wealth"
            }),
        );
        let text = serde_json::Value::Object(json).to_string();
        let catalog = ItemCatalog::from_json_str(&text).expect("load catalog");
        assert_eq!(catalog.len(), 26);
        assert_eq!(
            catalog.get("koi_pond").map(|item| item.bagua),
            Some(BaguaZone::Wealth)
        );
    }

    #[rstest]
    fn rejects_empty_key() {
        let mut items = ItemCatalog::standard().items;
        let bed = items.get("bed").copied().expect("bed is catalogued");
        items.insert("  ".to_owned(), bed);
        assert!(matches!(ItemCatalog::new(items), Err(CatalogError::EmptyKey)));
    }

    #[rstest]
    fn rejects_catalog_missing_rule_items() {
        let mut items = ItemCatalog::standard().items;
        items.remove("bookshelf");
        let error = ItemCatalog::new(items).expect_err("bookshelf is required");
        assert!(matches!(
            error,
            CatalogError::MissingRuleItem {
                item: "bookshelf",
                room: RoomType::Office
            }
        ));
    }

    #[rstest]
    fn rejects_malformed_json() {
        assert!(matches!(
            ItemCatalog::from_json_str("[1, 2]"),
            Err(CatalogError::Parse(_))
        ));
    }
}
