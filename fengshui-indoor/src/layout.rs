//! Placed items and layout decoding.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// One furnishing placed in a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    /// Caller-chosen identifier, echoed in errors.
    pub id: String,
    /// Catalog key of the item.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Position on the room plan.
    pub position: Coord<f64>,
}

impl PlacedItem {
    /// Place `item_type` at `(x, y)`.
    pub fn new(id: impl Into<String>, item_type: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            item_type: item_type.into(),
            position: Coord { x, y },
        }
    }

    /// Report whether both coordinates are finite.
    #[must_use]
    pub const fn has_finite_position(&self) -> bool {
        self.position.x.is_finite() && self.position.y.is_finite()
    }
}

/// Decode a layout from a JSON array of placed items.
///
/// # Errors
/// Returns the decoder error for malformed JSON.
pub fn parse_layout(json: &str) -> Result<Vec<PlacedItem>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_type_field() {
        let items = parse_layout(r#"[{"id": "a", "type": "bed", "position": {"x": 1.0, "y": 2.5}}]"#)
            .expect("decode layout");
        assert_eq!(items, vec![PlacedItem::new("a", "bed", 1.0, 2.5)]);
    }

    #[rstest]
    #[case(f64::NAN, 0.0, false)]
    #[case(0.0, f64::INFINITY, false)]
    #[case(3.0, -4.0, true)]
    fn finiteness(#[case] x: f64, #[case] y: f64, #[case] expected: bool) {
        assert_eq!(PlacedItem::new("i", "lamp", x, y).has_finite_position(), expected);
    }
}
