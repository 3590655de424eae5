//! Traditional scoring categories.
//!
//! [`Category::ALL`] doubles as the priority order for explanations and
//! suggestions.

use std::fmt;

/// Number of traditional categories.
pub const CATEGORY_COUNT: usize = 7;

/// A traditional Feng Shui scoring category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    /// Parks and greenery.
    GreenSpace,
    /// Nearby water bodies.
    WaterElement,
    /// Openness of the built environment.
    BuildingHarmony,
    /// Road connectivity without congestion.
    RoadAccessibility,
    /// South-facing building orientation.
    Orientation,
    /// Healthcare and education access.
    EnvironmentalQuality,
    /// Temples and spiritual sites.
    SpiritualEnergy,
}

impl Category {
    /// Every category in priority order.
    pub const ALL: [Self; CATEGORY_COUNT] = [
        Self::GreenSpace,
        Self::WaterElement,
        Self::BuildingHarmony,
        Self::RoadAccessibility,
        Self::Orientation,
        Self::EnvironmentalQuality,
        Self::SpiritualEnergy,
    ];

    const fn index(self) -> usize {
        match self {
            Self::GreenSpace => 0,
            Self::WaterElement => 1,
            Self::BuildingHarmony => 2,
            Self::RoadAccessibility => 3,
            Self::Orientation => 4,
            Self::EnvironmentalQuality => 5,
            Self::SpiritualEnergy => 6,
        }
    }

    /// Return the category key as a snake_case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GreenSpace => "green_space",
            Self::WaterElement => "water_element",
            Self::BuildingHarmony => "building_harmony",
            Self::RoadAccessibility => "road_accessibility",
            Self::Orientation => "orientation",
            Self::EnvironmentalQuality => "environmental_quality",
            Self::SpiritualEnergy => "spiritual_energy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `0.0..=100.0` score per [`Category`].
///
/// Every category always has a score; unset categories read as `0.0`.
///
/// # Examples
/// ```
/// use fengshui_core::{Category, CategoryScores};
///
/// let mut scores = CategoryScores::default();
/// scores.set(Category::GreenSpace, 120.0);
/// assert_eq!(scores.get(Category::GreenSpace), 100.0);
/// assert_eq!(scores.get(Category::Orientation), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryScores {
    scores: [f64; CATEGORY_COUNT],
}

impl CategoryScores {
    /// Return the score for `category`.
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        self.scores[category.index()]
    }

    /// Store a sanitised score for `category`.
    pub fn set(&mut self, category: Category, score: f64) {
        self.scores[category.index()] = crate::sanitise_score(score);
    }

    /// Iterate over `(category, score)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    /// Apply `f` to every score, e.g. for rounding.
    #[must_use]
    pub fn map(mut self, f: impl Fn(f64) -> f64) -> Self {
        for category in Category::ALL {
            self.set(category, f(self.get(category)));
        }
        self
    }
}

impl FromIterator<(Category, f64)> for CategoryScores {
    fn from_iter<I: IntoIterator<Item = (Category, f64)>>(iter: I) -> Self {
        let mut scores = Self::default();
        for (category, score) in iter {
            scores.set(category, score);
        }
        scores
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CategoryScores {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for (category, score) in self.iter() {
            map.serialize_entry(category.as_str(), &score)?;
        }
        map.end()
    }
}
