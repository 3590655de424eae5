//! The normalised feature vector consumed by both scoring paths.
//!
//! Feature order is part of the contract: statistical models receive the
//! components positionally, in [`Feature::ALL`] order.

use std::fmt;
use std::str::FromStr;

use crate::score::clamp_unit;

/// Number of features in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = 7;

/// A named component of the feature vector.
///
/// # Examples
/// ```
/// use fengshui_core::Feature;
///
/// assert_eq!(Feature::GreenRatio.as_str(), "green_ratio");
/// assert_eq!(Feature::ALL.len(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Feature {
    /// Share of the search area covered by parks and greenery.
    GreenRatio,
    /// Desirability of the nearest water body's distance.
    WaterProximity,
    /// Density of commercial and residential buildings.
    BuildingDensity,
    /// Road intersection density mapped onto a connectivity curve.
    RoadIntersectionDensity,
    /// Average south-facing quality of nearby buildings.
    OrientationScore,
    /// Access to hospitals and schools.
    EnvironmentalQuality,
    /// Presence of temples and other spiritual sites.
    SpiritualPresence,
}

impl Feature {
    /// Every feature in positional order.
    pub const ALL: [Self; FEATURE_COUNT] = [
        Self::GreenRatio,
        Self::WaterProximity,
        Self::BuildingDensity,
        Self::RoadIntersectionDensity,
        Self::OrientationScore,
        Self::EnvironmentalQuality,
        Self::SpiritualPresence,
    ];

    /// Position of the feature inside a [`FeatureVector`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::GreenRatio => 0,
            Self::WaterProximity => 1,
            Self::BuildingDensity => 2,
            Self::RoadIntersectionDensity => 3,
            Self::OrientationScore => 4,
            Self::EnvironmentalQuality => 5,
            Self::SpiritualPresence => 6,
        }
    }

    /// Return the feature name as a snake_case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GreenRatio => "green_ratio",
            Self::WaterProximity => "water_proximity",
            Self::BuildingDensity => "building_density",
            Self::RoadIntersectionDensity => "road_intersection_density",
            Self::OrientationScore => "orientation_score",
            Self::EnvironmentalQuality => "environmental_quality",
            Self::SpiritualPresence => "spiritual_presence",
        }
    }

    /// Human-readable description used in explanations.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GreenRatio => "green space coverage",
            Self::WaterProximity => "water element proximity",
            Self::BuildingDensity => "building density",
            Self::RoadIntersectionDensity => "road network density",
            Self::OrientationScore => "building orientation",
            Self::EnvironmentalQuality => "environmental quality",
            Self::SpiritualPresence => "spiritual presence",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.as_str() == s)
            .ok_or_else(|| format!("unknown feature '{s}'"))
    }
}

/// Seven normalised feature values, each within `0.0..=1.0`.
///
/// Construction clamps every component and replaces non-finite values with
/// `0.0`, so a `FeatureVector` can never hold an out-of-range value.
///
/// # Examples
/// ```
/// use fengshui_core::{Feature, FeatureVector};
///
/// let features = FeatureVector::zeroed()
///     .with(Feature::GreenRatio, 0.8)
///     .with(Feature::WaterProximity, 1.7);
/// assert_eq!(features.get(Feature::GreenRatio), 0.8);
/// assert_eq!(features.get(Feature::WaterProximity), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Build a vector from positional values, clamping each into `0.0..=1.0`.
    #[must_use]
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            values: values.map(clamp_unit),
        }
    }

    /// A vector with every component set to zero.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Return the value of `feature`.
    #[must_use]
    pub const fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    /// Set `feature`, clamping the value into `0.0..=1.0`.
    pub fn set(&mut self, feature: Feature, value: f64) {
        self.values[feature.index()] = clamp_unit(value);
    }

    /// Set `feature` while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, feature: Feature, value: f64) -> Self {
        self.set(feature, value);
        self
    }

    /// Positional values in [`Feature::ALL`] order.
    #[must_use]
    pub const fn as_array(&self) -> [f64; FEATURE_COUNT] {
        self.values
    }

    /// Iterate over `(feature, value)` pairs in positional order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.into_iter().map(|feature| (feature, self.get(feature)))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FeatureVector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.as_str(), &value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FeatureVector {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = std::collections::BTreeMap::<Feature, f64>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .fold(Self::zeroed(), |vector, (feature, value)| {
                vector.with(feature, value)
            }))
    }
}

/// Relative influence of each feature on a statistical prediction.
///
/// Weights are non-negative; models usually normalise them to sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureImportances {
    weights: [f64; FEATURE_COUNT],
}

impl FeatureImportances {
    /// Build importances from positional weights.
    ///
    /// Negative and non-finite weights are stored as `0.0`.
    #[must_use]
    pub fn new(weights: [f64; FEATURE_COUNT]) -> Self {
        Self {
            weights: weights.map(|w| if w.is_finite() { w.max(0.0) } else { 0.0 }),
        }
    }

    /// Return the importance of `feature`.
    #[must_use]
    pub const fn get(&self, feature: Feature) -> f64 {
        self.weights[feature.index()]
    }

    /// Features sorted by descending importance.
    ///
    /// Ties keep positional order, so the ranking is deterministic.
    #[must_use]
    pub fn ranked(&self) -> Vec<(Feature, f64)> {
        let mut ranked: Vec<(Feature, f64)> = Feature::ALL
            .into_iter()
            .map(|feature| (feature, self.get(feature)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FeatureImportances {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for feature in Feature::ALL {
            map.serialize_entry(feature.as_str(), &self.get(feature))?;
        }
        map.end()
    }
}
