//! Raw geo-data supplied by an external collaborator.
//!
//! A [`GeoSnapshot`] is whatever the map service returned for a request:
//! nearby points of interest grouped by [`PoiCategory`] plus a coarse road
//! summary. Categories that were not returned are treated as empty.

use std::collections::BTreeMap;
use std::fmt;

use geo::Coord;
use thiserror::Error;

use crate::AnalysisRequest;

/// Kind of nearby point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PoiCategory {
    /// Parks, gardens and woodland.
    Parks,
    /// Lakes, rivers and fountains.
    Water,
    /// Commercial and other non-residential buildings.
    Buildings,
    /// Residential buildings.
    Residential,
    /// Stations and stops.
    Transportation,
    /// Hospitals and clinics.
    Hospitals,
    /// Schools and universities.
    Schools,
    /// Temples, shrines and other places of worship.
    Temples,
}

impl PoiCategory {
    /// Every category in canonical order.
    pub const ALL: [Self; 8] = [
        Self::Parks,
        Self::Water,
        Self::Buildings,
        Self::Residential,
        Self::Transportation,
        Self::Hospitals,
        Self::Schools,
        Self::Temples,
    ];

    /// Return the category key as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parks => "parks",
            Self::Water => "water",
            Self::Buildings => "buildings",
            Self::Residential => "residential",
            Self::Transportation => "transportation",
            Self::Hospitals => "hospitals",
            Self::Schools => "schools",
            Self::Temples => "temples",
        }
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point of interest near the analysed location.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearbyPoi {
    /// Display name, when the source has one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Location (`x = longitude`, `y = latitude`), when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<Coord<f64>>,
    /// Distance from the analysed location in metres.
    pub distance_m: f64,
}

impl NearbyPoi {
    /// Create an anonymous point at `distance_m` with no location.
    #[must_use]
    pub const fn at_distance(distance_m: f64) -> Self {
        Self {
            name: None,
            location: None,
            distance_m,
        }
    }

    /// Attach a name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a location.
    #[must_use]
    pub fn located(mut self, location: Coord<f64>) -> Self {
        self.location = Some(location);
        self
    }
}

/// Coarse road network summary for the search area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadNetwork {
    /// Number of road segments.
    #[cfg_attr(feature = "serde", serde(default))]
    pub road_count: u32,
    /// Number of intersections.
    #[cfg_attr(feature = "serde", serde(default))]
    pub intersection_count: u32,
}

/// Everything a geo-data collaborator returned for one request.
///
/// # Examples
/// ```
/// use fengshui_core::{GeoSnapshot, NearbyPoi, PoiCategory};
///
/// let snapshot = GeoSnapshot::default()
///     .with_poi(PoiCategory::Parks, NearbyPoi::at_distance(120.0));
/// assert_eq!(snapshot.pois(PoiCategory::Parks).len(), 1);
/// assert!(snapshot.pois(PoiCategory::Temples).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoSnapshot {
    #[cfg_attr(feature = "serde", serde(default))]
    pois: BTreeMap<PoiCategory, Vec<NearbyPoi>>,
    /// Road summary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roads: RoadNetwork,
}

impl GeoSnapshot {
    /// Points in `category`; empty when the collaborator returned none.
    #[must_use]
    pub fn pois(&self, category: PoiCategory) -> &[NearbyPoi] {
        self.pois
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of points in `category`.
    #[must_use]
    pub fn count(&self, category: PoiCategory) -> usize {
        self.pois(category).len()
    }

    /// Append `poi` to `category`.
    pub fn push(&mut self, category: PoiCategory, poi: NearbyPoi) {
        self.pois.entry(category).or_default().push(poi);
    }

    /// Append `poi` to `category`, returning `self` for chaining.
    #[must_use]
    pub fn with_poi(mut self, category: PoiCategory, poi: NearbyPoi) -> Self {
        self.push(category, poi);
        self
    }

    /// Replace the road summary.
    #[must_use]
    pub fn with_roads(mut self, roads: RoadNetwork) -> Self {
        self.roads = roads;
        self
    }
}

/// Errors returned by a [`GeoDataProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoDataError {
    /// The collaborator could not be reached or refused the request.
    #[error("geo-data source unavailable: {reason}")]
    Unavailable {
        /// Collaborator-supplied detail.
        reason: String,
    },
    /// A stored snapshot could not be read or decoded.
    #[error("failed to load geo-data snapshot from {path}: {message}")]
    Snapshot {
        /// Location of the snapshot.
        path: String,
        /// Underlying read or decode failure.
        message: String,
    },
}

/// Supply nearby features for an analysis request.
///
/// An `Err` is fatal to the outdoor pipeline. An empty snapshot is not an
/// error and scores every feature as zero.
///
/// # Examples
/// ```
/// use fengshui_core::{AnalysisRequest, GeoDataError, GeoDataProvider, GeoSnapshot};
///
/// struct Empty;
///
/// impl GeoDataProvider for Empty {
///     fn fetch(&self, _request: &AnalysisRequest) -> Result<GeoSnapshot, GeoDataError> {
///         Ok(GeoSnapshot::default())
///     }
/// }
///
/// let request = AnalysisRequest::new(35.0, 139.0, 500).expect("valid request");
/// assert_eq!(Empty.fetch(&request)?, GeoSnapshot::default());
/// # Ok::<(), GeoDataError>(())
/// ```
pub trait GeoDataProvider: Send + Sync {
    /// Return the snapshot for `request`.
    fn fetch(&self, request: &AnalysisRequest) -> Result<GeoSnapshot, GeoDataError>;
}
