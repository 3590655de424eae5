//! Turn a raw geo-data snapshot into a normalised [`FeatureVector`].
//!
//! Every curve here is a heuristic mapping of counts and distances onto
//! `0.0..=1.0`. Categories missing from the snapshot score `0.0`. Distances
//! are capped to the search radius before use.

use std::f64::consts::PI;

use fengshui_core::{
    AnalysisRequest, Feature, FeatureVector, GeoSnapshot, NearbyPoi, PoiCategory,
};
use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

const SQUARE_METRES_PER_KM2: f64 = 1_000_000.0;

/// Estimated park coverage: each park contributes a nominal area scaled by a
/// distance tier and an exponential decay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkModel {
    /// Nominal area of one park in square metres.
    pub area_m2: f64,
    /// Parks closer than this fraction of the radius use `near_weight`.
    pub near_fraction: f64,
    /// Parks closer than this fraction of the radius use `mid_weight`.
    pub mid_fraction: f64,
    /// Tier weight for near parks.
    pub near_weight: f64,
    /// Tier weight for mid-distance parks.
    pub mid_weight: f64,
    /// Tier weight for distant parks.
    pub far_weight: f64,
    /// Exponential decay rate over `distance / radius`.
    pub decay: f64,
}

impl Default for ParkModel {
    fn default() -> Self {
        Self {
            area_m2: 50_000.0,
            near_fraction: 0.3,
            mid_fraction: 0.6,
            near_weight: 1.0,
            mid_weight: 0.6,
            far_weight: 0.3,
            decay: 2.0,
        }
    }
}

/// Piecewise desirability of the nearest water body's distance.
///
/// Very close water is tempered, a band around `ideal_m` is best, and the
/// value falls away beyond `good_limit_m`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterCurve {
    /// Below this distance the value rises from `close_floor` to `1.0`.
    pub close_m: f64,
    /// Value for water at distance zero.
    pub close_floor: f64,
    /// Most favourable distance.
    pub ideal_m: f64,
    /// Largest drop inside the ideal band.
    pub ideal_penalty: f64,
    /// Upper edge of the ideal band.
    pub good_limit_m: f64,
    /// Upper edge of the declining band.
    pub far_m: f64,
    /// Drop across the declining band.
    pub far_drop: f64,
}

impl Default for WaterCurve {
    fn default() -> Self {
        Self {
            close_m: 100.0,
            close_floor: 0.5,
            ideal_m: 400.0,
            ideal_penalty: 0.15,
            good_limit_m: 800.0,
            far_m: 1_500.0,
            far_drop: 0.5,
        }
    }
}

/// Logistic curve over buildings per square kilometre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityCurve {
    /// Logistic steepness.
    pub steepness: f64,
    /// Density mapped to `0.5`.
    pub midpoint_per_km2: f64,
}

impl Default for DensityCurve {
    fn default() -> Self {
        Self {
            steepness: 0.01,
            midpoint_per_km2: 500.0,
        }
    }
}

/// Intersections per square kilometre mapped onto connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadCurve {
    /// Below this density the network counts as sparse.
    pub sparse_limit: f64,
    /// Value reached at `sparse_limit`.
    pub sparse_ceiling: f64,
    /// Density with full connectivity.
    pub dense_limit: f64,
    /// Density span over which congestion costs `congestion_drop`.
    pub congestion_span: f64,
    /// Loss across `congestion_span`.
    pub congestion_drop: f64,
}

impl Default for RoadCurve {
    fn default() -> Self {
        Self {
            sparse_limit: 10.0,
            sparse_ceiling: 0.7,
            dense_limit: 20.0,
            congestion_span: 20.0,
            congestion_drop: 0.5,
        }
    }
}

/// Bearing-based orientation proxy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationModel {
    /// Score of a building facing directly away from `ideal_bearing_deg`.
    pub base: f64,
    /// Cosine amplitude added to `base`.
    pub amplitude: f64,
    /// Most favourable bearing, clockwise from north.
    pub ideal_bearing_deg: f64,
    /// Distance at which a building's weight halves.
    pub distance_scale_m: f64,
    /// Value used when no building has a location.
    pub fallback: f64,
}

impl Default for OrientationModel {
    fn default() -> Self {
        Self {
            base: 0.3,
            amplitude: 0.7,
            ideal_bearing_deg: 180.0,
            distance_scale_m: 100.0,
            fallback: 0.0,
        }
    }
}

/// Count-based access curve for amenities such as hospitals or schools.
///
/// Rises to `1.0` at `saturation`, holds up to `ideal_max`, then declines
/// towards `floor` over `decline_span`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmenityCurve {
    /// Count at which access saturates.
    pub saturation: f64,
    /// Largest count without an overcrowding penalty.
    pub ideal_max: f64,
    /// Count span over which the value reaches `floor`.
    pub decline_span: f64,
    /// Lowest value for overcrowded areas.
    pub floor: f64,
}

impl AmenityCurve {
    /// Defaults for hospitals and clinics.
    #[must_use]
    pub const fn hospitals() -> Self {
        Self {
            saturation: 2.0,
            ideal_max: 3.0,
            decline_span: 5.0,
            floor: 0.5,
        }
    }

    /// Defaults for schools and universities.
    #[must_use]
    pub const fn schools() -> Self {
        Self {
            saturation: 4.0,
            ideal_max: 5.0,
            decline_span: 10.0,
            floor: 0.5,
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the access curve is piecewise linear"
    )]
    fn evaluate(self, count: f64) -> f64 {
        if count <= 0.0 {
            0.0
        } else if count <= self.ideal_max {
            (count / self.saturation).min(1.0)
        } else {
            let decline = (count - self.ideal_max) / self.decline_span * (1.0 - self.floor);
            (1.0 - decline).max(self.floor)
        }
    }
}

/// All constants used by [`FeatureVectorBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Green coverage model.
    pub parks: ParkModel,
    /// Water distance curve.
    pub water: WaterCurve,
    /// Building density curve.
    pub buildings: DensityCurve,
    /// Road connectivity curve.
    pub roads: RoadCurve,
    /// Orientation proxy.
    pub orientation: OrientationModel,
    /// Hospital access curve.
    pub hospitals: AmenityCurve,
    /// School access curve.
    pub schools: AmenityCurve,
    /// Number of spiritual sites giving full presence.
    pub temple_saturation: f64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            parks: ParkModel::default(),
            water: WaterCurve::default(),
            buildings: DensityCurve::default(),
            roads: RoadCurve::default(),
            orientation: OrientationModel::default(),
            hospitals: AmenityCurve::hospitals(),
            schools: AmenityCurve::schools(),
            temple_saturation: 2.0,
        }
    }
}

impl FeatureConfig {
    /// Check that every divisor is positive and every band is ordered.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidParameter`] naming the first
    /// offending parameter.
    pub fn validate(self) -> Result<Self, ConfigurationError> {
        let positive = [
            ("parks.area_m2", self.parks.area_m2),
            ("water.close_m", self.water.close_m),
            ("water.ideal_m", self.water.ideal_m),
            ("roads.sparse_limit", self.roads.sparse_limit),
            ("roads.congestion_span", self.roads.congestion_span),
            ("orientation.distance_scale_m", self.orientation.distance_scale_m),
            ("hospitals.saturation", self.hospitals.saturation),
            ("hospitals.decline_span", self.hospitals.decline_span),
            ("schools.saturation", self.schools.saturation),
            ("schools.decline_span", self.schools.decline_span),
            ("temple_saturation", self.temple_saturation),
        ];
        if let Some((name, value)) = positive
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            return Err(ConfigurationError::InvalidParameter { name, value });
        }
        if self.water.far_m <= self.water.good_limit_m {
            return Err(ConfigurationError::InvalidParameter {
                name: "water.far_m",
                value: self.water.far_m,
            });
        }
        if self.roads.dense_limit <= self.roads.sparse_limit {
            return Err(ConfigurationError::InvalidParameter {
                name: "roads.dense_limit",
                value: self.roads.dense_limit,
            });
        }
        Ok(self)
    }
}

/// Build feature vectors from geo-data snapshots.
///
/// # Examples
/// ```
/// use fengshui_core::{AnalysisRequest, Feature, GeoSnapshot, NearbyPoi, PoiCategory};
/// use fengshui_scorer::{FeatureConfig, FeatureVectorBuilder};
///
/// let builder = FeatureVectorBuilder::new(FeatureConfig::default());
/// let request = AnalysisRequest::new(35.0, 139.0, 500).expect("valid request");
/// let snapshot = GeoSnapshot::default()
///     .with_poi(PoiCategory::Temples, NearbyPoi::at_distance(200.0));
/// let features = builder.build(&request, &snapshot);
/// assert_eq!(features.get(Feature::SpiritualPresence), 0.5);
/// assert_eq!(features.get(Feature::GreenRatio), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureVectorBuilder {
    config: FeatureConfig,
}

impl FeatureVectorBuilder {
    /// Create a builder using `config`.
    #[must_use]
    pub const fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    /// Borrow the active configuration.
    #[must_use]
    pub const fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Compute every feature for `snapshot` around `request`.
    #[must_use]
    pub fn build(&self, request: &AnalysisRequest, snapshot: &GeoSnapshot) -> FeatureVector {
        let area = SearchArea::new(request.radius_m());
        let features = FeatureVector::zeroed()
            .with(Feature::GreenRatio, self.green_ratio(area, snapshot))
            .with(Feature::WaterProximity, self.water_proximity(area, snapshot))
            .with(Feature::BuildingDensity, self.building_density(area, snapshot))
            .with(
                Feature::RoadIntersectionDensity,
                self.road_intersection_density(area, snapshot),
            )
            .with(
                Feature::OrientationScore,
                self.orientation_score(request, area, snapshot),
            )
            .with(
                Feature::EnvironmentalQuality,
                self.environmental_quality(snapshot),
            )
            .with(
                Feature::SpiritualPresence,
                self.spiritual_presence(snapshot),
            );
        for (feature, value) in features.iter() {
            log::debug!("feature {feature} = {value:.3}");
        }
        features
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "park coverage sums decayed nominal areas"
    )]
    fn green_ratio(&self, area: SearchArea, snapshot: &GeoSnapshot) -> f64 {
        let parks = self.config.parks;
        let covered: f64 = snapshot
            .pois(PoiCategory::Parks)
            .iter()
            .map(|park| {
                let distance = area.cap(park.distance_m);
                let tier = if distance < parks.near_fraction * area.radius {
                    parks.near_weight
                } else if distance < parks.mid_fraction * area.radius {
                    parks.mid_weight
                } else {
                    parks.far_weight
                };
                parks.area_m2 * tier * (-parks.decay * distance / area.radius).exp()
            })
            .sum();
        (covered / area.square_metres).min(1.0)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the water curve is piecewise linear in distance"
    )]
    fn water_proximity(&self, area: SearchArea, snapshot: &GeoSnapshot) -> f64 {
        let Some(nearest) = nearest_distance(snapshot.pois(PoiCategory::Water), area) else {
            return 0.0;
        };
        let curve = self.config.water;
        let good_ceiling = 1.0 - curve.ideal_penalty;
        let remote_ceiling = (good_ceiling - curve.far_drop).max(0.0);
        if nearest < curve.close_m {
            curve.close_floor + (1.0 - curve.close_floor) * nearest / curve.close_m
        } else if nearest <= curve.good_limit_m {
            1.0 - (nearest - curve.ideal_m).abs() / curve.ideal_m * curve.ideal_penalty
        } else if nearest <= curve.far_m {
            good_ceiling
                - (nearest - curve.good_limit_m) / (curve.far_m - curve.good_limit_m)
                    * curve.far_drop
        } else {
            (remote_ceiling - (nearest - curve.far_m) / area.radius * remote_ceiling).max(0.0)
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "density uses a logistic curve over buildings per km²"
    )]
    fn building_density(&self, area: SearchArea, snapshot: &GeoSnapshot) -> f64 {
        let count = snapshot.count(PoiCategory::Buildings) + snapshot.count(PoiCategory::Residential);
        if count == 0 {
            return 0.0;
        }
        let curve = self.config.buildings;
        let per_km2 = count_as_f64(count) / area.square_kilometres;
        1.0 / (1.0 + (-curve.steepness * (per_km2 - curve.midpoint_per_km2)).exp())
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "road connectivity is piecewise linear in intersection density"
    )]
    fn road_intersection_density(&self, area: SearchArea, snapshot: &GeoSnapshot) -> f64 {
        let curve = self.config.roads;
        let per_km2 = f64::from(snapshot.roads.intersection_count) / area.square_kilometres;
        if per_km2 < curve.sparse_limit {
            per_km2 / curve.sparse_limit * curve.sparse_ceiling
        } else if per_km2 <= curve.dense_limit {
            curve.sparse_ceiling
                + (per_km2 - curve.sparse_limit) / (curve.dense_limit - curve.sparse_limit)
                    * (1.0 - curve.sparse_ceiling)
        } else {
            (1.0 - (per_km2 - curve.dense_limit) / curve.congestion_span * curve.congestion_drop)
                .max(0.0)
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "orientation is a distance-weighted mean of cosine scores"
    )]
    fn orientation_score(
        &self,
        request: &AnalysisRequest,
        area: SearchArea,
        snapshot: &GeoSnapshot,
    ) -> f64 {
        let model = self.config.orientation;
        let origin = request.location();
        let (weighted, total_weight) = [PoiCategory::Buildings, PoiCategory::Residential]
            .into_iter()
            .flat_map(|category| snapshot.pois(category))
            .filter_map(|building| building.location.map(|at| (at, building.distance_m)))
            .fold((0.0, 0.0), |(weighted, total), (at, distance)| {
                let bearing = (at.x - origin.x).atan2(at.y - origin.y).to_degrees();
                let deviation = angular_deviation(bearing, model.ideal_bearing_deg);
                let score = (model.base + model.amplitude * deviation.to_radians().cos())
                    .clamp(model.base, 1.0);
                let weight = 1.0 / (1.0 + area.cap(distance) / model.distance_scale_m);
                (weighted + score * weight, total + weight)
            });
        if total_weight > 0.0 {
            weighted / total_weight
        } else {
            model.fallback
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "environmental quality averages two access curves"
    )]
    fn environmental_quality(&self, snapshot: &GeoSnapshot) -> f64 {
        let hospitals = self
            .config
            .hospitals
            .evaluate(count_as_f64(snapshot.count(PoiCategory::Hospitals)));
        let schools = self
            .config
            .schools
            .evaluate(count_as_f64(snapshot.count(PoiCategory::Schools)));
        (hospitals + schools) / 2.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "presence saturates linearly with the site count"
    )]
    fn spiritual_presence(&self, snapshot: &GeoSnapshot) -> f64 {
        (count_as_f64(snapshot.count(PoiCategory::Temples)) / self.config.temple_saturation).min(1.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct SearchArea {
    radius: f64,
    square_metres: f64,
    square_kilometres: f64,
}

impl SearchArea {
    #[expect(
        clippy::float_arithmetic,
        reason = "search area is a circle of the requested radius"
    )]
    fn new(radius_m: u32) -> Self {
        let radius = f64::from(radius_m);
        let square_metres = PI * radius * radius;
        Self {
            radius,
            square_metres,
            square_kilometres: square_metres / SQUARE_METRES_PER_KM2,
        }
    }

    /// Unknown or invalid distances count as the edge of the search area.
    const fn cap(self, distance: f64) -> f64 {
        if distance.is_finite() {
            distance.clamp(0.0, self.radius)
        } else {
            self.radius
        }
    }
}

fn nearest_distance(pois: &[NearbyPoi], area: SearchArea) -> Option<f64> {
    pois.iter()
        .map(|poi| area.cap(poi.distance_m))
        .min_by(f64::total_cmp)
}

/// Smallest angle between two bearings, in `0.0..=180.0` degrees.
#[expect(
    clippy::float_arithmetic,
    reason = "bearing differences wrap around the compass"
)]
fn angular_deviation(bearing: f64, ideal: f64) -> f64 {
    let difference = (bearing - ideal).rem_euclid(360.0);
    if difference > 180.0 {
        360.0 - difference
    } else {
        difference
    }
}

fn count_as_f64(count: usize) -> f64 {
    f64::from(u32::try_from(count).unwrap_or(u32::MAX))
}
