//! Rule-based scoring of a feature vector.
//!
//! The traditional scorer derives seven category scores, a Yin-Yang balance,
//! Five Elements harmony and a Qi flow score, then combines them with
//! [`TraditionalWeights`]. It is a pure function of the feature vector.

use fengshui_core::{
    Category, CategoryScores, Energy, Feature, FeatureVector, FiveElements, MAX_SCORE,
    sanitise_score,
};
use serde::{Deserialize, Serialize};

use crate::ConfigurationError;
use crate::config::validate_weight_table;

/// Shapes of the per-category curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCurves {
    /// Green ratio giving a full green-space score.
    pub green_saturation: f64,
    /// Lower edge of the ideal road connectivity band.
    pub road_ideal_low: f64,
    /// Upper edge of the ideal road connectivity band.
    pub road_ideal_high: f64,
    /// Road score at the lower edge of the ideal band.
    pub road_band_floor: f64,
    /// Road score lost between the upper edge and full connectivity.
    pub road_congestion_drop: f64,
}

impl Default for CategoryCurves {
    fn default() -> Self {
        Self {
            green_saturation: 0.3,
            road_ideal_low: 0.3,
            road_ideal_high: 0.7,
            road_band_floor: 70.0,
            road_congestion_drop: 30.0,
        }
    }
}

impl CategoryCurves {
    fn validate(self) -> Result<Self, ConfigurationError> {
        let Self {
            green_saturation,
            road_ideal_low,
            road_ideal_high,
            ..
        } = self;
        let ordered = 0.0 < road_ideal_low && road_ideal_low < road_ideal_high && road_ideal_high < 1.0;
        if !(green_saturation.is_finite() && green_saturation > 0.0) {
            return Err(ConfigurationError::InvalidParameter {
                name: "curves.green_saturation",
                value: green_saturation,
            });
        }
        if !ordered {
            return Err(ConfigurationError::InvalidParameter {
                name: "curves.road_ideal_high",
                value: road_ideal_high,
            });
        }
        Ok(self)
    }
}

/// Yin and Yang composition and the ideal balance band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YinYangConfig {
    /// Yin contribution of green space.
    pub yin_green: f64,
    /// Yin contribution of water.
    pub yin_water: f64,
    /// Yin contribution of spiritual presence.
    pub yin_spiritual: f64,
    /// Yang contribution of building density.
    pub yang_density: f64,
    /// Yang contribution of road density.
    pub yang_roads: f64,
    /// Lowest ideal Yang share.
    pub band_low: f64,
    /// Highest ideal Yang share.
    pub band_high: f64,
    /// Score at the largest possible imbalance.
    pub floor: f64,
}

impl Default for YinYangConfig {
    fn default() -> Self {
        Self {
            yin_green: 0.4,
            yin_water: 0.4,
            yin_spiritual: 0.2,
            yang_density: 0.5,
            yang_roads: 0.5,
            band_low: 0.4,
            band_high: 0.6,
            floor: 20.0,
        }
    }
}

impl YinYangConfig {
    fn validate(self) -> Result<Self, ConfigurationError> {
        validate_weight_table(
            "yin",
            &[
                ("yin_green", self.yin_green),
                ("yin_water", self.yin_water),
                ("yin_spiritual", self.yin_spiritual),
            ],
        )?;
        validate_weight_table(
            "yang",
            &[
                ("yang_density", self.yang_density),
                ("yang_roads", self.yang_roads),
            ],
        )?;
        if !(0.0 < self.band_low && self.band_low <= self.band_high && self.band_high < 1.0) {
            return Err(ConfigurationError::InvalidParameter {
                name: "yin_yang.band_high",
                value: self.band_high,
            });
        }
        if !(0.0..=MAX_SCORE).contains(&self.floor) {
            return Err(ConfigurationError::InvalidParameter {
                name: "yin_yang.floor",
                value: self.floor,
            });
        }
        Ok(self)
    }
}

/// Qi flow composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QiFlowConfig {
    /// Building density at which circulation peaks.
    pub density_peak: f64,
    /// Weight of the density component.
    pub density_weight: f64,
    /// Weight of road accessibility.
    pub road_weight: f64,
    /// Weight of green space.
    pub green_weight: f64,
    /// Weight of the water element.
    pub water_weight: f64,
}

impl Default for QiFlowConfig {
    fn default() -> Self {
        Self {
            density_peak: 0.35,
            density_weight: 0.3,
            road_weight: 0.2,
            green_weight: 0.3,
            water_weight: 0.2,
        }
    }
}

impl QiFlowConfig {
    fn validate(self) -> Result<Self, ConfigurationError> {
        validate_weight_table(
            "qi_flow",
            &[
                ("density_weight", self.density_weight),
                ("road_weight", self.road_weight),
                ("green_weight", self.green_weight),
                ("water_weight", self.water_weight),
            ],
        )?;
        if !(0.0 < self.density_peak && self.density_peak < 1.0) {
            return Err(ConfigurationError::InvalidParameter {
                name: "qi_flow.density_peak",
                value: self.density_peak,
            });
        }
        Ok(self)
    }
}

/// Weights combining sub-scores into the traditional score. Must sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraditionalWeights {
    /// Weight of [`Category::GreenSpace`].
    pub green_space: f64,
    /// Weight of [`Category::WaterElement`].
    pub water_element: f64,
    /// Weight of [`Category::BuildingHarmony`].
    pub building_harmony: f64,
    /// Weight of [`Category::RoadAccessibility`].
    pub road_accessibility: f64,
    /// Weight of [`Category::Orientation`].
    pub orientation: f64,
    /// Weight of [`Category::EnvironmentalQuality`].
    pub environmental_quality: f64,
    /// Weight of [`Category::SpiritualEnergy`].
    pub spiritual_energy: f64,
    /// Weight of the Yin-Yang balance.
    pub yin_yang: f64,
    /// Weight of Five Elements harmony.
    pub five_elements: f64,
    /// Weight of Qi flow.
    pub qi_flow: f64,
}

impl Default for TraditionalWeights {
    fn default() -> Self {
        Self {
            green_space: 0.15,
            water_element: 0.15,
            building_harmony: 0.15,
            road_accessibility: 0.10,
            orientation: 0.10,
            environmental_quality: 0.15,
            spiritual_energy: 0.10,
            yin_yang: 0.04,
            five_elements: 0.03,
            qi_flow: 0.03,
        }
    }
}

impl TraditionalWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidWeight`] for a negative or
    /// non-finite weight and [`ConfigurationError::WeightsDoNotSumToOne`]
    /// when the total differs from one by more than `1e-6`.
    pub fn validate(self) -> Result<Self, ConfigurationError> {
        validate_weight_table("traditional", &self.entries())?;
        Ok(self)
    }

    const fn entries(self) -> [(&'static str, f64); 10] {
        [
            ("green_space", self.green_space),
            ("water_element", self.water_element),
            ("building_harmony", self.building_harmony),
            ("road_accessibility", self.road_accessibility),
            ("orientation", self.orientation),
            ("environmental_quality", self.environmental_quality),
            ("spiritual_energy", self.spiritual_energy),
            ("yin_yang", self.yin_yang),
            ("five_elements", self.five_elements),
            ("qi_flow", self.qi_flow),
        ]
    }

    const fn category(self, category: Category) -> f64 {
        match category {
            Category::GreenSpace => self.green_space,
            Category::WaterElement => self.water_element,
            Category::BuildingHarmony => self.building_harmony,
            Category::RoadAccessibility => self.road_accessibility,
            Category::Orientation => self.orientation,
            Category::EnvironmentalQuality => self.environmental_quality,
            Category::SpiritualEnergy => self.spiritual_energy,
        }
    }
}

/// Everything the traditional scorer configures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraditionalConfig {
    /// Per-category curves.
    pub curves: CategoryCurves,
    /// Yin-Yang composition.
    pub yin_yang: YinYangConfig,
    /// Qi flow composition.
    pub qi_flow: QiFlowConfig,
    /// Final weighting.
    pub weights: TraditionalWeights,
}

impl TraditionalConfig {
    /// Validate every table.
    ///
    /// # Errors
    /// Returns the first [`ConfigurationError`] found.
    pub fn validate(self) -> Result<Self, ConfigurationError> {
        self.curves.validate()?;
        self.yin_yang.validate()?;
        self.qi_flow.validate()?;
        self.weights.validate()?;
        Ok(self)
    }
}

/// Output of [`TraditionalScorer::score`]. All scores lie in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraditionalScores {
    /// Per-category scores.
    pub categories: CategoryScores,
    /// Yin-Yang balance.
    pub yin_yang_balance: f64,
    /// Share of Yang in `0.0..=1.0`; `None` when neither energy is present.
    pub yang_share: Option<f64>,
    /// Energy exceeding the ideal band, if any.
    pub dominant_energy: Option<Energy>,
    /// Five Elements harmony.
    pub five_elements: FiveElements,
    /// Qi flow.
    pub qi_flow: f64,
    /// Weighted traditional score.
    pub overall: f64,
}

/// Score feature vectors with traditional rules.
///
/// # Examples
/// ```
/// use fengshui_core::{Category, Feature, FeatureVector};
/// use fengshui_scorer::TraditionalScorer;
///
/// let scorer = TraditionalScorer::default();
/// let scores = scorer.score(&FeatureVector::zeroed().with(Feature::GreenRatio, 0.3));
/// assert_eq!(scores.categories.get(Category::GreenSpace), 100.0);
/// assert!((0.0..=100.0).contains(&scores.overall));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TraditionalScorer {
    config: TraditionalConfig,
}

impl TraditionalScorer {
    /// Create a scorer from a validated configuration.
    #[must_use]
    pub const fn new(config: TraditionalConfig) -> Self {
        Self { config }
    }

    /// Score `features`.
    #[must_use]
    pub fn score(&self, features: &FeatureVector) -> TraditionalScores {
        let categories = self.category_scores(features);
        let yang_share = self.yang_share(features);
        let yin_yang_balance = self.yin_yang_balance(yang_share);
        let dominant_energy = self.dominant_energy(yang_share);
        let five_elements = Self::five_elements(features, &categories);
        let qi_flow = self.qi_flow(features, &categories);
        let overall = self.overall(&categories, yin_yang_balance, &five_elements, qi_flow);
        log::debug!(
            "traditional score {overall:.2} (yin-yang {yin_yang_balance:.2}, elements {:.2}, qi {qi_flow:.2})",
            five_elements.overall_score
        );
        TraditionalScores {
            categories,
            yin_yang_balance,
            yang_share,
            dominant_energy,
            five_elements,
            qi_flow,
            overall,
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "category curves scale unit features onto 0..=100"
    )]
    fn category_scores(&self, features: &FeatureVector) -> CategoryScores {
        let curves = self.config.curves;
        let green = features.get(Feature::GreenRatio);
        let density = features.get(Feature::BuildingDensity);
        Category::ALL
            .into_iter()
            .map(|category| {
                let score = match category {
                    Category::GreenSpace => (green / curves.green_saturation).min(1.0) * MAX_SCORE,
                    Category::WaterElement => features.get(Feature::WaterProximity) * MAX_SCORE,
                    Category::BuildingHarmony => (1.0 - density) * MAX_SCORE,
                    Category::RoadAccessibility => {
                        road_accessibility(curves, features.get(Feature::RoadIntersectionDensity))
                    }
                    Category::Orientation => features.get(Feature::OrientationScore) * MAX_SCORE,
                    Category::EnvironmentalQuality => {
                        features.get(Feature::EnvironmentalQuality) * MAX_SCORE
                    }
                    Category::SpiritualEnergy => {
                        features.get(Feature::SpiritualPresence) * MAX_SCORE
                    }
                };
                (category, score)
            })
            .collect()
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "yin and yang are weighted sums of features"
    )]
    fn yang_share(&self, features: &FeatureVector) -> Option<f64> {
        let balance = self.config.yin_yang;
        let yin = balance.yin_green * features.get(Feature::GreenRatio)
            + balance.yin_water * features.get(Feature::WaterProximity)
            + balance.yin_spiritual * features.get(Feature::SpiritualPresence);
        let yang = balance.yang_density * features.get(Feature::BuildingDensity)
            + balance.yang_roads * features.get(Feature::RoadIntersectionDensity);
        let total = yin + yang;
        (total > 0.0).then(|| yang / total)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "balance decays linearly outside the ideal band"
    )]
    fn yin_yang_balance(&self, yang_share: Option<f64>) -> f64 {
        let balance = self.config.yin_yang;
        let Some(share) = yang_share else {
            return sanitise_score(balance.floor);
        };
        let outside = if share < balance.band_low {
            balance.band_low - share
        } else if share > balance.band_high {
            share - balance.band_high
        } else {
            0.0
        };
        let widest = balance.band_low.max(1.0 - balance.band_high);
        sanitise_score(MAX_SCORE - (MAX_SCORE - balance.floor) * outside / widest)
    }

    fn dominant_energy(&self, yang_share: Option<f64>) -> Option<Energy> {
        let balance = self.config.yin_yang;
        yang_share.and_then(|share| {
            if share > balance.band_high {
                Some(Energy::Yang)
            } else if share < balance.band_low {
                Some(Energy::Yin)
            } else {
                None
            }
        })
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "element scores scale unit features onto 0..=100"
    )]
    fn five_elements(features: &FeatureVector, categories: &CategoryScores) -> FiveElements {
        FiveElements::from_scores(
            features.get(Feature::GreenRatio) * MAX_SCORE,
            features.get(Feature::OrientationScore) * MAX_SCORE,
            categories.get(Category::BuildingHarmony),
            categories.get(Category::RoadAccessibility),
            features.get(Feature::WaterProximity) * MAX_SCORE,
        )
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "qi flow is a weighted sum with a tent-shaped density term"
    )]
    fn qi_flow(&self, features: &FeatureVector, categories: &CategoryScores) -> f64 {
        let qi = self.config.qi_flow;
        let density = features.get(Feature::BuildingDensity);
        let spread = qi.density_peak.max(1.0 - qi.density_peak);
        let density_component = MAX_SCORE * (1.0 - (density - qi.density_peak).abs() / spread).max(0.0);
        sanitise_score(
            qi.density_weight * density_component
                + qi.road_weight * categories.get(Category::RoadAccessibility)
                + qi.green_weight * categories.get(Category::GreenSpace)
                + qi.water_weight * categories.get(Category::WaterElement),
        )
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the traditional score is a weighted sum of sub-scores"
    )]
    fn overall(
        &self,
        categories: &CategoryScores,
        yin_yang_balance: f64,
        five_elements: &FiveElements,
        qi_flow: f64,
    ) -> f64 {
        let weights = self.config.weights;
        let category_part: f64 = categories
            .iter()
            .map(|(category, score)| weights.category(category) * score)
            .sum();
        sanitise_score(
            category_part
                + weights.yin_yang * yin_yang_balance
                + weights.five_elements * five_elements.overall_score
                + weights.qi_flow * qi_flow,
        )
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "road accessibility is piecewise linear in connectivity"
)]
fn road_accessibility(curves: CategoryCurves, connectivity: f64) -> f64 {
    let low = curves.road_ideal_low;
    let high = curves.road_ideal_high;
    let floor = curves.road_band_floor;
    if connectivity < low {
        connectivity / low * floor
    } else if connectivity < high {
        floor + (connectivity - low) / (high - low) * (MAX_SCORE - floor)
    } else {
        MAX_SCORE - (connectivity - high) / (1.0 - high) * curves.road_congestion_drop
    }
}
