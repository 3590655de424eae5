//! Deterministic collaborators for unit and behaviour tests.

use crate::{
    AnalysisRequest, Feature, FeatureImportances, FeatureVector, GeoDataError, GeoDataProvider,
    GeoSnapshot, ModelError, Prediction, StatisticalModel,
};

/// `GeoDataProvider` returning the same snapshot for every request.
#[derive(Debug, Clone, Default)]
pub struct FixedGeoDataProvider {
    snapshot: GeoSnapshot,
}

impl FixedGeoDataProvider {
    /// Serve `snapshot` for every request.
    #[must_use]
    pub const fn new(snapshot: GeoSnapshot) -> Self {
        Self { snapshot }
    }
}

impl GeoDataProvider for FixedGeoDataProvider {
    fn fetch(&self, _request: &AnalysisRequest) -> Result<GeoSnapshot, GeoDataError> {
        Ok(self.snapshot.clone())
    }
}

/// `GeoDataProvider` that always reports the source as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingGeoDataProvider;

impl GeoDataProvider for FailingGeoDataProvider {
    fn fetch(&self, _request: &AnalysisRequest) -> Result<GeoSnapshot, GeoDataError> {
        Err(GeoDataError::Unavailable {
            reason: "map service offline".to_owned(),
        })
    }
}

/// `StatisticalModel` returning a fixed score with uniform importances.
#[derive(Debug, Clone, Copy)]
pub struct ConstantModel {
    score: f64,
    importances: FeatureImportances,
}

impl ConstantModel {
    /// Predict `score` for every vector.
    #[must_use]
    pub fn new(score: f64) -> Self {
        Self {
            score,
            importances: FeatureImportances::new([1.0 / 7.0; 7]),
        }
    }

    /// Replace the reported importances.
    #[must_use]
    pub const fn with_importances(mut self, importances: FeatureImportances) -> Self {
        self.importances = importances;
        self
    }
}

impl StatisticalModel for ConstantModel {
    fn predict(&self, _features: &FeatureVector) -> Result<Prediction, ModelError> {
        Ok(Prediction {
            score: self.score,
            importances: self.importances,
        })
    }
}

/// `StatisticalModel` that is never loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableModel;

impl StatisticalModel for UnavailableModel {
    fn predict(&self, _features: &FeatureVector) -> Result<Prediction, ModelError> {
        Err(ModelError::NotLoaded)
    }
}

/// A green, watered, moderately built-up neighbourhood.
#[must_use]
pub fn leafy_waterfront_features() -> FeatureVector {
    FeatureVector::zeroed()
        .with(Feature::GreenRatio, 0.8)
        .with(Feature::WaterProximity, 0.8)
        .with(Feature::BuildingDensity, 0.3)
        .with(Feature::RoadIntersectionDensity, 0.3)
        .with(Feature::OrientationScore, 0.7)
        .with(Feature::EnvironmentalQuality, 0.7)
        .with(Feature::SpiritualPresence, 0.5)
}
