//! Facade crate for the Feng Shui scoring engine.
//!
//! This crate re-exports the core domain types and exposes the outdoor and
//! indoor scorers behind feature flags.

#![forbid(unsafe_code)]

pub use fengshui_core::{
    AnalysisRequest, AnalysisRequestError, AnalysisResult, Category, CategoryScores,
    DEFAULT_RADIUS_M, Element, ElementCounts, Energy, Feature, FeatureImportances, FeatureVector,
    FiveElements, GeoDataError, GeoDataProvider, GeoSnapshot, LocationEcho, MAX_SCORE, ModelError,
    NearbyPoi, PoiCategory, Prediction, RoadNetwork, StatisticalModel,
};

#[cfg(feature = "test-support")]
pub use fengshui_core::test_support;

#[cfg(feature = "outdoor")]
pub use fengshui_scorer::{
    AnalysisError, CachingAnalyzer, ConfigurationError, FeatureVectorBuilder, LinearModel,
    LocationAnalyzer, OutdoorAnalyzer, ScoreBlender, ScoringConfig, SnapshotFileProvider,
    TraditionalScorer, TraditionalScores, load_scoring_config, write_model_file,
};

#[cfg(feature = "indoor")]
pub use fengshui_indoor::{
    CatalogError, IndoorAnalysis, IndoorError, IndoorScorer, ItemCatalog, PlacedItem, RoomType,
};
