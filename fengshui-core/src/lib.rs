//! Core domain types for the Feng Shui scoring engine.
//!
//! The crate holds the symbolic model shared by the outdoor and indoor
//! pipelines: the normalised feature vector, category and element scores,
//! validated analysis requests, and the collaborator traits that supply raw
//! geo-data and statistical predictions. Scoring itself lives in
//! `fengshui-scorer` and `fengshui-indoor`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod element;
pub mod feature;
pub mod geodata;
pub mod model;
pub mod request;
pub mod result;
pub mod score;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use category::{CATEGORY_COUNT, Category, CategoryScores};
pub use element::{Element, ElementCounts, Energy, FiveElements};
pub use feature::{FEATURE_COUNT, Feature, FeatureImportances, FeatureVector};
pub use geodata::{GeoDataError, GeoDataProvider, GeoSnapshot, NearbyPoi, PoiCategory, RoadNetwork};
pub use model::{ModelError, Prediction, StatisticalModel};
pub use request::{AnalysisRequest, AnalysisRequestError, DEFAULT_RADIUS_M};
pub use result::{AnalysisResult, LocationEcho};
pub use score::{MAX_SCORE, clamp_unit, round_score, sanitise_score};
