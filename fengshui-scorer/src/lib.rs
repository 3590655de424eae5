//! Outdoor Feng Shui scoring.
//!
//! The crate turns raw geo-data into an [`AnalysisResult`]:
//! - **Feature extraction** ([`FeatureVectorBuilder`]) maps nearby points of
//!   interest and road counts onto seven normalised features.
//! - **Traditional scoring** ([`TraditionalScorer`]) derives category scores,
//!   Yin-Yang balance, Five Elements harmony and Qi flow.
//! - **Statistical scoring** ([`LinearModel`]) predicts a score from the same
//!   features; any [`StatisticalModel`] can be substituted.
//! - **Blending and advice** ([`ScoreBlender`], [`advice`]) combine both
//!   scores and produce explanations and suggestions.
//!
//! [`OutdoorAnalyzer`] wires these together behind a
//! [`GeoDataProvider`](fengshui_core::GeoDataProvider), and
//! [`CachingAnalyzer`] memoises results per request fingerprint.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use camino::Utf8Path;
//! use fengshui_core::AnalysisRequest;
//! use fengshui_scorer::{LinearModel, LocationAnalyzer, OutdoorAnalyzer, SnapshotFileProvider};
//!
//! let provider = SnapshotFileProvider::from_path(Utf8Path::new("data/shinjuku.json"))
//!     .expect("load snapshot");
//! let model = LinearModel::from_path(Utf8Path::new("artefacts/model.bin")).expect("load model");
//! let analyzer = OutdoorAnalyzer::new(provider).with_model(Arc::new(model));
//! let request = AnalysisRequest::new(35.6938, 139.7034, 500).expect("valid request");
//! let result = analyzer.analyze(&request).expect("analysis succeeds");
//! println!("{}", result.final_score);
//! ```
//!
//! [`AnalysisResult`]: fengshui_core::AnalysisResult
//! [`StatisticalModel`]: fengshui_core::StatisticalModel

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod advice;
mod analyzer;
mod blend;
mod cache;
mod config;
mod error;
mod features;
mod snapshot;
mod statistical;
mod traditional;

pub use analyzer::{LocationAnalyzer, OutdoorAnalyzer};
pub use blend::{BlendWeights, ScoreBlender};
pub use cache::{CachingAnalyzer, DEFAULT_CACHE_CAPACITY, Fingerprint};
pub use config::{ScoringConfig, WEIGHT_SUM_TOLERANCE, load_scoring_config};
pub use error::{AnalysisError, ConfigurationError};
pub use features::{
    AmenityCurve, DensityCurve, FeatureConfig, FeatureVectorBuilder, OrientationModel, ParkModel,
    RoadCurve, WaterCurve,
};
pub use snapshot::SnapshotFileProvider;
pub use statistical::{LinearModel, predict_or_fallback, write_model_file};
pub use traditional::{
    CategoryCurves, QiFlowConfig, TraditionalConfig, TraditionalScorer, TraditionalScores,
    TraditionalWeights, YinYangConfig,
};

/// Bincode options used for model artefacts.
pub(crate) fn bincode_options() -> impl bincode::Options {
    bincode::DefaultOptions::new()
}
