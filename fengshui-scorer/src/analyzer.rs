//! The outdoor analysis pipeline.
//!
//! `AnalysisRequest` → geo-data snapshot → feature vector → traditional and
//! statistical scores → blended, rounded [`AnalysisResult`].

use std::sync::Arc;

use fengshui_core::{
    AnalysisRequest, AnalysisResult, FeatureVector, GeoDataProvider, LocationEcho,
    StatisticalModel, round_score,
};

use crate::advice::{explanations, suggestions};
use crate::statistical::predict_or_fallback;
use crate::{
    AnalysisError, ConfigurationError, FeatureVectorBuilder, ScoreBlender, ScoringConfig,
    TraditionalScorer,
};

/// Analyse a location end to end.
pub trait LocationAnalyzer: Send + Sync {
    /// Produce the analysis for `request`.
    ///
    /// # Errors
    /// Returns [`AnalysisError`] when geo-data cannot be obtained.
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}

/// Outdoor analyzer over a geo-data provider and an optional model.
///
/// # Examples
/// ```
/// use fengshui_core::test_support::FixedGeoDataProvider;
/// use fengshui_core::{AnalysisRequest, GeoSnapshot};
/// use fengshui_scorer::{LocationAnalyzer, OutdoorAnalyzer};
///
/// let analyzer = OutdoorAnalyzer::new(FixedGeoDataProvider::new(GeoSnapshot::default()));
/// let request = AnalysisRequest::new(35.0, 139.0, 500).expect("valid request");
/// let result = analyzer.analyze(&request).expect("analysis succeeds");
/// assert_eq!(result.ai_score, None);
/// assert_eq!(result.final_score, result.traditional_score);
/// ```
pub struct OutdoorAnalyzer<P> {
    provider: P,
    builder: FeatureVectorBuilder,
    scorer: TraditionalScorer,
    blender: ScoreBlender,
    model: Option<Arc<dyn StatisticalModel>>,
}

impl<P> OutdoorAnalyzer<P> {
    /// Create an analyzer with default configuration and no model.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            builder: FeatureVectorBuilder::default(),
            scorer: TraditionalScorer::default(),
            blender: ScoreBlender::default(),
            model: None,
        }
    }

    /// Replace the scoring configuration after validating it.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] when `config` is invalid.
    pub fn with_config(self, config: ScoringConfig) -> Result<Self, ConfigurationError> {
        let validated = config.validate()?;
        Ok(Self {
            builder: FeatureVectorBuilder::new(validated.features),
            scorer: TraditionalScorer::new(validated.traditional),
            blender: ScoreBlender::new(validated.blend),
            ..self
        })
    }

    /// Attach a statistical model.
    #[must_use]
    pub fn with_model(mut self, model: Arc<dyn StatisticalModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Score an already-extracted feature vector.
    ///
    /// This is the pure half of the pipeline and never fails.
    #[must_use]
    pub fn analyze_features(
        &self,
        request: &AnalysisRequest,
        features: &FeatureVector,
    ) -> AnalysisResult {
        let traditional = self.scorer.score(features);
        let prediction = predict_or_fallback(self.model.as_deref(), features);
        let ai_score = prediction.map(|found| found.score);
        let final_score = self.blender.blend(traditional.overall, ai_score);
        let explanation_lines =
            explanations(final_score, &traditional, features, prediction.as_ref());
        let suggestion_lines = suggestions(&traditional);
        AnalysisResult {
            final_score: round_score(final_score),
            traditional_score: round_score(traditional.overall),
            ai_score: ai_score.map(round_score),
            category_scores: traditional.categories.map(round_score),
            yin_yang_balance: round_score(traditional.yin_yang_balance),
            five_elements: traditional.five_elements.map(round_score),
            qi_flow_score: round_score(traditional.qi_flow),
            explanations: explanation_lines,
            suggestions: suggestion_lines,
            location: LocationEcho::from(request),
        }
    }
}

impl<P: GeoDataProvider> LocationAnalyzer for OutdoorAnalyzer<P> {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        log::info!(
            "analysing ({}, {}) within {} m",
            request.latitude(),
            request.longitude(),
            request.radius_m()
        );
        let snapshot = self
            .provider
            .fetch(request)
            .map_err(|source| AnalysisError::GeoData {
                latitude: request.latitude(),
                longitude: request.longitude(),
                source,
            })?;
        let features = self.builder.build(request, &snapshot);
        let result = self.analyze_features(request, &features);
        log::info!(
            "analysis complete: final {:.2}, traditional {:.2}",
            result.final_score,
            result.traditional_score
        );
        Ok(result)
    }
}

impl<A: LocationAnalyzer + ?Sized> LocationAnalyzer for Arc<A> {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        (**self).analyze(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlendWeights, LinearModel};
    use fengshui_core::test_support::{
        ConstantModel, FailingGeoDataProvider, FixedGeoDataProvider, UnavailableModel,
        leafy_waterfront_features,
    };
    use fengshui_core::{GeoSnapshot, NearbyPoi, PoiCategory};
    use rstest::{fixture, rstest};

    #[fixture]
    fn request() -> AnalysisRequest {
        AnalysisRequest::new(35.6762, 139.6503, 500).expect("valid request")
    }

    fn analyzer() -> OutdoorAnalyzer<FixedGeoDataProvider> {
        OutdoorAnalyzer::new(FixedGeoDataProvider::default())
    }

    #[rstest]
    fn blends_statistical_score(request: AnalysisRequest) {
        let analyzer = analyzer().with_model(Arc::new(ConstantModel::new(50.0)));
        let result = analyzer.analyze_features(&request, &leafy_waterfront_features());
        let expected = 0.6 * result.traditional_score + 0.4 * 50.0;
        assert_eq!(result.ai_score, Some(50.0));
        assert!((result.final_score - expected).abs() <= 0.01);
    }

    #[rstest]
    fn failing_model_falls_back_to_traditional(request: AnalysisRequest) {
        let analyzer = analyzer().with_model(Arc::new(UnavailableModel));
        let result = analyzer.analyze_features(&request, &leafy_waterfront_features());
        assert_eq!(result.ai_score, None);
        assert_eq!(result.final_score, result.traditional_score);
    }

    #[rstest]
    fn scores_are_rounded_to_two_decimals(request: AnalysisRequest) {
        let analyzer = analyzer().with_model(Arc::new(LinearModel::reference()));
        let result = analyzer.analyze_features(&request, &leafy_waterfront_features());
        for score in [
            result.final_score,
            result.traditional_score,
            result.yin_yang_balance,
            result.qi_flow_score,
            result.five_elements.overall_score,
        ] {
            assert_eq!(round_score(score), score);
        }
    }

    #[rstest]
    fn provider_failure_is_fatal(request: AnalysisRequest) {
        let analyzer = OutdoorAnalyzer::new(FailingGeoDataProvider);
        let error = analyzer.analyze(&request).expect_err("provider failure");
        assert!(matches!(error, AnalysisError::GeoData { .. }));
    }

    #[rstest]
    fn empty_snapshot_still_produces_advice(request: AnalysisRequest) {
        let result = analyzer().analyze(&request).expect("analysis succeeds");
        assert!(!result.explanations.is_empty());
        assert!(!result.suggestions.is_empty());
        assert_eq!(result.location.radius, 500);
    }

    #[rstest]
    fn snapshot_features_reach_the_result(request: AnalysisRequest) {
        let snapshot = GeoSnapshot::default()
            .with_poi(PoiCategory::Temples, NearbyPoi::at_distance(120.0))
            .with_poi(PoiCategory::Temples, NearbyPoi::at_distance(300.0));
        let result = OutdoorAnalyzer::new(FixedGeoDataProvider::new(snapshot))
            .analyze(&request)
            .expect("analysis succeeds");
        assert_eq!(
            result
                .category_scores
                .get(fengshui_core::Category::SpiritualEnergy),
            100.0
        );
    }

    #[rstest]
    fn invalid_config_is_rejected() {
        let config = ScoringConfig {
            blend: BlendWeights {
                traditional: 1.0,
                statistical: 1.0,
            },
            ..ScoringConfig::default()
        };
        assert!(analyzer().with_config(config).is_err());
    }
}
