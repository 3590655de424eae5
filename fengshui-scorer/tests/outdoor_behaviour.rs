#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for outdoor location analysis.

use std::cell::RefCell;
use std::sync::Arc;

use fengshui_core::test_support::{FailingGeoDataProvider, leafy_waterfront_features};
use fengshui_core::{AnalysisRequest, AnalysisResult, FeatureVector, StatisticalModel};
use fengshui_scorer::{AnalysisError, LinearModel, LocationAnalyzer, OutdoorAnalyzer};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    request: AnalysisRequest,
    features: RefCell<Option<FeatureVector>>,
    model: RefCell<Option<Arc<dyn StatisticalModel>>>,
    result: RefCell<Option<AnalysisResult>>,
    failure: RefCell<Option<AnalysisError>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        request: AnalysisRequest::new(35.6762, 139.6503, 500).expect("valid request"),
        features: RefCell::new(None),
        model: RefCell::new(None),
        result: RefCell::new(None),
        failure: RefCell::new(None),
    }
}

#[given("a leafy waterfront neighbourhood")]
fn leafy_waterfront(context: &TestContext) {
    *context.features.borrow_mut() = Some(leafy_waterfront_features());
}

#[given("no statistical model is available")]
fn no_model(context: &TestContext) {
    *context.model.borrow_mut() = None;
}

#[given("the reference linear model")]
fn reference_model(context: &TestContext) {
    *context.model.borrow_mut() = Some(Arc::new(LinearModel::reference()));
}

#[given("a geo-data service that is unreachable")]
fn unreachable_service(context: &TestContext) {
    let _ = context;
}

#[when("I analyse the neighbourhood")]
fn analyse_neighbourhood(context: &TestContext) {
    let features = context
        .features
        .borrow()
        .expect("features must be initialised");
    let mut analyzer = OutdoorAnalyzer::new(FailingGeoDataProvider);
    if let Some(model) = context.model.borrow().as_ref() {
        analyzer = analyzer.with_model(Arc::clone(model));
    }
    let result = analyzer.analyze_features(&context.request, &features);
    *context.result.borrow_mut() = Some(result);
}

#[when("I analyse the location")]
fn analyse_location(context: &TestContext) {
    let analyzer = OutdoorAnalyzer::new(FailingGeoDataProvider);
    match analyzer.analyze(&context.request) {
        Ok(result) => *context.result.borrow_mut() = Some(result),
        Err(error) => *context.failure.borrow_mut() = Some(error),
    }
}

#[then("the traditional score exceeds 70")]
fn traditional_exceeds_seventy(context: &TestContext) {
    let result = recorded(context);
    assert!(
        result.traditional_score > 70.0,
        "traditional score was {}",
        result.traditional_score
    );
}

#[then("the final score equals the traditional score")]
fn final_equals_traditional(context: &TestContext) {
    let result = recorded(context);
    assert_eq!(result.ai_score, None);
    assert_eq!(result.final_score, result.traditional_score);
}

#[then("the explanations praise the green space")]
fn explanations_praise_green(context: &TestContext) {
    let result = recorded(context);
    assert!(
        result
            .explanations
            .iter()
            .any(|line| line.starts_with("Green space is strong")),
        "explanations were {:?}",
        result.explanations
    );
}

#[then("the statistical score is 69.5")]
fn statistical_score(context: &TestContext) {
    let result = recorded(context);
    assert_eq!(result.ai_score, Some(69.5));
}

#[then("the final score blends both scores")]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating point values"
)]
fn final_blends(context: &TestContext) {
    let result = recorded(context);
    let ai = result.ai_score.expect("statistical score should be present");
    let expected = 0.6 * result.traditional_score + 0.4 * ai;
    assert!(
        (result.final_score - expected).abs() <= 0.01,
        "final score was {}, expected {expected}",
        result.final_score
    );
}

#[then("the analysis fails with a geo-data error")]
fn fails_with_geodata(context: &TestContext) {
    assert!(context.result.borrow().is_none());
    let failure = context.failure.borrow();
    assert!(
        matches!(failure.as_ref(), Some(AnalysisError::GeoData { .. })),
        "expected a geo-data failure, got {failure:?}"
    );
}

fn recorded(context: &TestContext) -> AnalysisResult {
    context
        .result
        .borrow()
        .as_ref()
        .cloned()
        .expect("analysis result should be recorded")
}

#[scenario(path = "tests/features/outdoor_analysis.feature", index = 0)]
fn leafy_waterfront_without_model(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/outdoor_analysis.feature", index = 1)]
fn reference_model_is_blended(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/outdoor_analysis.feature", index = 2)]
fn unreachable_geodata_is_fatal(context: TestContext) {
    let _ = context;
}
