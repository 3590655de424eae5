//! The assembled outdoor analysis result.

use crate::{AnalysisRequest, CategoryScores, FiveElements};

/// The analysed location, echoed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocationEcho {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Search radius in metres.
    pub radius: u32,
}

impl From<&AnalysisRequest> for LocationEcho {
    fn from(request: &AnalysisRequest) -> Self {
        Self {
            latitude: request.latitude(),
            longitude: request.longitude(),
            radius: request.radius_m(),
        }
    }
}

/// Complete outdoor analysis.
///
/// Every score lies in `0.0..=100.0` and is rounded to two decimals.
/// `ai_score` is `None` when statistical scoring was unavailable, in which
/// case `final_score` equals `traditional_score`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnalysisResult {
    /// Blended score.
    pub final_score: f64,
    /// Rule-based score.
    pub traditional_score: f64,
    /// Statistical score, when a model produced one.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub ai_score: Option<f64>,
    /// Per-category scores.
    pub category_scores: CategoryScores,
    /// Yin-Yang balance score.
    pub yin_yang_balance: f64,
    /// Five Elements harmony.
    pub five_elements: FiveElements,
    /// Qi flow score.
    pub qi_flow_score: f64,
    /// Human-readable explanation sentences.
    pub explanations: Vec<String>,
    /// Improvement suggestions; never empty.
    pub suggestions: Vec<String>,
    /// The analysed location.
    pub location: LocationEcho,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use rstest::rstest;

    fn result(ai_score: Option<f64>) -> AnalysisResult {
        let request = AnalysisRequest::new(35.0, 139.0, 500).expect("valid request");
        AnalysisResult {
            final_score: 60.0,
            traditional_score: 60.0,
            ai_score,
            category_scores: CategoryScores::default(),
            yin_yang_balance: 20.0,
            five_elements: FiveElements::default(),
            qi_flow_score: 0.0,
            explanations: vec![],
            suggestions: vec!["Keep it up.".to_owned()],
            location: LocationEcho::from(&request),
        }
    }

    #[rstest]
    fn omits_absent_ai_score() {
        let json = serde_json::to_value(result(None)).expect("encode result");
        assert!(json.get("ai_score").is_none());
        assert_eq!(json["location"]["radius"], 500);
    }

    #[rstest]
    fn includes_present_ai_score() {
        let json = serde_json::to_value(result(Some(71.5))).expect("encode result");
        assert_eq!(json["ai_score"], 71.5);
    }
}
