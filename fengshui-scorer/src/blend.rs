//! Blend the traditional and statistical scores.

use fengshui_core::sanitise_score;
use serde::{Deserialize, Serialize};

use crate::ConfigurationError;
use crate::config::validate_weight_table;

/// Relative weighting between traditional and statistical scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendWeights {
    /// Weight of the traditional score.
    pub traditional: f64,
    /// Weight of the statistical score.
    pub statistical: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            traditional: 0.6,
            statistical: 0.4,
        }
    }
}

impl BlendWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] when a weight is negative or not
    /// finite, or when the weights do not sum to one.
    pub fn validate(self) -> Result<Self, ConfigurationError> {
        validate_weight_table(
            "blend",
            &[
                ("traditional", self.traditional),
                ("statistical", self.statistical),
            ],
        )?;
        Ok(self)
    }
}

/// Combine traditional and statistical scores into a final score.
///
/// # Examples
/// ```
/// use fengshui_scorer::ScoreBlender;
///
/// let blender = ScoreBlender::default();
/// assert_eq!(blender.blend(70.0, None), 70.0);
/// assert!((blender.blend(70.0, Some(50.0)) - 62.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreBlender {
    weights: BlendWeights,
}

impl ScoreBlender {
    /// Create a blender from validated weights.
    #[must_use]
    pub const fn new(weights: BlendWeights) -> Self {
        Self { weights }
    }

    /// Blend `traditional` with `statistical`.
    ///
    /// Without a usable statistical score the traditional score is returned
    /// unchanged.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "blending is a weighted average of two scores"
    )]
    pub fn blend(&self, traditional: f64, statistical: Option<f64>) -> f64 {
        match statistical {
            Some(score) if score.is_finite() => sanitise_score(
                self.weights.traditional * traditional + self.weights.statistical * score,
            ),
            _ => traditional,
        }
    }
}
