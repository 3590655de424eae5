//! Linear regression model and the statistical scoring policy.
//!
//! [`LinearModel`] is the bundled [`StatisticalModel`]. It is persisted as a
//! `bincode` artefact so a retrained model can be dropped in without a
//! rebuild. [`predict_or_fallback`] applies the degradation policy: any
//! failure is logged and treated as "no statistical score".

use std::io::{BufWriter, Write};

use bincode::Options;
use camino::Utf8Path;
use fengshui_core::{
    FEATURE_COUNT, Feature, FeatureImportances, FeatureVector, MAX_SCORE, ModelError, Prediction,
    StatisticalModel,
};
use serde::{Deserialize, Serialize};

use crate::bincode_options;

/// A linear regression over the seven features.
///
/// # Examples
/// ```
/// use fengshui_core::{Feature, FeatureVector, StatisticalModel};
/// use fengshui_scorer::LinearModel;
///
/// let model = LinearModel::reference();
/// let prediction = model.predict(&FeatureVector::zeroed().with(Feature::GreenRatio, 1.0))?;
/// assert!((prediction.score - 40.0).abs() < 1e-9);
/// # Ok::<(), fengshui_core::ModelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    coefficients: [f64; FEATURE_COUNT],
}

impl LinearModel {
    /// Build a model from its parameters.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidOutput`] when a parameter is not finite.
    pub fn new(intercept: f64, coefficients: [f64; FEATURE_COUNT]) -> Result<Self, ModelError> {
        Self {
            intercept,
            coefficients,
        }
        .checked()
    }

    /// The rule used to label the synthetic training set.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            intercept: 20.0,
            coefficients: [20.0, 15.0, -15.0, 0.0, 15.0, 15.0, 10.0],
        }
    }

    /// Intercept term.
    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficient for `feature`.
    #[must_use]
    pub const fn coefficient(&self, feature: Feature) -> f64 {
        self.coefficients[feature.index()]
    }

    /// Load a model artefact written by [`write_model_file`].
    ///
    /// # Errors
    /// Returns [`ModelError::Artefact`] when the file cannot be read or
    /// decoded and [`ModelError::InvalidOutput`] when it holds non-finite
    /// parameters.
    pub fn from_path(path: &Utf8Path) -> Result<Self, ModelError> {
        let bytes = fengshui_fs::read_bytes(path).map_err(|source| ModelError::Artefact {
            operation: "read",
            path: path.to_string(),
            message: source.to_string(),
        })?;
        let model: Self = bincode_options()
            .deserialize(&bytes)
            .map_err(|source| ModelError::Artefact {
                operation: "decode",
                path: path.to_string(),
                message: source.to_string(),
            })?;
        let checked = model.checked()?;
        log::info!("loaded linear model from {path}");
        Ok(checked)
    }

    fn checked(self) -> Result<Self, ModelError> {
        let finite = self.intercept.is_finite() && self.coefficients.iter().all(|c| c.is_finite());
        if finite {
            Ok(self)
        } else {
            Err(ModelError::InvalidOutput {
                reason: "model parameters must be finite".to_owned(),
            })
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "importances normalise absolute coefficients"
    )]
    fn importances(&self) -> FeatureImportances {
        let total: f64 = self.coefficients.iter().map(|c| c.abs()).sum();
        if total > 0.0 {
            FeatureImportances::new(self.coefficients.map(|c| c.abs() / total))
        } else {
            FeatureImportances::default()
        }
    }
}

impl Default for LinearModel {
    fn default() -> Self {
        Self::reference()
    }
}

impl StatisticalModel for LinearModel {
    #[expect(
        clippy::float_arithmetic,
        reason = "prediction is a dot product plus intercept"
    )]
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        let raw = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.as_array())
                .map(|(coefficient, value)| coefficient * value)
                .sum::<f64>();
        if !raw.is_finite() {
            return Err(ModelError::InvalidOutput {
                reason: format!("prediction {raw} is not finite"),
            });
        }
        Ok(Prediction {
            score: raw.clamp(0.0, MAX_SCORE),
            importances: self.importances(),
        })
    }
}

/// Persist `model` as a `bincode` artefact, creating parent directories.
///
/// # Errors
/// Returns [`ModelError::Artefact`] when the file cannot be created or
/// written.
pub fn write_model_file(path: &Utf8Path, model: &LinearModel) -> Result<(), ModelError> {
    let artefact_error = |operation: &'static str, message: String| ModelError::Artefact {
        operation,
        path: path.to_string(),
        message,
    };
    let file = fengshui_fs::create_file(path)
        .map_err(|source| artefact_error("create", source.to_string()))?;
    let mut writer = BufWriter::new(file);
    bincode_options()
        .serialize_into(&mut writer, model)
        .map_err(|source| artefact_error("encode", source.to_string()))?;
    writer
        .flush()
        .map_err(|source| artefact_error("write", source.to_string()))?;
    log::info!("wrote linear model to {path}");
    Ok(())
}

/// Run `model` if present, degrading to `None` on any failure.
///
/// A missing model yields `None` with a `debug` log. A [`ModelError`] or a
/// non-finite score yields `None` with a `warn` log. Either way the caller
/// uses the traditional score alone.
#[must_use]
pub fn predict_or_fallback(
    model: Option<&dyn StatisticalModel>,
    features: &FeatureVector,
) -> Option<Prediction> {
    let Some(active) = model else {
        log::debug!("no statistical model configured; using traditional score only");
        return None;
    };
    match active.predict(features) {
        Ok(prediction) if prediction.score.is_finite() => Some(Prediction {
            score: prediction.score.clamp(0.0, MAX_SCORE),
            importances: prediction.importances,
        }),
        Ok(prediction) => {
            log::warn!(
                "statistical model returned non-finite score {}; using traditional score only",
                prediction.score
            );
            None
        }
        Err(error) => {
            log::warn!("statistical scoring failed: {error}; using traditional score only");
            None
        }
    }
}
