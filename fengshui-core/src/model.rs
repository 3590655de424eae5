//! Statistical model seam.
//!
//! The engine never assumes a model family. Anything that maps a
//! [`FeatureVector`] onto a `0.0..=100.0` score with per-feature importances
//! can stand in, so a trained regression can replace the bundled linear model
//! without touching the scorers.

use thiserror::Error;

use crate::{FeatureImportances, FeatureVector};

/// Output of a [`StatisticalModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Prediction {
    /// Predicted score in `0.0..=100.0`.
    pub score: f64,
    /// Global importance of each feature.
    pub importances: FeatureImportances,
}

/// Errors produced while loading or running a statistical model.
///
/// None of these are fatal to an analysis: callers fall back to the
/// traditional score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// No model has been configured or loaded.
    #[error("statistical model is not loaded")]
    NotLoaded,
    /// The model produced a non-finite or otherwise unusable output.
    #[error("statistical model produced an invalid output: {reason}")]
    InvalidOutput {
        /// Description of the rejected output.
        reason: String,
    },
    /// The model artefact could not be read or written.
    #[error("failed to {operation} model artefact at {path}: {message}")]
    Artefact {
        /// Operation that failed, for example `read` or `decode`.
        operation: &'static str,
        /// Location of the artefact.
        path: String,
        /// Underlying failure.
        message: String,
    },
}

/// Predict a score from a feature vector.
///
/// Implementations must be deterministic for a given vector.
///
/// # Examples
/// ```
/// use fengshui_core::{FeatureImportances, FeatureVector, ModelError, Prediction, StatisticalModel};
///
/// struct Flat;
///
/// impl StatisticalModel for Flat {
///     fn predict(&self, _features: &FeatureVector) -> Result<Prediction, ModelError> {
///         Ok(Prediction {
///             score: 50.0,
///             importances: FeatureImportances::new([1.0 / 7.0; 7]),
///         })
///     }
/// }
///
/// let prediction = Flat.predict(&FeatureVector::zeroed())?;
/// assert_eq!(prediction.score, 50.0);
/// # Ok::<(), ModelError>(())
/// ```
pub trait StatisticalModel: Send + Sync {
    /// Predict a score for `features`.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] when no prediction can be produced.
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError>;
}

impl<M: StatisticalModel + ?Sized> StatisticalModel for Box<M> {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        (**self).predict(features)
    }
}

impl<M: StatisticalModel + ?Sized> StatisticalModel for std::sync::Arc<M> {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        (**self).predict(features)
    }
}
