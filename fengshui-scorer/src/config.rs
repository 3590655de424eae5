//! Scoring configuration and its JSON loader.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::{BlendWeights, ConfigurationError, FeatureConfig, TraditionalConfig};

/// Tolerance used when checking that a weight table sums to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Complete configuration of the outdoor pipeline.
///
/// Every section is optional in JSON; missing sections keep their defaults.
///
/// # Examples
/// ```
/// use fengshui_scorer::ScoringConfig;
///
/// let config: ScoringConfig =
///     serde_json::from_str(r#"{"blend": {"traditional": 0.7, "statistical": 0.3}}"#)
///         .expect("decode config");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Feature extraction curves.
    pub features: FeatureConfig,
    /// Traditional scoring curves and weights.
    pub traditional: TraditionalConfig,
    /// Final blend weights.
    pub blend: BlendWeights,
}

impl ScoringConfig {
    /// Validate every section.
    ///
    /// # Errors
    /// Returns the first [`ConfigurationError`] found.
    pub fn validate(self) -> Result<Self, ConfigurationError> {
        self.features.validate()?;
        self.traditional.validate()?;
        self.blend.validate()?;
        Ok(self)
    }
}

/// Load and validate a [`ScoringConfig`] from a JSON file.
///
/// # Errors
/// Returns [`ConfigurationError::Read`] or [`ConfigurationError::Parse`] when
/// the file cannot be loaded, or a validation error for invalid values.
pub fn load_scoring_config(path: &Utf8Path) -> Result<ScoringConfig, ConfigurationError> {
    let contents = fengshui_fs::read_utf8_file(path).map_err(|source| ConfigurationError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ScoringConfig =
        serde_json::from_str(&contents).map_err(|source| ConfigurationError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let validated = config.validate()?;
    log::info!("loaded scoring configuration from {path}");
    Ok(validated)
}

/// Check a weight table: every weight finite and non-negative, total one.
#[expect(
    clippy::float_arithmetic,
    reason = "validation sums the weights and compares against one"
)]
pub(crate) fn validate_weight_table(
    table: &'static str,
    weights: &[(&'static str, f64)],
) -> Result<(), ConfigurationError> {
    if let Some(&(field, value)) = weights
        .iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
    {
        return Err(ConfigurationError::InvalidWeight {
            table,
            field,
            value,
        });
    }
    let sum: f64 = weights.iter().map(|(_, value)| value).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigurationError::WeightsDoNotSumToOne { table, sum });
    }
    Ok(())
}
