//! Error types raised while configuring or running the outdoor pipeline.

use camino::Utf8PathBuf;
use fengshui_core::GeoDataError;
use thiserror::Error;

/// Errors raised while validating or loading scoring configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A weight table does not sum to one.
    #[error("{table} weights sum to {sum}, expected 1.0")]
    WeightsDoNotSumToOne {
        /// Name of the offending table.
        table: &'static str,
        /// Observed sum.
        sum: f64,
    },
    /// A weight is negative or not finite.
    #[error("{table} weight `{field}` is invalid: {value}")]
    InvalidWeight {
        /// Name of the offending table.
        table: &'static str,
        /// Name of the offending weight.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A curve parameter is outside its accepted range.
    #[error("parameter `{name}` is invalid: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Reading the configuration file failed.
    #[error("failed to read scoring configuration at {path}")]
    Read {
        /// Requested configuration path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Decoding the configuration file failed.
    #[error("failed to parse scoring configuration at {path}")]
    Parse {
        /// Requested configuration path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while analysing a location.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The geo-data collaborator failed.
    #[error("failed to fetch geo-data for ({latitude}, {longitude})")]
    GeoData {
        /// Requested latitude.
        latitude: f64,
        /// Requested longitude.
        longitude: f64,
        /// Source error from the provider.
        #[source]
        source: GeoDataError,
    },
}
