//! Validated outdoor analysis requests.

use geo::Coord;
use thiserror::Error;

/// Default search radius in metres.
pub const DEFAULT_RADIUS_M: u32 = 500;
/// Smallest accepted search radius in metres.
pub const MIN_RADIUS_M: u32 = 100;
/// Largest accepted search radius in metres.
pub const MAX_RADIUS_M: u32 = 5_000;

/// Errors returned by [`AnalysisRequest::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisRequestError {
    /// Latitude outside `-90.0..=90.0` or not finite.
    #[error("latitude {0} is outside -90..=90")]
    InvalidLatitude(f64),
    /// Longitude outside `-180.0..=180.0` or not finite.
    #[error("longitude {0} is outside -180..=180")]
    InvalidLongitude(f64),
    /// Radius outside the accepted range.
    #[error("radius {radius_m} m is outside 100..=5000")]
    RadiusOutOfRange {
        /// Rejected radius.
        radius_m: u32,
    },
}

/// A location and search radius that passed validation.
///
/// # Examples
/// ```
/// use fengshui_core::{AnalysisRequest, AnalysisRequestError};
///
/// let request = AnalysisRequest::new(35.6762, 139.6503, 500)?;
/// assert_eq!(request.location().x, 139.6503);
/// assert!(AnalysisRequest::new(91.0, 0.0, 500).is_err());
/// # Ok::<(), AnalysisRequestError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnalysisRequest {
    location: Coord<f64>,
    radius_m: u32,
}

impl AnalysisRequest {
    /// Validate and build a request.
    ///
    /// # Errors
    ///
    /// Returns an [`AnalysisRequestError`] naming the first offending field.
    pub fn new(latitude: f64, longitude: f64, radius_m: u32) -> Result<Self, AnalysisRequestError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AnalysisRequestError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AnalysisRequestError::InvalidLongitude(longitude));
        }
        if !(MIN_RADIUS_M..=MAX_RADIUS_M).contains(&radius_m) {
            return Err(AnalysisRequestError::RadiusOutOfRange { radius_m });
        }
        Ok(Self {
            location: Coord {
                x: longitude,
                y: latitude,
            },
            radius_m,
        })
    }

    /// Validate a request using [`DEFAULT_RADIUS_M`].
    ///
    /// # Errors
    ///
    /// Returns an [`AnalysisRequestError`] for out-of-range coordinates.
    pub fn with_default_radius(latitude: f64, longitude: f64) -> Result<Self, AnalysisRequestError> {
        Self::new(latitude, longitude, DEFAULT_RADIUS_M)
    }

    /// Location with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Search radius in metres.
    #[must_use]
    pub const fn radius_m(&self) -> u32 {
        self.radius_m
    }
}
