//! Guards shared by every scorer.
//!
//! Features live in `0.0..=1.0` and scores in `0.0..=100.0`. Non-finite values
//! collapse to zero rather than propagating through weighted sums.

/// Upper bound of every score.
pub const MAX_SCORE: f64 = 100.0;

/// Clamp a feature value into `0.0..=1.0`, mapping non-finite values to `0.0`.
///
/// # Examples
/// ```
/// use fengshui_core::clamp_unit;
///
/// assert_eq!(clamp_unit(1.3), 1.0);
/// assert_eq!(clamp_unit(f64::NAN), 0.0);
/// ```
#[must_use]
pub const fn clamp_unit(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Clamp a score into `0.0..=100.0`, mapping non-finite values to `0.0`.
///
/// # Examples
/// ```
/// use fengshui_core::sanitise_score;
///
/// assert_eq!(sanitise_score(104.2), 100.0);
/// assert_eq!(sanitise_score(-3.0), 0.0);
/// assert_eq!(sanitise_score(f64::INFINITY), 0.0);
/// ```
#[must_use]
pub const fn sanitise_score(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, MAX_SCORE)
}

/// Round a score to two decimal places for presentation.
///
/// # Examples
/// ```
/// use fengshui_core::round_score;
///
/// assert_eq!(round_score(74.956), 74.96);
/// ```
#[must_use]
pub fn round_score(score: f64) -> f64 {
    (sanitise_score(score) * 100.0).round() / 100.0
}
