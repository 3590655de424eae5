//! Fingerprint-keyed memoisation of analysis results.

use std::collections::HashMap;
use std::sync::Mutex;

use fengshui_core::{AnalysisRequest, AnalysisResult, LocationEcho};

use crate::{AnalysisError, LocationAnalyzer};

/// Default number of cached results.
pub const DEFAULT_CACHE_CAPACITY: usize = 1_024;

/// Request identity used as the cache key.
///
/// Coordinates are quantised to micro-degrees (about 11 cm at the equator),
/// so requests that differ only by float noise share an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    latitude_e6: i64,
    longitude_e6: i64,
    radius_m: u32,
}

impl Fingerprint {
    /// Fingerprint `request`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        reason = "validated coordinates scaled by 1e6 fit comfortably in i64"
    )]
    pub fn of(request: &AnalysisRequest) -> Self {
        Self {
            latitude_e6: (request.latitude() * 1e6).round() as i64,
            longitude_e6: (request.longitude() * 1e6).round() as i64,
            radius_m: request.radius_m(),
        }
    }
}

/// Wrap a [`LocationAnalyzer`] with a bounded result cache.
///
/// Only successful results are stored. Once `capacity` entries exist, new
/// results are returned without being cached. A poisoned lock bypasses the
/// cache rather than failing the request. A hit echoes the location of the
/// request being served, not the one that populated the entry.
#[derive(Debug)]
pub struct CachingAnalyzer<A> {
    inner: A,
    capacity: usize,
    entries: Mutex<HashMap<Fingerprint, AnalysisResult>>,
}

impl<A> CachingAnalyzer<A> {
    /// Cache up to [`DEFAULT_CACHE_CAPACITY`] results from `inner`.
    pub fn new(inner: A) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    /// Cache up to `capacity` results from `inner`.
    pub fn with_capacity(inner: A, capacity: usize) -> Self {
        Self {
            inner,
            capacity,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Number of cached results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    /// Report whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, key: Fingerprint) -> Option<AnalysisResult> {
        let Ok(entries) = self.entries.lock() else {
            return None;
        };
        entries.get(&key).cloned()
    }

    fn store(&self, key: Fingerprint, result: &AnalysisResult) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        if entries.len() < self.capacity {
            entries.insert(key, result.clone());
        }
    }
}

impl<A: LocationAnalyzer> LocationAnalyzer for CachingAnalyzer<A> {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let key = Fingerprint::of(request);
        if let Some(hit) = self.lookup(key) {
            log::debug!("cache hit for {key:?}");
            return Ok(AnalysisResult {
                location: LocationEcho::from(request),
                ..hit
            });
        }
        let result = self.inner.analyze(request)?;
        self.store(key, &result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use fengshui_core::GeoSnapshot;
    use fengshui_core::test_support::{FailingGeoDataProvider, FixedGeoDataProvider};
    use rstest::rstest;

    use crate::OutdoorAnalyzer;

    struct Counting<A> {
        inner: A,
        calls: AtomicUsize,
    }

    impl<A: LocationAnalyzer> LocationAnalyzer for Counting<A> {
        fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.analyze(request)
        }
    }

    fn counting<P>(provider: P) -> Counting<OutdoorAnalyzer<P>> {
        Counting {
            inner: OutdoorAnalyzer::new(provider),
            calls: AtomicUsize::new(0),
        }
    }

    fn request(lat: f64) -> AnalysisRequest {
        AnalysisRequest::new(lat, 139.0, 500).expect("valid request")
    }

    #[rstest]
    fn repeated_requests_hit_the_cache() {
        let cache = CachingAnalyzer::new(counting(FixedGeoDataProvider::new(GeoSnapshot::default())));
        let first = cache.analyze(&request(35.0)).expect("first analysis");
        let second = cache.analyze(&request(35.0)).expect("second analysis");
        assert_eq!(first, second);
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[rstest]
    fn hit_matches_uncached_analysis_of_the_same_request() {
        let cache = CachingAnalyzer::new(counting(FixedGeoDataProvider::new(GeoSnapshot::default())));
        cache.analyze(&request(35.0)).expect("first analysis");
        let nearby = request(35.000_000_4);
        let cached = cache.analyze(&nearby).expect("cached analysis");
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 1);
        let direct = OutdoorAnalyzer::new(FixedGeoDataProvider::new(GeoSnapshot::default()))
            .analyze(&nearby)
            .expect("direct analysis");
        assert_eq!(cached, direct);
        assert_eq!(cached.location.latitude, 35.000_000_4);
    }

    #[rstest]
    fn failures_are_not_cached() {
        let cache = CachingAnalyzer::new(counting(FailingGeoDataProvider));
        assert!(cache.analyze(&request(35.0)).is_err());
        assert!(cache.analyze(&request(35.0)).is_err());
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty());
    }

    #[rstest]
    fn capacity_bounds_the_cache() {
        let cache = CachingAnalyzer::with_capacity(
            counting(FixedGeoDataProvider::new(GeoSnapshot::default())),
            1,
        );
        cache.analyze(&request(35.0)).expect("first analysis");
        cache.analyze(&request(36.0)).expect("second analysis");
        assert_eq!(cache.len(), 1);
        cache.analyze(&request(36.0)).expect("uncached repeat");
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 3);
    }

    #[rstest]
    fn fingerprint_distinguishes_radius() {
        let small = AnalysisRequest::new(35.0, 139.0, 500).expect("valid request");
        let large = AnalysisRequest::new(35.0, 139.0, 800).expect("valid request");
        assert_ne!(Fingerprint::of(&small), Fingerprint::of(&large));
    }
}
