//! File-backed geo-data provider.

use camino::{Utf8Path, Utf8PathBuf};
use fengshui_core::{AnalysisRequest, GeoDataError, GeoDataProvider, GeoSnapshot};

/// Serve a snapshot decoded from a JSON file.
///
/// The file is read once at construction; every request receives the same
/// snapshot. Useful for offline analysis of data exported from a map
/// service.
#[derive(Debug, Clone)]
pub struct SnapshotFileProvider {
    path: Utf8PathBuf,
    snapshot: GeoSnapshot,
}

impl SnapshotFileProvider {
    /// Read and decode the snapshot at `path`.
    ///
    /// # Errors
    /// Returns [`GeoDataError::Snapshot`] when the file cannot be read or is
    /// not a valid snapshot.
    pub fn from_path(path: &Utf8Path) -> Result<Self, GeoDataError> {
        let snapshot_error = |message: String| GeoDataError::Snapshot {
            path: path.to_string(),
            message,
        };
        let contents =
            fengshui_fs::read_utf8_file(path).map_err(|source| snapshot_error(source.to_string()))?;
        let snapshot: GeoSnapshot =
            serde_json::from_str(&contents).map_err(|source| snapshot_error(source.to_string()))?;
        Ok(Self {
            path: path.to_path_buf(),
            snapshot,
        })
    }

    /// Location the snapshot was read from.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl GeoDataProvider for SnapshotFileProvider {
    fn fetch(&self, _request: &AnalysisRequest) -> Result<GeoSnapshot, GeoDataError> {
        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fengshui_core::PoiCategory;
    use rstest::rstest;

    fn write(dir: &tempfile::TempDir, contents: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join("snapshot.json"))
            .expect("utf-8 temp path");
        std::fs::write(path.as_std_path(), contents).expect("write snapshot");
        path
    }

    #[rstest]
    fn serves_decoded_snapshot() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write(
            &dir,
            r#"{"pois": {"parks": [{"distance_m": 90.0}]}, "roads": {"intersection_count": 4}}"#,
        );
        let provider = SnapshotFileProvider::from_path(&path).expect("load snapshot");
        let request = AnalysisRequest::new(0.0, 0.0, 500).expect("valid request");
        let snapshot = provider.fetch(&request).expect("fetch snapshot");
        assert_eq!(snapshot.count(PoiCategory::Parks), 1);
        assert_eq!(snapshot.roads.intersection_count, 4);
        assert_eq!(provider.path(), path.as_path());
    }

    #[rstest]
    fn rejects_malformed_snapshot() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write(&dir, r#"{"pois": []}"#);
        let error = SnapshotFileProvider::from_path(&path).expect_err("decode should fail");
        assert!(matches!(error, GeoDataError::Snapshot { .. }));
    }
}
