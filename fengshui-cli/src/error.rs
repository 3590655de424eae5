//! Error types emitted by the Feng Shui CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use fengshui_core::{AnalysisRequestError, GeoDataError, ModelError};
use fengshui_indoor::{CatalogError, IndoorError};
use fengshui_scorer::{AnalysisError, ConfigurationError};
use thiserror::Error;

/// Errors emitted by the Feng Shui CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The coordinates or radius are out of range.
    #[error("invalid analysis request: {0}")]
    InvalidRequest(#[from] AnalysisRequestError),
    /// The geo-data snapshot could not be loaded.
    #[error("failed to load geo-data snapshot: {0}")]
    LoadGeoData(#[source] GeoDataError),
    /// The scoring configuration file is unreadable or invalid.
    #[error("invalid scoring configuration: {0}")]
    ScoringConfig(#[from] ConfigurationError),
    /// The outdoor analysis failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    /// Reading an input file failed.
    #[error("failed to read {field} at {path:?}: {source}")]
    ReadInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The room layout JSON could not be decoded.
    #[error("failed to parse layout JSON at {path:?}: {source}")]
    ParseLayout {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The item catalog could not be loaded.
    #[error("failed to load item catalog from {path:?}: {source}")]
    LoadCatalog {
        path: Utf8PathBuf,
        #[source]
        source: CatalogError,
    },
    /// The layout could not be scored.
    #[error("invalid layout: {0}")]
    Indoor(#[from] IndoorError),
    /// Writing the model artefact failed.
    #[error("failed to write model artefact: {0}")]
    WriteModel(#[source] ModelError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
