//! `analyze` command: score an outdoor location.

use std::io::Write;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use fengshui_core::{AnalysisRequest, AnalysisResult, DEFAULT_RADIUS_M, StatisticalModel};
use fengshui_scorer::{
    LinearModel, LocationAnalyzer, OutdoorAnalyzer, SnapshotFileProvider, load_scoring_config,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_GEODATA, ARG_LATITUDE, ARG_LONGITUDE, ARG_MODEL, ARG_RADIUS, ARG_WEIGHTS, CliError,
    ENV_GEODATA, ENV_LATITUDE, ENV_LONGITUDE, require_existing, write_json,
};

/// CLI arguments for the `analyze` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a location from a JSON geo-data snapshot. The \
                 traditional score is blended with the statistical model \
                 when one is supplied; otherwise the traditional score \
                 stands alone.",
    about = "Score an outdoor location"
)]
#[ortho_config(prefix = "FENGSHUI")]
pub(crate) struct AnalyzeArgs {
    /// Latitude in degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude in degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Search radius in metres (100 to 5000, default 500).
    #[arg(long = ARG_RADIUS, value_name = "metres")]
    #[serde(default)]
    pub(crate) radius: Option<u32>,
    /// Path to the JSON geo-data snapshot.
    #[arg(long = ARG_GEODATA, value_name = "path")]
    #[serde(default)]
    pub(crate) geodata: Option<Utf8PathBuf>,
    /// Path to a statistical model artefact.
    #[arg(long = ARG_MODEL, value_name = "path")]
    #[serde(default)]
    pub(crate) model: Option<Utf8PathBuf>,
    /// Path to a JSON scoring configuration.
    #[arg(long = ARG_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
}

impl AnalyzeArgs {
    pub(crate) fn into_config(self) -> Result<AnalyzeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnalyzeConfig::try_from(merged)
    }
}

/// Resolved `analyze` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnalyzeConfig {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) radius_m: u32,
    pub(crate) geodata: Utf8PathBuf,
    pub(crate) model: Option<Utf8PathBuf>,
    pub(crate) weights: Option<Utf8PathBuf>,
}

impl AnalyzeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.geodata, ARG_GEODATA)?;
        if let Some(weights) = &self.weights {
            require_existing(weights, ARG_WEIGHTS)?;
        }
        Ok(())
    }
}

impl TryFrom<AnalyzeArgs> for AnalyzeConfig {
    type Error = CliError;

    fn try_from(args: AnalyzeArgs) -> Result<Self, Self::Error> {
        let latitude = args.latitude.ok_or(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: ENV_LATITUDE,
        })?;
        let longitude = args.longitude.ok_or(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: ENV_LONGITUDE,
        })?;
        let geodata = args.geodata.ok_or(CliError::MissingArgument {
            field: ARG_GEODATA,
            env: ENV_GEODATA,
        })?;
        Ok(Self {
            latitude,
            longitude,
            radius_m: args.radius.unwrap_or(DEFAULT_RADIUS_M),
            geodata,
            model: args.model,
            weights: args.weights,
        })
    }
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_analyze_with(args, &mut stdout)
}

pub(crate) fn run_analyze_with(args: AnalyzeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let result = execute_analyze(&config)?;
    write_json(writer, &result)
}

pub(crate) fn execute_analyze(config: &AnalyzeConfig) -> Result<AnalysisResult, CliError> {
    let request = AnalysisRequest::new(config.latitude, config.longitude, config.radius_m)?;
    let provider =
        SnapshotFileProvider::from_path(&config.geodata).map_err(CliError::LoadGeoData)?;
    let mut analyzer = OutdoorAnalyzer::new(provider);
    if let Some(path) = &config.weights {
        analyzer = analyzer.with_config(load_scoring_config(path)?)?;
    }
    if let Some(model) = config.model.as_deref().and_then(load_model) {
        analyzer = analyzer.with_model(model);
    }
    Ok(analyzer.analyze(&request)?)
}

/// Load a model artefact, degrading to traditional-only scoring on failure.
fn load_model(path: &Utf8Path) -> Option<Arc<dyn StatisticalModel>> {
    match LinearModel::from_path(path) {
        Ok(model) => Some(Arc::new(model)),
        Err(error) => {
            log::warn!("ignoring statistical model: {error}");
            None
        }
    }
}
