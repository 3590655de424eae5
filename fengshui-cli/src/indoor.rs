//! `indoor` command: score a furnished room.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use fengshui_indoor::{IndoorAnalysis, IndoorScorer, ItemCatalog, parse_layout};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOG, ARG_LAYOUT, ARG_ROOM, CliError, ENV_LAYOUT, require_existing, write_json,
};

/// Room type assumed when none is given.
pub(crate) const DEFAULT_ROOM: &str = "living";

/// CLI arguments for the `indoor` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a room layout given as a JSON array of placed items \
                 ({id, type, position {x, y}}). Item types resolve through \
                 the built-in catalog unless --catalog names a replacement.",
    about = "Score a furnished room layout"
)]
#[ortho_config(prefix = "FENGSHUI")]
pub(crate) struct IndoorArgs {
    /// Path to the JSON layout.
    #[arg(long = ARG_LAYOUT, value_name = "path")]
    #[serde(default)]
    pub(crate) layout: Option<Utf8PathBuf>,
    /// Room type: bedroom, living, office or any other name.
    #[arg(long = ARG_ROOM, value_name = "type")]
    #[serde(default)]
    pub(crate) room: Option<String>,
    /// Path to a JSON item catalog replacing the built-in one.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl IndoorArgs {
    pub(crate) fn into_config(self) -> Result<IndoorConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        IndoorConfig::try_from(merged)
    }
}

/// Resolved `indoor` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IndoorConfig {
    pub(crate) layout: Utf8PathBuf,
    pub(crate) room: String,
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl IndoorConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.layout, ARG_LAYOUT)?;
        if let Some(catalog) = &self.catalog {
            require_existing(catalog, ARG_CATALOG)?;
        }
        Ok(())
    }

    fn load_catalog(&self) -> Result<ItemCatalog, CliError> {
        let Some(path) = &self.catalog else {
            return Ok(ItemCatalog::standard());
        };
        let text = fengshui_fs::read_utf8_file(path).map_err(|source| CliError::ReadInput {
            field: ARG_CATALOG,
            path: path.clone(),
            source,
        })?;
        ItemCatalog::from_json_str(&text).map_err(|source| CliError::LoadCatalog {
            path: path.clone(),
            source,
        })
    }
}

impl TryFrom<IndoorArgs> for IndoorConfig {
    type Error = CliError;

    fn try_from(args: IndoorArgs) -> Result<Self, Self::Error> {
        let layout = args.layout.ok_or(CliError::MissingArgument {
            field: ARG_LAYOUT,
            env: ENV_LAYOUT,
        })?;
        Ok(Self {
            layout,
            room: args.room.unwrap_or_else(|| DEFAULT_ROOM.to_owned()),
            catalog: args.catalog,
        })
    }
}

pub(crate) fn run_indoor(args: IndoorArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_indoor_with(args, &mut stdout)
}

pub(crate) fn run_indoor_with(args: IndoorArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let analysis = execute_indoor(&config)?;
    write_json(writer, &analysis)
}

pub(crate) fn execute_indoor(config: &IndoorConfig) -> Result<IndoorAnalysis, CliError> {
    let catalog = config.load_catalog()?;
    let text = fengshui_fs::read_utf8_file(&config.layout).map_err(|source| {
        CliError::ReadInput {
            field: ARG_LAYOUT,
            path: config.layout.clone(),
            source,
        }
    })?;
    let items = parse_layout(&text).map_err(|source| CliError::ParseLayout {
        path: config.layout.clone(),
        source,
    })?;
    Ok(IndoorScorer::new(catalog).analyze(&items, &config.room)?)
}
