//! `write-model` command: persist the reference statistical model.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use fengshui_scorer::{LinearModel, write_model_file};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_OUTPUT, CliError, ENV_OUTPUT, write_json};

/// CLI arguments for the `write-model` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Write the reference linear model as a bincode artefact \
                 suitable for `analyze --model`. Missing parent directories \
                 are created.",
    about = "Write the reference model artefact"
)]
#[ortho_config(prefix = "FENGSHUI")]
pub(crate) struct WriteModelArgs {
    /// Destination of the model artefact.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

/// Summary printed after the artefact is written.
#[derive(Debug, Serialize)]
struct WrittenModel {
    path: Utf8PathBuf,
    model: LinearModel,
}

pub(crate) fn run_write_model(args: WriteModelArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_write_model_with(args, &mut stdout)
}

pub(crate) fn run_write_model_with(
    args: WriteModelArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let path = merged.output.ok_or(CliError::MissingArgument {
        field: ARG_OUTPUT,
        env: ENV_OUTPUT,
    })?;
    let model = LinearModel::reference();
    write_model_file(&path, &model).map_err(CliError::WriteModel)?;
    log::info!("wrote reference model to {path}");
    write_json(writer, &WrittenModel { path, model })
}
