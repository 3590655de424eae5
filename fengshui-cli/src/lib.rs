//! Command-line interface for the Feng Shui scoring engine.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;

mod analyze;
mod error;
mod indoor;
mod logging;
mod model;

pub use error::CliError;
pub use logging::init_logging;

use analyze::{AnalyzeArgs, run_analyze};
use indoor::{IndoorArgs, run_indoor};
use model::{WriteModelArgs, run_write_model};

pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ARG_RADIUS: &str = "radius";
pub(crate) const ARG_GEODATA: &str = "geodata";
pub(crate) const ARG_MODEL: &str = "model";
pub(crate) const ARG_WEIGHTS: &str = "weights";
pub(crate) const ARG_LAYOUT: &str = "layout";
pub(crate) const ARG_ROOM: &str = "room";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_LATITUDE: &str = "FENGSHUI_CMDS_ANALYZE_LATITUDE";
pub(crate) const ENV_LONGITUDE: &str = "FENGSHUI_CMDS_ANALYZE_LONGITUDE";
pub(crate) const ENV_GEODATA: &str = "FENGSHUI_CMDS_ANALYZE_GEODATA";
pub(crate) const ENV_LAYOUT: &str = "FENGSHUI_CMDS_INDOOR_LAYOUT";
pub(crate) const ENV_OUTPUT: &str = "FENGSHUI_CMDS_WRITE_MODEL_OUTPUT";

/// Run the Feng Shui CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Indoor(args) => run_indoor(args),
        Command::WriteModel(args) => run_write_model(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fengshui",
    about = "Score locations and room layouts using Feng Shui principles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score an outdoor location from a geo-data snapshot.
    Analyze(AnalyzeArgs),
    /// Score a furnished room layout.
    Indoor(IndoorArgs),
    /// Write the reference statistical model artefact.
    WriteModel(WriteModelArgs),
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match fengshui_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Print `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
