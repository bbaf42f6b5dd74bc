//! Command-line front end for the Barris preference engine.
//!
//! `barris prefs` turns a UI selection export into the recommendation
//! request sent to the scoring service; `barris catalog` prints the option
//! catalog in effect. Options are layered with `ortho_config`, so each flag
//! may also come from `BARRIS_CMDS_*` environment variables or config files.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

mod catalog;
mod error;
mod fs;
mod prefs;

pub use error::CliError;

use catalog::{CatalogArgs, run_catalog_with};
use prefs::{PrefsArgs, run_prefs_with};

pub(crate) const ARG_SELECTION: &str = "selection";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_TOP_K: &str = "top-k";
pub(crate) const ENV_PREFS_SELECTION: &str = "BARRIS_CMDS_PREFS_SELECTION";

/// Run the Barris CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose)?;
    let mut stdout = std::io::stdout().lock();
    run_with(cli.command, &mut stdout)
}

pub(crate) fn run_with(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Prefs(args) => run_prefs_with(args, writer),
        Command::Catalog(args) => run_catalog_with(args, writer),
    }
}

fn init_logging(verbose: bool) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(CliError::InitLogging)
}

#[derive(Debug, Parser)]
#[command(
    name = "barris",
    about = "Build neighbourhood recommendation requests from user preferences",
    version
)]
pub(crate) struct Cli {
    /// Log discarded overrides and catalog fallbacks.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Aggregate a selection into a recommendation request.
    Prefs(PrefsArgs),
    /// Print the option catalog in effect.
    Catalog(CatalogArgs),
}

/// Verify that a configured input path exists and is a regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match fs::input_is_file(path) {
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

/// Pretty-print `value` as JSON followed by a newline.
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
