//! `prefs` command: aggregate a UI selection into a recommendation request.

use std::io::{BufReader, Write};

use barris_core::{DEFAULT_TOP_K, RecommendationRequest, SelectionState, aggregate};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::load_catalog;
use crate::{
    ARG_CATALOG, ARG_SELECTION, ARG_TOP_K, CliError, ENV_PREFS_SELECTION, fs, require_existing,
    write_json,
};

/// CLI arguments for the `prefs` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "prefs",
    long_about = "Read a selection exported by the UI (per-category ignore \
                 flags, picked options and override percentages), aggregate \
                 it against the option catalog, and print the JSON request \
                 expected by the neighbourhood scoring service.",
    about = "Build a recommendation request from a selection"
)]
#[ortho_config(prefix = "BARRIS")]
pub(crate) struct PrefsArgs {
    /// Path to a JSON file containing the selection state.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) selection: Option<Utf8PathBuf>,
    /// Path to a JSON option catalog replacing the built-in one.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Number of neighbourhoods to request (default 3).
    #[arg(long = ARG_TOP_K, value_name = "n")]
    #[serde(default)]
    pub(crate) top_k: Option<u16>,
}

impl PrefsArgs {
    pub(crate) fn into_config(self) -> Result<PrefsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PrefsConfig::try_from(merged)
    }
}

/// Resolved `prefs` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PrefsConfig {
    /// Path to the selection JSON.
    pub(crate) selection: Utf8PathBuf,
    /// Optional catalog override.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Number of neighbourhoods to request.
    pub(crate) top_k: u16,
}

impl PrefsConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.selection, ARG_SELECTION)?;
        if let Some(catalog) = &self.catalog {
            require_existing(catalog, ARG_CATALOG)?;
        }
        Ok(())
    }
}

impl TryFrom<PrefsArgs> for PrefsConfig {
    type Error = CliError;

    fn try_from(args: PrefsArgs) -> Result<Self, Self::Error> {
        let selection = args.selection.ok_or(CliError::MissingArgument {
            field: ARG_SELECTION,
            env: ENV_PREFS_SELECTION,
        })?;
        Ok(Self {
            selection,
            catalog: args.catalog,
            top_k: args.top_k.unwrap_or(DEFAULT_TOP_K),
        })
    }
}

pub(crate) fn run_prefs_with(args: PrefsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let request = execute_prefs(&config)?;
    write_json(writer, &request)
}

pub(crate) fn execute_prefs(config: &PrefsConfig) -> Result<RecommendationRequest, CliError> {
    let catalog = load_catalog(config.catalog.as_deref())?;
    let selection = load_selection(&config.selection)?;
    let aggregation = aggregate(&catalog, &selection);
    for (option, record) in aggregation.overrides.iter() {
        info!(
            "override accepted for '{option}': {} -> {} ({:+.2})",
            record.original, record.new, record.difference
        );
    }
    Ok(RecommendationRequest::new(aggregation, config.top_k)?)
}

/// Loads a JSON-encoded [`SelectionState`] from disk.
pub(crate) fn load_selection(path: &Utf8Path) -> Result<SelectionState, CliError> {
    let file = fs::open_input(path).map_err(|source| CliError::OpenInput {
        field: ARG_SELECTION,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseSelection {
        path: path.to_path_buf(),
        source,
    })
}
