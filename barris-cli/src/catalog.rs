//! `catalog` command and catalog loading shared with `prefs`.

use std::io::{BufReader, Write};

use barris_core::OptionCatalog;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_CATALOG, CliError, fs, require_existing, write_json};

/// CLI arguments for the `catalog` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "catalog", about = "Print the option catalog in effect")]
#[ortho_config(prefix = "BARRIS")]
pub(crate) struct CatalogArgs {
    /// Path to a JSON option catalog replacing the built-in one.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

pub(crate) fn run_catalog_with(args: CatalogArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    if let Some(path) = &merged.catalog {
        require_existing(path, ARG_CATALOG)?;
    }
    let catalog = load_catalog(merged.catalog.as_deref())?;
    write_json(writer, &catalog)
}

/// Load the catalog at `path`, or the built-in catalog when `None`.
pub(crate) fn load_catalog(path: Option<&Utf8Path>) -> Result<OptionCatalog, CliError> {
    let Some(path) = path else {
        return Ok(OptionCatalog::builtin());
    };
    let file = fs::open_input(path).map_err(|source| CliError::OpenInput {
        field: ARG_CATALOG,
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: OptionCatalog =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseCatalog {
                path: path.to_path_buf(),
                source,
            }
        })?;
    log::debug!("loaded {} catalog options from {path}", catalog.len());
    Ok(catalog)
}
