//! Error types emitted by the Barris CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use barris_core::RequestError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Barris CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} path (pass it as the <path> argument or set {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that is not a regular file.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        /// Option that named the path.
        field: &'static str,
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The selection JSON could not be decoded.
    #[error("failed to parse selection JSON at {path:?}: {source}")]
    ParseSelection {
        /// Selection file path.
        path: Utf8PathBuf,
        /// Decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// The catalog JSON could not be decoded or failed validation.
    #[error("failed to load catalog at {path:?}: {source}")]
    ParseCatalog {
        /// Catalog file path.
        path: Utf8PathBuf,
        /// Decoding or validation error.
        #[source]
        source: serde_json::Error,
    },
    /// The recommendation request was rejected.
    #[error("invalid recommendation request: {0}")]
    InvalidRequest(#[from] RequestError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Installing the terminal logger failed.
    #[error("failed to initialise logging: {0}")]
    InitLogging(#[source] log::SetLoggerError),
}
