//! Error types emitted by the route planner CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use vectores_data::{BookError, GazetteerError, PlanError};

/// Errors emitted by the route planner CLI.
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
        /// Long flag name.
        field: &'static str,
        /// Environment variable that also sets it.
        env: &'static str,
    },
    /// Only one of the depot coordinates was supplied.
    #[error("--depot-lat and --depot-lon must be given together")]
    IncompleteDepot,
    /// Depot coordinates are outside WGS84 range.
    #[error("depot coordinates ({lat}, {lon}) are out of range")]
    InvalidDepot {
        /// Latitude as supplied.
        lat: f64,
        /// Longitude as supplied.
        lon: f64,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Long flag name.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Long flag name.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Long flag name.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Loading the work orders failed.
    #[error(transparent)]
    LoadOrders(#[from] BookError),
    /// Loading the gazetteer failed.
    #[error(transparent)]
    LoadGazetteer(#[from] GazetteerError),
    /// No pending orders were available and none were selected.
    #[error("no pending work orders to route")]
    NothingToRoute,
    /// Planning the route failed.
    #[error(transparent)]
    Plan(#[from] PlanError),
    /// The requested work order is not in the book.
    #[error("no work order with id {id:?}")]
    UnknownOrder {
        /// Identifier as requested.
        id: String,
    },
    /// Serialising a printable sheet failed.
    #[error("failed to serialise sheet: {0}")]
    SerialiseSheet(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
