//! Route command implementation.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use vectores_core::{Depot, NearestNeighbourSequencer};
use vectores_data::{GazetteerGeocoder, Geocoder, RoutePlan, WorkOrderBook, plan_route_blocking};

use crate::render::{OutputFormat, route_table, write_sheet};
use crate::{
    ARG_DEPOT_LAT, ARG_DEPOT_LON, ARG_FORMAT, ARG_GAZETTEER, ARG_ORDERS_FILE, ARG_SELECT,
    CliError, ENV_ROUTE_GAZETTEER, ENV_ROUTE_ORDERS_FILE,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order work orders into a technician's route sheet. \
                 Appointments come first in time order; the remaining stops \
                 are chained from the depot by nearest neighbour. Without \
                 --select every pending order is routed.",
    about = "Build a route sheet for the selected work orders"
)]
#[ortho_config(prefix = "VECTORES")]
pub(crate) struct RouteArgs {
    /// Path to the JSON list of work orders.
    #[arg(long = ARG_ORDERS_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) orders_file: Option<Utf8PathBuf>,
    /// Path to the JSON gazetteer of known addresses.
    #[arg(long = ARG_GAZETTEER, value_name = "path")]
    #[serde(default)]
    pub(crate) gazetteer: Option<Utf8PathBuf>,
    /// Comma-separated work order ids, in the order they were picked.
    #[arg(long = ARG_SELECT, value_name = "ids")]
    #[serde(default)]
    pub(crate) select: Option<String>,
    /// Latitude of a depot other than the municipal base.
    #[arg(long = ARG_DEPOT_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) depot_lat: Option<f64>,
    /// Longitude of a depot other than the municipal base.
    #[arg(long = ARG_DEPOT_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) depot_lon: Option<f64>,
    /// Output format for the route sheet.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    /// Path to the work orders file.
    pub(crate) orders_file: Utf8PathBuf,
    /// Path to the gazetteer file.
    pub(crate) gazetteer: Utf8PathBuf,
    /// Explicit selection; `None` routes every pending order.
    pub(crate) selection: Option<Vec<String>>,
    /// Where the route starts.
    pub(crate) depot: Depot,
    /// How the sheet is written.
    pub(crate) format: OutputFormat,
}

impl RouteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.orders_file, ARG_ORDERS_FILE)?;
        require_existing(&self.gazetteer, ARG_GAZETTEER)?;
        Ok(())
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match vectores_fs::file_is_file(path) {
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

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let orders_file = args.orders_file.ok_or(CliError::MissingArgument {
            field: ARG_ORDERS_FILE,
            env: ENV_ROUTE_ORDERS_FILE,
        })?;
        let gazetteer = args.gazetteer.ok_or(CliError::MissingArgument {
            field: ARG_GAZETTEER,
            env: ENV_ROUTE_GAZETTEER,
        })?;
        let depot = match (args.depot_lat, args.depot_lon) {
            (None, None) => Depot::municipal_base(),
            (Some(lat), Some(lon)) => custom_depot(lat, lon)?,
            _ => return Err(CliError::IncompleteDepot),
        };
        Ok(Self {
            orders_file,
            gazetteer,
            selection: args.select.as_deref().map(parse_selection),
            depot,
            format: args.format.unwrap_or_default(),
        })
    }
}

fn custom_depot(lat: f64, lon: f64) -> Result<Depot, CliError> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(CliError::InvalidDepot { lat, lon });
    }
    Ok(Depot::new(format!("{lat}, {lon}"), Coord { x: lon, y: lat }))
}

/// Split a comma-separated id list, dropping blanks.
pub(crate) fn parse_selection(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Builds the geocoder for the current route invocation.
pub(crate) trait GeocoderBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn Geocoder>, CliError>;
}

pub(crate) struct GazetteerGeocoderBuilder;

impl GeocoderBuilder for GazetteerGeocoderBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn Geocoder>, CliError> {
        let gazetteer = GazetteerGeocoder::load(&config.gazetteer)?;
        Ok(Box::new(gazetteer))
    }
}

pub(crate) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_route_with(args, &GazetteerGeocoderBuilder, &mut stdout)
}

pub(crate) fn run_route_with(
    args: RouteArgs,
    builder: &dyn GeocoderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_route_config(args)?;
    let plan = execute_route(&config, builder)?;
    write_sheet(writer, &plan.sheet, config.format, route_table)
}

fn resolve_route_config(args: RouteArgs) -> Result<RouteConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_route(config: &RouteConfig, builder: &dyn GeocoderBuilder) -> Result<RoutePlan, CliError> {
    let book = WorkOrderBook::load(&config.orders_file)?;
    let selection = match &config.selection {
        Some(ids) => ids.clone(),
        None => pending_selection(&book)?,
    };
    let geocoder = builder.build(config)?;
    let plan = plan_route_blocking(
        &book,
        &selection,
        geocoder.as_ref(),
        &NearestNeighbourSequencer,
        &config.depot,
    )?;
    Ok(plan)
}

fn pending_selection(book: &WorkOrderBook) -> Result<Vec<String>, CliError> {
    let ids: Vec<String> = book.pending().map(|order| order.id.to_string()).collect();
    if ids.is_empty() {
        return Err(CliError::NothingToRoute);
    }
    log::info!("no selection given; routing all {} pending orders", ids.len());
    Ok(ids)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
