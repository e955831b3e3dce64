//! Command-line interface for the vector-control route planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod order;
mod render;
mod route;
mod search;

pub use error::CliError;
use order::OrderArgs;
use route::RouteArgs;
use search::SearchArgs;

pub(crate) const ARG_ORDERS_FILE: &str = "orders-file";
pub(crate) const ARG_GAZETTEER: &str = "gazetteer";
pub(crate) const ARG_SELECT: &str = "select";
pub(crate) const ARG_DEPOT_LAT: &str = "depot-lat";
pub(crate) const ARG_DEPOT_LON: &str = "depot-lon";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_TERM: &str = "term";
pub(crate) const ARG_INCLUDE_COMPLETED: &str = "include-completed";
pub(crate) const ARG_ID: &str = "id";
pub(crate) const ENV_ROUTE_ORDERS_FILE: &str = "VECTORES_CMDS_ROUTE_ORDERS_FILE";
pub(crate) const ENV_ROUTE_GAZETTEER: &str = "VECTORES_CMDS_ROUTE_GAZETTEER";
pub(crate) const ENV_SEARCH_ORDERS_FILE: &str = "VECTORES_CMDS_SEARCH_ORDERS_FILE";
pub(crate) const ENV_ORDER_ORDERS_FILE: &str = "VECTORES_CMDS_ORDER_ORDERS_FILE";
pub(crate) const ENV_ORDER_ID: &str = "VECTORES_CMDS_ORDER_ID";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, input
/// files cannot be read, a requested order is unknown, or the route cannot
/// be planned.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Route(args) => route::run_route(args),
        Command::Search(args) => search::run_search(args),
        Command::Order(args) => order::run_order(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "vectores",
    about = "Plan daily visiting routes for vector-control work orders",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order the selected work orders into a technician's route sheet.
    Route(RouteArgs),
    /// Find work orders by number, resident name, address, or phone.
    Search(SearchArgs),
    /// Print one work order with its visit log.
    Order(OrderArgs),
}

#[cfg(test)]
mod tests;
