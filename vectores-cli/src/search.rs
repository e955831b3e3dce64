//! Search command implementation.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use vectores_core::WorkOrder;
use vectores_data::WorkOrderBook;

use crate::render::order_line;
use crate::route::require_existing;
use crate::{ARG_INCLUDE_COMPLETED, ARG_ORDERS_FILE, ARG_TERM, CliError, ENV_SEARCH_ORDERS_FILE};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List work orders whose number contains the term, or whose \
                 resident name or address contains it ignoring case, or \
                 whose phone contains it. Completed orders are hidden unless \
                 --include-completed is given.",
    about = "Find work orders"
)]
#[ortho_config(prefix = "VECTORES")]
pub(crate) struct SearchArgs {
    /// Path to the JSON list of work orders.
    #[arg(long = ARG_ORDERS_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) orders_file: Option<Utf8PathBuf>,
    /// Text to look for; omit to list everything.
    #[arg(long = ARG_TERM, value_name = "text")]
    #[serde(default)]
    pub(crate) term: Option<String>,
    /// Also list completed orders.
    #[arg(long = ARG_INCLUDE_COMPLETED)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) include_completed: bool,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    pub(crate) orders_file: Utf8PathBuf,
    pub(crate) term: String,
    pub(crate) include_completed: bool,
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let orders_file = args.orders_file.ok_or(CliError::MissingArgument {
            field: ARG_ORDERS_FILE,
            env: ENV_SEARCH_ORDERS_FILE,
        })?;
        Ok(Self {
            orders_file,
            term: args.term.unwrap_or_default().trim().to_owned(),
            include_completed: args.include_completed,
        })
    }
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_search_with(args, &mut stdout)
}

pub(crate) fn run_search_with(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.orders_file, ARG_ORDERS_FILE)?;
    let book = WorkOrderBook::load(&config.orders_file)?;
    let matches = matching_orders(&book, &config);
    if matches.is_empty() {
        return writeln!(writer, "no work orders match \"{}\"", config.term)
            .map_err(CliError::WriteOutput);
    }
    for order in matches {
        writeln!(writer, "{}", order_line(order)).map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

pub(crate) fn matching_orders<'a>(
    book: &'a WorkOrderBook,
    config: &'a SearchConfig,
) -> Vec<&'a WorkOrder> {
    book.search(&config.term)
        .filter(|order| config.include_completed || !order.is_completed())
        .collect()
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SearchConfig, CliError> {
    let merged = SearchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SearchConfig::try_from(merged)
}
