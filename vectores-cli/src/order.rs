//! Order command implementation.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use vectores_core::WorkOrderSheet;
use vectores_data::WorkOrderBook;

use crate::render::{OutputFormat, order_sheet_text, write_sheet};
use crate::route::require_existing;
use crate::{ARG_FORMAT, ARG_ID, ARG_ORDERS_FILE, CliError, ENV_ORDER_ID, ENV_ORDER_ORDERS_FILE};

/// CLI arguments for the `order` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print one work order: the resident and service it was \
                 issued for, then every visit logged against it with its \
                 date, detail, stage, product and technicians.",
    about = "Print a work order sheet"
)]
#[ortho_config(prefix = "VECTORES")]
pub(crate) struct OrderArgs {
    /// Path to the JSON list of work orders.
    #[arg(long = ARG_ORDERS_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) orders_file: Option<Utf8PathBuf>,
    /// Identifier of the work order to print.
    #[arg(long = ARG_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) id: Option<String>,
    /// Output format for the sheet.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl OrderArgs {
    pub(crate) fn into_config(self) -> Result<OrderConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OrderConfig::try_from(merged)
    }
}

/// Resolved `order` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderConfig {
    pub(crate) orders_file: Utf8PathBuf,
    pub(crate) id: String,
    pub(crate) format: OutputFormat,
}

impl TryFrom<OrderArgs> for OrderConfig {
    type Error = CliError;

    fn try_from(args: OrderArgs) -> Result<Self, Self::Error> {
        let orders_file = args.orders_file.ok_or(CliError::MissingArgument {
            field: ARG_ORDERS_FILE,
            env: ENV_ORDER_ORDERS_FILE,
        })?;
        let id = args
            .id
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_ID,
                env: ENV_ORDER_ID,
            })?;
        Ok(Self {
            orders_file,
            id,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_order(args: OrderArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_order_with(args, &mut stdout)
}

pub(crate) fn run_order_with(args: OrderArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.orders_file, ARG_ORDERS_FILE)?;
    let book = WorkOrderBook::load(&config.orders_file)?;
    let order = book
        .get(&config.id)
        .ok_or_else(|| CliError::UnknownOrder {
            id: config.id.clone(),
        })?;
    let sheet = WorkOrderSheet::new(order);
    write_sheet(writer, &sheet, config.format, order_sheet_text)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OrderConfig, CliError> {
    let merged = OrderArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OrderConfig::try_from(merged)
}
