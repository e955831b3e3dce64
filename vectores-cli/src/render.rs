//! Plain-text rendering of route sheets, work order sheets and search results.

use serde::{Deserialize, Serialize};
use std::io::Write;
use vectores_core::{RouteSheet, RouteSheetRow, VisitLogRow, WorkOrder, WorkOrderSheet};

use crate::CliError;

/// Marker appended to addresses placed at a fallback coordinate.
pub(crate) const APPROXIMATE_MARK: &str = "*";

const ROUTE_HEADERS: [&str; 6] = ["#", "Orden", "Vecino", "Dirección", "Servicio", "Horario"];
const VISIT_HEADERS: [&str; 5] = [
    "FECHA",
    "DETALLE",
    "ESTADO",
    "PRODUCTO Y DOSIS",
    "RESPONSABLE",
];
const NO_VISITS: &str = "Sin visitas registradas";
const COLUMN_GAP: &str = "  ";

/// Output format for printable sheets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Aligned columns for reading in a terminal.
    #[default]
    Table,
    /// The sheet as pretty-printed JSON.
    Json,
}

fn route_cells(row: &RouteSheetRow) -> [String; 6] {
    let address = if row.approximate_location {
        format!("{} {APPROXIMATE_MARK}", row.address)
    } else {
        row.address.clone()
    };
    [
        row.position.to_string(),
        row.order_number.clone(),
        row.resident.clone(),
        address,
        row.service_type.clone(),
        row.time_slot.clone(),
    ]
}

fn push_line<'a>(out: &mut String, line: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = line
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(padded.join(COLUMN_GAP).trim_end());
    out.push('\n');
}

fn visit_cells(row: &VisitLogRow) -> [String; 5] {
    [
        row.date.clone(),
        row.detail.clone(),
        row.stage.clone(),
        row.product_and_dose.clone(),
        row.technicians.clone(),
    ]
}

/// Append `body` under `headers`, each column padded to its widest cell.
fn push_table<const N: usize>(out: &mut String, headers: [&str; N], body: &[[String; N]]) {
    let mut widths = headers.map(|header| header.chars().count());
    for row in body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    push_line(out, headers.into_iter(), &widths);
    for row in body {
        push_line(out, row.iter().map(String::as_str), &widths);
    }
}

/// Render `sheet` as aligned columns headed by the depot.
pub(crate) fn route_table(sheet: &RouteSheet) -> String {
    let body: Vec<[String; 6]> = sheet.rows.iter().map(route_cells).collect();
    let mut out = format!("Salida: {}\n", sheet.depot_name);
    push_table(&mut out, ROUTE_HEADERS, &body);
    if sheet.approximate_count() > 0 {
        out.push_str(&format!(
            "{APPROXIMATE_MARK} dirección no encontrada; ubicación aproximada\n"
        ));
    }
    out
}

/// Render a work order's header and visit log.
pub(crate) fn order_sheet_text(sheet: &WorkOrderSheet) -> String {
    let header = [
        ("SOLICITANTE", &sheet.resident),
        ("TEL", &sheet.phone),
        ("DIRECCIÓN", &sheet.address),
        ("LOCALIDAD/BARRIO", &sheet.neighbourhood),
        ("TIPO DE PLAGA", &sheet.service_type),
        ("ESTADO", &sheet.status),
    ];
    let mut out = format!("ORDEN DE TRABAJO Nº {}\n", sheet.order_number);
    for (label, value) in header {
        out.push_str(format!("{label}: {value}").trim_end());
        out.push('\n');
    }
    out.push_str("\nSEGUIMIENTO DE TAREAS REALIZADAS\n");
    if sheet.visits.is_empty() {
        out.push_str(NO_VISITS);
        out.push('\n');
    } else {
        let body: Vec<[String; 5]> = sheet.visits.iter().map(visit_cells).collect();
        push_table(&mut out, VISIT_HEADERS, &body);
    }
    out
}

/// Write `sheet` as `table` text or as pretty JSON, ending with a newline.
pub(crate) fn write_sheet<T: Serialize>(
    writer: &mut dyn Write,
    sheet: &T,
    format: OutputFormat,
    table: impl FnOnce(&T) -> String,
) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Table => table(sheet),
        OutputFormat::Json => {
            serde_json::to_string_pretty(sheet).map_err(CliError::SerialiseSheet)?
        }
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    if !payload.ends_with('\n') {
        writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

/// One search result line.
pub(crate) fn order_line(order: &WorkOrder) -> String {
    format!(
        "{}  {}  {}  {}  {}",
        order.formatted_number(),
        order.resident.name,
        order.resident.address,
        order.service_type,
        order.status
    )
}
