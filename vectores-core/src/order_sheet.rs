//! Printable work order.
//!
//! The per-order document the office hands to technicians: a header naming
//! the resident and the job, then the log of visits made so far.

use crate::{Visit, WorkOrder};

/// Detail printed for a visit logged without notes.
pub const NO_VISIT_DETAIL: &str = "Sin detalle";

/// Stage printed for a visit logged without one.
pub const DEFAULT_VISIT_STAGE: &str = "INSPECCIÓN";

/// Day-first date as printed on Argentine forms, e.g. `2/5/2024`.
const VISIT_DATE_FORMAT: &str = "%-d/%-m/%Y";

/// One line of the visit log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitLogRow {
    /// Visit date, `d/m/yyyy`.
    pub date: String,
    /// Technician notes or [`NO_VISIT_DETAIL`].
    pub detail: String,
    /// Stage reached or [`DEFAULT_VISIT_STAGE`].
    pub stage: String,
    /// Quantity and product applied.
    pub product_and_dose: String,
    /// Attending technicians, comma separated.
    pub technicians: String,
}

impl From<&Visit> for VisitLogRow {
    fn from(visit: &Visit) -> Self {
        Self {
            date: visit.date.format(VISIT_DATE_FORMAT).to_string(),
            detail: or_default(&visit.notes, NO_VISIT_DETAIL),
            stage: or_default(&visit.stage, DEFAULT_VISIT_STAGE),
            product_and_dose: visit.dose(),
            technicians: visit.technicians.join(", "),
        }
    }
}

fn or_default(text: &str, default: &str) -> String {
    let trimmed = text.trim();
    let printed = if trimmed.is_empty() { default } else { trimmed };
    printed.to_owned()
}

/// A work order laid out for printing.
///
/// # Examples
/// ```
/// use vectores_core::{Resident, ServiceType, WorkOrder, WorkOrderSheet};
///
/// let order = WorkOrder::new(
///     "65f1",
///     42,
///     Resident::new("Ana Sosa", "Alvear 100"),
///     ServiceType::Deratization,
/// );
/// let sheet = WorkOrderSheet::new(&order);
///
/// assert_eq!(sheet.order_number, "00042");
/// assert_eq!(sheet.service_type, "Desratización");
/// assert!(sheet.visits.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkOrderSheet {
    /// Five-digit order number.
    pub order_number: String,
    /// Resident who requested the service.
    pub resident: String,
    /// Resident's contact phone.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Neighbourhood ("barrio").
    pub neighbourhood: String,
    /// Service requested.
    pub service_type: String,
    /// Progress of the order.
    pub status: String,
    /// Visits in the order they were logged.
    pub visits: Vec<VisitLogRow>,
}

impl WorkOrderSheet {
    /// Lay out `order` for printing.
    #[must_use]
    pub fn new(order: &WorkOrder) -> Self {
        let resident = &order.resident;
        Self {
            order_number: order.formatted_number(),
            resident: resident.name.clone(),
            phone: resident.phone.clone(),
            address: resident.address.clone(),
            neighbourhood: resident.neighbourhood.clone(),
            service_type: order.service_type.to_string(),
            status: order.status.to_string(),
            visits: order.visits.iter().map(VisitLogRow::from).collect(),
        }
    }
}

impl From<&WorkOrder> for WorkOrderSheet {
    fn from(order: &WorkOrder) -> Self {
        Self::new(order)
    }
}
