//! Printable route sheet rows.
//!
//! The sheet is the hand-off to the document renderer: one row per stop with
//! the columns the technicians read on paper.

use crate::{Depot, LocationSource, RouteSequence, VisitTarget};

/// Marker printed for stops without an appointment.
pub const NO_FIXED_TIME: &str = "Sin horario fijo";

/// One printed line of the route sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSheetRow {
    /// 1-based visiting position.
    pub position: usize,
    /// Five-digit order number, or the raw id when no number is known.
    pub order_number: String,
    /// Resident name.
    pub resident: String,
    /// Street address.
    pub address: String,
    /// Service to perform.
    pub service_type: String,
    /// `HH:MM` appointment or [`NO_FIXED_TIME`].
    pub time_slot: String,
    /// Whether the stop is placed at a fallback coordinate.
    pub approximate_location: bool,
}

impl RouteSheetRow {
    fn from_stop(position: usize, stop: &VisitTarget) -> Self {
        let metadata = &stop.metadata;
        Self {
            position,
            order_number: metadata
                .order_number
                .map_or_else(|| stop.id.to_string(), |number| format!("{number:05}")),
            resident: metadata.label.clone(),
            address: metadata.address.clone(),
            service_type: metadata.service_type.clone(),
            time_slot: stop
                .fixed_time_slot
                .map_or_else(|| NO_FIXED_TIME.to_owned(), |slot| slot.to_string()),
            approximate_location: stop.location_source == LocationSource::Fallback,
        }
    }
}

/// Rows for a technician's day, headed by the depot they leave from.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vectores_core::{Depot, RouteSequence, RouteSheet, VisitTarget};
///
/// let route = RouteSequence::new(vec![VisitTarget::new("a", Coord { x: 0.0, y: 0.0 })], 0);
/// let sheet = RouteSheet::new(&Depot::municipal_base(), &route);
///
/// assert_eq!(sheet.rows[0].position, 1);
/// assert_eq!(sheet.rows[0].time_slot, "Sin horario fijo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSheet {
    /// Name of the starting depot.
    pub depot_name: String,
    /// Rows in visiting order.
    pub rows: Vec<RouteSheetRow>,
}

impl RouteSheet {
    /// Lay out `route` as printable rows.
    #[must_use]
    pub fn new(depot: &Depot, route: &RouteSequence) -> Self {
        let rows = route
            .stops()
            .iter()
            .zip(1..)
            .map(|(stop, position)| RouteSheetRow::from_stop(position, stop))
            .collect();
        Self {
            depot_name: depot.name.clone(),
            rows,
        }
    }

    /// Number of stops flagged with a fallback coordinate.
    #[must_use]
    pub fn approximate_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.approximate_location)
            .count()
    }
}
