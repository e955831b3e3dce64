//! End-to-end route planning: select, locate, sequence.
//!
//! [`plan_route`] is async so callers already inside a runtime can await it.
//! [`plan_route_blocking`] drives the same pipeline on a private
//! current-thread Tokio runtime for synchronous callers such as the CLI.

use std::io;

use thiserror::Error;
use vectores_core::{Depot, RouteSequence, RouteSheet, SequenceError, Sequencer};

use crate::book::WorkOrderBook;
use crate::geocode::Geocoder;
use crate::resolve::{SelectionError, resolve_targets, select_orders};

/// Failures while planning a route.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The selection was empty or named unknown orders.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// The sequencer rejected its input.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    /// The async runtime could not be started.
    #[error("failed to start the lookup runtime")]
    Runtime(#[source] io::Error),
}

/// A sequenced route and the sheet printed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Stops in visiting order.
    pub route: RouteSequence,
    /// Printable rows for the technicians.
    pub sheet: RouteSheet,
}

/// Select `selection` from `book`, geocode the addresses, and order the stops.
///
/// Orders whose address cannot be located are placed at the depot and flagged
/// as approximate on the sheet.
///
/// # Errors
///
/// Returns [`PlanError::Selection`] for an empty or unknown selection and
/// [`PlanError::Sequence`] if the sequencer fails.
pub async fn plan_route<G, S>(
    book: &WorkOrderBook,
    selection: &[String],
    geocoder: &G,
    sequencer: &S,
    depot: &Depot,
) -> Result<RoutePlan, PlanError>
where
    G: Geocoder + ?Sized,
    S: Sequencer + ?Sized,
{
    let orders = select_orders(book, selection)?;
    let targets = resolve_targets(&orders, geocoder, depot.location).await;
    let route = sequencer.sequence(targets, depot)?;
    let sheet = RouteSheet::new(depot, &route);
    if sheet.approximate_count() > 0 {
        log::warn!(
            "{} of {} stops use an approximate location",
            sheet.approximate_count(),
            sheet.rows.len()
        );
    }
    Ok(RoutePlan { route, sheet })
}

/// [`plan_route`] for synchronous callers.
///
/// Must not be called from within a Tokio runtime.
///
/// # Errors
///
/// As [`plan_route`], plus [`PlanError::Runtime`] if the runtime fails to
/// start.
pub fn plan_route_blocking<G, S>(
    book: &WorkOrderBook,
    selection: &[String],
    geocoder: &G,
    sequencer: &S,
    depot: &Depot,
) -> Result<RoutePlan, PlanError>
where
    G: Geocoder + ?Sized,
    S: Sequencer + ?Sized,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(PlanError::Runtime)?;
    runtime.block_on(plan_route(book, selection, geocoder, sequencer, depot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::GazetteerGeocoder;
    use geo::Coord;
    use rstest::{fixture, rstest};
    use vectores_core::NearestNeighbourSequencer;
    use vectores_core::test_support::{InputOrderSequencer, origin_depot, work_order};

    #[fixture]
    fn book() -> WorkOrderBook {
        let mut appointment = work_order("fixed", 3, "Carla Díaz", "Belgrano 300");
        appointment.fixed_time_slot = "10:00".parse().ok();
        WorkOrderBook::from_iter([
            work_order("far", 1, "Ana Pérez", "Av. Santa Fe 1200"),
            work_order("near", 2, "Bruno Gómez", "Alvear 45"),
            appointment,
            work_order("lost", 4, "Diego Ruiz", "Calle Sin Nombre"),
        ])
    }

    #[fixture]
    fn gazetteer() -> GazetteerGeocoder {
        let mut gazetteer = GazetteerGeocoder::new();
        gazetteer.insert("Av. Santa Fe 1200", Coord { x: 5.0, y: 0.0 });
        gazetteer.insert("Alvear 45", Coord { x: 1.0, y: 0.0 });
        gazetteer.insert("Belgrano 300", Coord { x: 9.0, y: 9.0 });
        gazetteer
    }

    fn selection(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| (*id).to_owned()).collect()
    }

    #[rstest]
    fn plans_appointments_first_then_nearest(book: WorkOrderBook, gazetteer: GazetteerGeocoder) {
        let plan = plan_route_blocking(
            &book,
            &selection(&["far", "near", "fixed", "lost"]),
            &gazetteer,
            &NearestNeighbourSequencer,
            &origin_depot(),
        )
        .expect("plan");

        let order: Vec<&str> = plan.route.ids().map(|id| id.as_str()).collect();
        assert_eq!(order, ["fixed", "lost", "near", "far"]);

        let fixed_row = plan.sheet.rows.first().expect("rows");
        assert_eq!(fixed_row.time_slot, "10:00");
        assert_eq!(fixed_row.order_number, "00003");
        assert_eq!(plan.sheet.approximate_count(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn async_planning_accepts_any_sequencer(
        book: WorkOrderBook,
        gazetteer: GazetteerGeocoder,
    ) {
        let plan = plan_route(
            &book,
            &selection(&["near", "far"]),
            &gazetteer,
            &InputOrderSequencer,
            &origin_depot(),
        )
        .await
        .expect("plan");

        let order: Vec<&str> = plan.route.ids().map(|id| id.as_str()).collect();
        assert_eq!(order, ["near", "far"]);
        assert_eq!(plan.sheet.approximate_count(), 0);
    }

    #[rstest]
    fn empty_selection_surfaces_as_selection_error(
        book: WorkOrderBook,
        gazetteer: GazetteerGeocoder,
    ) {
        let err = plan_route_blocking(
            &book,
            &[],
            &gazetteer,
            &NearestNeighbourSequencer,
            &origin_depot(),
        )
        .expect_err("empty selection");
        assert!(matches!(err, PlanError::Selection(SelectionError::Empty)));
        assert_eq!(err.to_string(), "select at least one order");
    }
}
