//! Facade crate for the vector-control route planner.
//!
//! This crate re-exports the core domain types and, behind the `data`
//! feature, the work order book, geocoding, and route planning pipeline.

#![forbid(unsafe_code)]

pub use vectores_core::{
    DEFAULT_VISIT_STAGE, Depot, LocationSource, NO_FIXED_TIME, NO_VISIT_DETAIL,
    NearestNeighbourSequencer, Resident, RouteSequence, RouteSheet, RouteSheetRow, SequenceError,
    Sequencer, ServiceType, TargetId, TargetMetadata, TimeSlot, TimeSlotError, Visit, VisitLogRow,
    VisitTarget, WorkOrder, WorkOrderError, WorkOrderSheet, WorkOrderStatus,
};

#[cfg(feature = "data")]
pub use vectores_data::{
    BookError, GazetteerGeocoder, GeocodeError, Geocoder, PlanError, RoutePlan, SelectionError,
    WorkOrderBook, plan_route, plan_route_blocking, resolve_targets, select_orders,
};
