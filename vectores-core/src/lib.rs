//! Core domain types for the vector-control route planner.
//!
//! The crate holds the office records (residents, work orders, visits), the
//! stop model handed to route building, the [`Sequencer`] that orders a
//! technician's day, and the printable route and work order sheets.
//! Everything here is synchronous and free of I/O; address lookup and file
//! access live in `vectores-data`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod depot;
pub mod order_sheet;
pub mod records;
pub mod route;
pub mod route_sheet;
pub mod sequencer;
pub mod target;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod time_slot;

pub use depot::{Depot, MUNICIPAL_BASE_ADDRESS, MUNICIPAL_BASE_LOCATION};
pub use order_sheet::{DEFAULT_VISIT_STAGE, NO_VISIT_DETAIL, VisitLogRow, WorkOrderSheet};
pub use records::{
    Payment, Resident, ServiceType, Visit, WorkOrder, WorkOrderError, WorkOrderStatus,
};
pub use route::RouteSequence;
pub use route_sheet::{NO_FIXED_TIME, RouteSheet, RouteSheetRow};
pub use sequencer::{NearestNeighbourSequencer, SequenceError, Sequencer, planar_distance};
pub use target::{LocationSource, TargetId, TargetMetadata, VisitTarget};
pub use time_slot::{TimeSlot, TimeSlotError};
