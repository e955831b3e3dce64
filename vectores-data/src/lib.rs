//! Data access and address resolution for the vector-control route planner.
//!
//! Responsibilities:
//! - Load the office's work orders from disk ([`book`]).
//! - Turn street addresses into coordinates ([`geocode`]).
//! - Resolve a selection of orders into located visit targets and hand them
//!   to a sequencer ([`resolve`], [`plan`]).
//!
//! Boundaries:
//! - Do not encode routing rules (live in `vectores-core`).
//! - File access goes through `vectores-fs`.
//!
//! Invariants:
//! - Resolution preserves the caller's selection order.
//! - A failed lookup never drops an order; it is placed at the fallback
//!   coordinate and flagged.

#![forbid(unsafe_code)]

pub mod book;
pub mod geocode;
pub mod plan;
pub mod resolve;

pub use book::{BookError, WorkOrderBook};
pub use geocode::{GazetteerEntry, GazetteerError, GazetteerGeocoder, GeocodeError, Geocoder};
pub use plan::{PlanError, RoutePlan, plan_route, plan_route_blocking};
pub use resolve::{SelectionError, resolve_targets, select_orders};
