//! Office records: residents, work orders and the visits logged against them.
//!
//! Field names on the wire follow the persistence layer (`nombre`,
//! `numeroOrden`, `visitas`, ...); the Rust names are descriptive English.

mod resident;
mod service;
mod visit;
#[cfg(feature = "serde")]
mod wire;
mod work_order;

pub use resident::{Payment, Resident};
pub use service::{ServiceType, WorkOrderStatus};
pub use visit::Visit;
pub use work_order::{WorkOrder, WorkOrderError};

/// Case-insensitive substring test used by the search box.
fn contains_folded(haystack: &str, needle_folded: &str) -> bool {
    haystack.to_lowercase().contains(needle_folded)
}
