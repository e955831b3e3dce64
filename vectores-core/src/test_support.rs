//! Test-only builders shared by unit, behaviour and property tests.

use geo::Coord;

use crate::{
    Depot, Resident, RouteSequence, SequenceError, Sequencer, ServiceType, TimeSlot, VisitTarget,
    WorkOrder,
};

/// Free target at `(x, y)`.
#[must_use]
pub fn target(id: &str, x: f64, y: f64) -> VisitTarget {
    VisitTarget::new(id, Coord { x, y })
}

/// Target at `(x, y)` pinned to `hour:minute`.
///
/// Out-of-range times produce a free target.
#[must_use]
pub fn scheduled_target(id: &str, x: f64, y: f64, hour: u32, minute: u32) -> VisitTarget {
    target(id, x, y).with_time_slot(TimeSlot::from_hm(hour, minute))
}

/// Depot at the origin.
#[must_use]
pub fn origin_depot() -> Depot {
    Depot::new("origin", Coord { x: 0.0, y: 0.0 })
}

/// Pending work order for a resident at `address`.
#[must_use]
pub fn work_order(id: &str, number: u32, name: &str, address: &str) -> WorkOrder {
    WorkOrder::new(
        id,
        number,
        Resident::new(name, address),
        ServiceType::Deratization,
    )
}

/// `Sequencer` that returns targets in input order, for exercising callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputOrderSequencer;

impl Sequencer for InputOrderSequencer {
    fn sequence(
        &self,
        targets: Vec<VisitTarget>,
        _depot: &Depot,
    ) -> Result<RouteSequence, SequenceError> {
        if targets.is_empty() {
            return Err(SequenceError::EmptyInput);
        }
        Ok(RouteSequence::new(targets, 0))
    }
}
