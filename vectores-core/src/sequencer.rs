//! Order a technician's daily stops.
//!
//! Fixed appointments are hard constraints: they always lead the route, in
//! time order, wherever they are on the map. The remaining stops are chained
//! greedily by straight-line distance starting from the depot.
//!
//! Distances are measured directly on raw degree values. The served area spans
//! a few kilometres, so the distortion against geodesic distance does not
//! change which neighbour is nearest in practice.

use geo::Coord;
use thiserror::Error;

use crate::{Depot, RouteSequence, TimeSlot, VisitTarget};

/// Errors returned by [`Sequencer::sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// No targets were supplied.
    ///
    /// Callers should reject an empty selection before asking for a route.
    #[error("select at least one order to build a route")]
    EmptyInput,
}

/// Turn an unordered set of stops into a visiting order.
///
/// Implementations are pure: they retain nothing between calls and must return
/// [`SequenceError::EmptyInput`] rather than an empty route.
/// Sequencers must be `Send + Sync` so a single instance can serve concurrent
/// requests.
pub trait Sequencer: Send + Sync {
    /// Order `targets` for a route leaving from `depot`.
    fn sequence(
        &self,
        targets: Vec<VisitTarget>,
        depot: &Depot,
    ) -> Result<RouteSequence, SequenceError>;
}

/// Fixed slots first, then greedy nearest neighbour.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vectores_core::{Depot, NearestNeighbourSequencer, Sequencer, VisitTarget};
///
/// # fn main() -> Result<(), vectores_core::SequenceError> {
/// let depot = Depot::new("base", Coord { x: 0.0, y: 0.0 });
/// let targets = vec![
///     VisitTarget::new("A", Coord { x: 1.0, y: 0.0 }),
///     VisitTarget::new("B", Coord { x: 5.0, y: 0.0 }),
///     VisitTarget::new("C", Coord { x: 2.0, y: 0.0 }),
/// ];
///
/// let route = NearestNeighbourSequencer.sequence(targets, &depot)?;
/// let ids: Vec<&str> = route.ids().map(|id| id.as_str()).collect();
/// assert_eq!(ids, ["A", "C", "B"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbourSequencer;

impl Sequencer for NearestNeighbourSequencer {
    fn sequence(
        &self,
        targets: Vec<VisitTarget>,
        depot: &Depot,
    ) -> Result<RouteSequence, SequenceError> {
        if targets.is_empty() {
            return Err(SequenceError::EmptyInput);
        }

        let (mut scheduled, free) = partition_by_slot(targets);
        // Stable: equal slots keep their input order.
        scheduled.sort_by_key(|(slot, _)| slot.minute_of_day());
        let scheduled_len = scheduled.len();

        let mut stops: Vec<VisitTarget> = Vec::with_capacity(scheduled_len + free.len());
        stops.extend(scheduled.into_iter().map(|(_, target)| target));
        chain_nearest(free, depot.location, &mut stops);

        log::debug!(
            "sequenced {} stops ({scheduled_len} with fixed slots) from {}",
            stops.len(),
            depot.name
        );
        Ok(RouteSequence::new(stops, scheduled_len))
    }
}

type Partitioned = (Vec<(TimeSlot, VisitTarget)>, Vec<VisitTarget>);

fn partition_by_slot(targets: Vec<VisitTarget>) -> Partitioned {
    let mut scheduled = Vec::new();
    let mut free = Vec::new();
    for target in targets {
        match target.fixed_time_slot {
            Some(slot) => scheduled.push((slot, target)),
            None => free.push(target),
        }
    }
    (scheduled, free)
}

/// Greedily append the closest remaining target until the pool is empty.
///
/// The pool is an ordered `Vec` so ties resolve to the earliest remaining
/// entry; `remove` keeps the survivors in their original relative order.
fn chain_nearest(mut pool: Vec<VisitTarget>, start: Coord<f64>, out: &mut Vec<VisitTarget>) {
    let mut position = start;
    while let Some(index) = nearest_index(&pool, position) {
        let next = pool.remove(index);
        position = next.location;
        out.push(next);
    }
}

fn nearest_index(pool: &[VisitTarget], from: Coord<f64>) -> Option<usize> {
    pool.iter()
        .enumerate()
        .map(|(index, target)| (index, planar_distance(from, target.location)))
        // `min_by` keeps the first of several equal minima.
        .min_by(|(_, lhs), (_, rhs)| lhs.total_cmp(rhs))
        .map(|(index, _)| index)
}

/// Straight-line distance between two coordinates in raw degrees.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vectores_core::planar_distance;
///
/// let d = planar_distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "distance calculation requires floating-point arithmetic"
)]
pub fn planar_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx.hypot(dy)
}
