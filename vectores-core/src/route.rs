//! Ordered output of a sequencer.

use crate::{Depot, TargetId, VisitTarget, planar_distance};

/// Stops in visiting order, fixed appointments first.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vectores_core::{RouteSequence, VisitTarget};
///
/// let stops = vec![VisitTarget::new("a", Coord { x: 0.0, y: 0.0 })];
/// let route = RouteSequence::new(stops, 0);
///
/// assert_eq!(route.len(), 1);
/// assert!(route.scheduled().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawRouteSequence")
)]
pub struct RouteSequence {
    stops: Vec<VisitTarget>,
    scheduled_len: usize,
}

/// Unchecked wire shape; deserialising goes through [`RouteSequence::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRouteSequence {
    stops: Vec<VisitTarget>,
    scheduled_len: usize,
}

#[cfg(feature = "serde")]
impl From<RawRouteSequence> for RouteSequence {
    fn from(raw: RawRouteSequence) -> Self {
        Self::new(raw.stops, raw.scheduled_len)
    }
}

impl RouteSequence {
    /// Wrap ordered stops whose first `scheduled_len` entries are appointments.
    ///
    /// `scheduled_len` is clamped to the number of stops.
    #[must_use]
    pub fn new(stops: Vec<VisitTarget>, scheduled_len: usize) -> Self {
        let clamped = scheduled_len.min(stops.len());
        Self {
            stops,
            scheduled_len: clamped,
        }
    }

    /// All stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[VisitTarget] {
        &self.stops
    }

    /// The leading block of fixed-slot stops, in time order.
    #[must_use]
    pub fn scheduled(&self) -> &[VisitTarget] {
        self.stops.get(..self.scheduled_len).unwrap_or_default()
    }

    /// The trailing block of stops ordered by distance.
    #[must_use]
    pub fn unscheduled(&self) -> &[VisitTarget] {
        self.stops.get(self.scheduled_len..).unwrap_or_default()
    }

    /// Identifiers in visiting order.
    pub fn ids(&self) -> impl Iterator<Item = &TargetId> + '_ {
        self.stops.iter().map(|stop| &stop.id)
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Consume the route, returning the ordered stops.
    #[must_use]
    pub fn into_stops(self) -> Vec<VisitTarget> {
        self.stops
    }

    /// Total straight-line length from `depot` through every stop, in degrees.
    ///
    /// The return leg to the depot is not included.
    #[must_use]
    pub fn hop_distance(&self, depot: &Depot) -> f64 {
        self.stops
            .iter()
            .scan(depot.location, |position, stop| {
                let hop = planar_distance(*position, stop.location);
                *position = stop.location;
                Some(hop)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    fn stop(id: &str, x: f64) -> VisitTarget {
        VisitTarget::new(id, Coord { x, y: 0.0 })
    }

    #[rstest]
    fn splits_scheduled_and_unscheduled() {
        let route = RouteSequence::new(vec![stop("f", 9.0), stop("a", 1.0), stop("b", 2.0)], 1);
        let scheduled: Vec<_> = route.scheduled().iter().map(|s| s.id.as_str()).collect();
        let unscheduled: Vec<_> = route.unscheduled().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(scheduled, ["f"]);
        assert_eq!(unscheduled, ["a", "b"]);
    }

    #[rstest]
    fn clamps_scheduled_length() {
        let route = RouteSequence::new(vec![stop("a", 1.0)], 5);
        assert_eq!(route.scheduled().len(), 1);
        assert!(route.unscheduled().is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#"{"stops": [], "scheduled_len": 7}"#, 0, 0)]
    #[case(
        r#"{"stops": [{"id": "a", "location": {"x": 1.0, "y": 0.0}}], "scheduled_len": 3}"#,
        1,
        1
    )]
    fn deserialising_clamps_scheduled_length(
        #[case] json: &str,
        #[case] len: usize,
        #[case] scheduled: usize,
    ) {
        let route: RouteSequence = serde_json::from_str(json).expect("valid route");
        assert_eq!(route.len(), len);
        assert_eq!(route.scheduled().len(), scheduled);
        assert!(route.unscheduled().is_empty());
    }

    #[rstest]
    fn hop_distance_walks_from_depot() {
        let depot = Depot::new("origin", Coord { x: 0.0, y: 0.0 });
        let route = RouteSequence::new(vec![stop("a", 1.0), stop("c", 2.0), stop("b", 5.0)], 0);
        assert!((route.hop_distance(&depot) - 5.0).abs() < 1e-12);
    }
}
