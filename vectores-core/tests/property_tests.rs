//! Property-based tests for the nearest-neighbour sequencer.
//!
//! # Invariants tested
//!
//! - **Permutation:** every input target appears exactly once in the output.
//! - **Appointments first:** no free target precedes a fixed-slot target.
//! - **Time order:** fixed-slot targets are in non-decreasing time order.
//! - **Determinism:** identical input yields an identical sequence.
//! - **Greedy step:** each free stop is no farther from its predecessor than
//!   any free stop still unvisited at that point.

use std::collections::HashMap;

use geo::Coord;
use proptest::prelude::*;
use vectores_core::{
    Depot, NearestNeighbourSequencer, Sequencer, TimeSlot, VisitTarget, planar_distance,
};

fn depot() -> Depot {
    Depot::new("origin", Coord { x: 0.0, y: 0.0 })
}

/// Targets with unique ids, clustered like a town's worth of addresses.
fn target_set_strategy(max_count: usize) -> impl Strategy<Value = Vec<VisitTarget>> {
    let slot = prop::option::of((6_u32..20, 0_u32..60));
    proptest::collection::vec((-0.05_f64..0.05, -0.05_f64..0.05, slot), 1..=max_count).prop_map(
        |raw| {
            raw.into_iter()
                .enumerate()
                .map(|(index, (x, y, slot))| {
                    VisitTarget::new(format!("t{index}"), Coord { x, y })
                        .with_time_slot(slot.and_then(|(hour, minute)| TimeSlot::from_hm(hour, minute)))
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn output_is_a_permutation_of_input(targets in target_set_strategy(25)) {
        let route = NearestNeighbourSequencer
            .sequence(targets.clone(), &depot())
            .expect("non-empty input");

        prop_assert_eq!(route.len(), targets.len());
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for id in route.ids() {
            *counts.entry(id.as_str()).or_default() += 1;
        }
        for target in &targets {
            prop_assert_eq!(counts.get(target.id.as_str()).copied(), Some(1));
        }
    }

    #[test]
    fn appointments_lead_in_time_order(targets in target_set_strategy(25)) {
        let fixed_count = targets.iter().filter(|t| t.is_scheduled()).count();
        let route = NearestNeighbourSequencer
            .sequence(targets, &depot())
            .expect("non-empty input");

        prop_assert_eq!(route.scheduled().len(), fixed_count);
        prop_assert!(route.scheduled().iter().all(VisitTarget::is_scheduled));
        prop_assert!(route.unscheduled().iter().all(|t| !t.is_scheduled()));

        let minutes: Vec<u16> = route
            .scheduled()
            .iter()
            .filter_map(|t| t.fixed_time_slot.map(TimeSlot::minute_of_day))
            .collect();
        prop_assert!(minutes.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn repeated_runs_are_identical(targets in target_set_strategy(25)) {
        let first = NearestNeighbourSequencer
            .sequence(targets.clone(), &depot())
            .expect("non-empty input");
        let second = NearestNeighbourSequencer
            .sequence(targets, &depot())
            .expect("non-empty input");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn each_free_stop_is_the_nearest_remaining(targets in target_set_strategy(25)) {
        let route = NearestNeighbourSequencer
            .sequence(targets, &depot())
            .expect("non-empty input");

        let free = route.unscheduled();
        let mut position = depot().location;
        for (index, stop) in free.iter().enumerate() {
            let chosen = planar_distance(position, stop.location);
            for later in &free[index..] {
                prop_assert!(chosen <= planar_distance(position, later.location));
            }
            position = stop.location;
        }
    }
}
