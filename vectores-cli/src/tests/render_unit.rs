//! Unit tests for route sheet rendering.

use crate::render::route_table;
use geo::Coord;
use rstest::rstest;
use vectores_core::test_support::{origin_depot, work_order};
use vectores_core::{LocationSource, RouteSequence, RouteSheet};

fn sheet(fallback_second: bool) -> RouteSheet {
    let mut booked = work_order("c3", 103, "Carla Díaz", "Belgrano 300");
    booked.fixed_time_slot = "09:30".parse().ok();
    let second_source = if fallback_second {
        LocationSource::Fallback
    } else {
        LocationSource::Geocoded
    };
    let stops = vec![
        booked.to_visit_target(Coord { x: 1.0, y: 1.0 }, LocationSource::Geocoded),
        work_order("b2", 102, "Bruno Gómez", "Alvear 45")
            .to_visit_target(Coord { x: 0.0, y: 0.0 }, second_source),
    ];
    RouteSheet::new(&origin_depot(), &RouteSequence::new(stops, 1))
}

fn char_column(line: &str, needle: &str) -> Option<usize> {
    line.contains(needle)
        .then(|| line.split(needle).next().map_or(0, |prefix| prefix.chars().count()))
}

#[rstest]
fn table_aligns_columns_under_headers() {
    let table = route_table(&sheet(false));
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.first(), Some(&"Salida: origin"));
    let header = lines.get(1).expect("header line");
    let first = lines.get(2).expect("first row");
    assert!(char_column(header, "Dirección").is_some());
    assert_eq!(
        char_column(header, "Dirección"),
        char_column(first, "Belgrano 300")
    );
    assert!(first.ends_with("09:30"));
    assert!(lines.get(3).expect("second row").ends_with("Sin horario fijo"));
    assert_eq!(lines.len(), 4);
}

#[rstest]
fn approximate_stops_get_a_marker_and_footnote() {
    let table = route_table(&sheet(true));
    assert!(table.contains("Alvear 45 *"));
    assert!(table.ends_with("* dirección no encontrada; ubicación aproximada\n"));
}
