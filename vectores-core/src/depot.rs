//! The operating base every route starts from.

use geo::Coord;

/// Street address of the vector-control office.
pub const MUNICIPAL_BASE_ADDRESS: &str = "Av. Fondo de la Legua 240, Martínez";

/// Position of the vector-control office (`x = longitude`, `y = latitude`).
pub const MUNICIPAL_BASE_LOCATION: Coord<f64> = Coord {
    x: -58.521_8,
    y: -34.493_7,
};

/// Fixed start location for route generation.
///
/// # Examples
/// ```
/// use vectores_core::Depot;
///
/// let depot = Depot::municipal_base();
/// assert!(depot.name.contains("Fondo de la Legua"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Depot {
    /// Name or address printed on the route sheet.
    pub name: String,
    /// Coordinate of the base.
    pub location: Coord<f64>,
}

impl Depot {
    /// Construct a depot at an arbitrary location.
    pub fn new(name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// The office all technicians leave from.
    #[must_use]
    pub fn municipal_base() -> Self {
        Self::new(MUNICIPAL_BASE_ADDRESS, MUNICIPAL_BASE_LOCATION)
    }
}

impl Default for Depot {
    fn default() -> Self {
        Self::municipal_base()
    }
}
