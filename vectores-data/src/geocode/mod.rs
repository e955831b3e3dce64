//! Address lookup.
//!
//! [`Geocoder`] is the seam between route planning and whatever service turns
//! a street address into a coordinate. Lookups are async so a batch can be
//! issued concurrently; see [`crate::resolve::resolve_targets`].
//!
//! [`GazetteerGeocoder`] answers from a table of known addresses loaded from
//! disk and is what the command-line tool uses.

mod gazetteer;

use async_trait::async_trait;
use geo::Coord;
use thiserror::Error;

pub use gazetteer::{GazetteerEntry, GazetteerError, GazetteerGeocoder, normalise_address};

/// Reasons an address could not be turned into a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GeocodeError {
    /// The address was blank after trimming.
    #[error("address is empty")]
    EmptyAddress,
    /// The service has no match for the address.
    #[error("no coordinates known for \"{address}\"")]
    NotFound {
        /// Address as supplied by the caller.
        address: String,
    },
    /// The service could not be reached or answered with an error.
    #[error("geocoding service unavailable: {message}")]
    Unavailable {
        /// Human-readable failure description.
        message: String,
    },
}

/// Resolve street addresses to WGS84 coordinates.
///
/// Returned coordinates use `x` for longitude and `y` for latitude.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use geo::Coord;
/// use vectores_data::geocode::{GeocodeError, Geocoder};
///
/// struct Everywhere;
///
/// #[async_trait]
/// impl Geocoder for Everywhere {
///     async fn geocode(&self, _address: &str) -> Result<Coord<f64>, GeocodeError> {
///         Ok(Coord { x: -58.5, y: -34.5 })
///     }
/// }
/// ```
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Look up `address`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] when the address is blank, unknown, or the
    /// backing service fails.
    async fn geocode(&self, address: &str) -> Result<Coord<f64>, GeocodeError>;
}

