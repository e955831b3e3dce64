//! Table-backed geocoder.

use std::collections::HashMap;
use std::io;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{GeocodeError, Geocoder};

/// One known address as stored in a gazetteer file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    /// Street address as written on work orders.
    pub address: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Errors raised while building a [`GazetteerGeocoder`].
#[derive(Debug, Error)]
pub enum GazetteerError {
    /// The gazetteer file could not be read.
    #[error("failed to read gazetteer {path}")]
    Open {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The gazetteer file is not a JSON array of entries.
    #[error("gazetteer {path} is malformed")]
    Parse {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// An entry's coordinates are not valid WGS84 degrees.
    #[error("gazetteer entry \"{address}\" has invalid coordinates ({lat}, {lon})")]
    InvalidCoordinate {
        /// Address of the offending entry.
        address: String,
        /// Latitude as supplied.
        lat: f64,
        /// Longitude as supplied.
        lon: f64,
    },
}

/// Canonical lookup key for an address.
///
/// Trims, lower-cases, and collapses runs of whitespace to a single space, so
/// `"  Av. Santa Fe   1200 "` and `"av. santa fe 1200"` share a key.
///
/// # Examples
///
/// ```
/// use vectores_data::geocode::normalise_address;
///
/// assert_eq!(normalise_address("  Av. Santa Fe   1200 "), "av. santa fe 1200");
/// ```
#[must_use]
pub fn normalise_address(address: &str) -> String {
    address
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Geocoder answering from an in-memory table of known addresses.
#[derive(Debug, Clone, Default)]
pub struct GazetteerGeocoder {
    entries: HashMap<String, Coord<f64>>,
}

impl GazetteerGeocoder {
    /// Empty gazetteer; every lookup misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries. Later duplicates of the same normalised address win.
    ///
    /// # Errors
    ///
    /// Returns [`GazetteerError::InvalidCoordinate`] for a non-finite or
    /// out-of-range latitude or longitude.
    pub fn from_entries(
        entries: impl IntoIterator<Item = GazetteerEntry>,
    ) -> Result<Self, GazetteerError> {
        let mut gazetteer = Self::new();
        for entry in entries {
            if !(-90.0..=90.0).contains(&entry.lat) || !(-180.0..=180.0).contains(&entry.lon) {
                return Err(GazetteerError::InvalidCoordinate {
                    address: entry.address,
                    lat: entry.lat,
                    lon: entry.lon,
                });
            }
            gazetteer.insert(
                &entry.address,
                Coord {
                    x: entry.lon,
                    y: entry.lat,
                },
            );
        }
        Ok(gazetteer)
    }

    /// Load a JSON array of [`GazetteerEntry`] values from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GazetteerError::Open`] if the file cannot be read,
    /// [`GazetteerError::Parse`] if it is not valid JSON, and
    /// [`GazetteerError::InvalidCoordinate`] for bad coordinates.
    pub fn load(path: &Utf8Path) -> Result<Self, GazetteerError> {
        let text = vectores_fs::read_utf8_file(path).map_err(|source| GazetteerError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<GazetteerEntry> =
            serde_json::from_str(&text).map_err(|source| GazetteerError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let gazetteer = Self::from_entries(entries)?;
        log::debug!("loaded {} gazetteer entries from {path}", gazetteer.len());
        Ok(gazetteer)
    }

    /// Record `location` for `address`, replacing any previous entry.
    pub fn insert(&mut self, address: &str, location: Coord<f64>) {
        self.entries.insert(normalise_address(address), location);
    }

    /// Number of distinct addresses known.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no addresses are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Geocoder for GazetteerGeocoder {
    async fn geocode(&self, address: &str) -> Result<Coord<f64>, GeocodeError> {
        let key = normalise_address(address);
        if key.is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }
        self.entries
            .get(&key)
            .copied()
            .ok_or_else(|| GeocodeError::NotFound {
                address: address.trim().to_owned(),
            })
    }
}
