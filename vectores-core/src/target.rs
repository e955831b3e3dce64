//! Stops handed to the route sequencer.
//!
//! A [`VisitTarget`] is one selected work order reduced to what routing needs:
//! where it is, whether it has a fixed appointment, and the display fields the
//! printed route sheet carries through untouched.

use std::fmt;

use geo::Coord;

use crate::TimeSlot;

/// Opaque identifier of the work order behind a stop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TargetId(String);

impl TargetId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TargetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Where a stop's coordinate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LocationSource {
    /// The address was found by the geocoder.
    #[default]
    Geocoded,
    /// The lookup failed and a substitute coordinate stands in.
    Fallback,
}

/// Display fields carried through sequencing unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetMetadata {
    /// Human-readable name, usually the resident's.
    pub label: String,
    /// Street address as typed by the office.
    pub address: String,
    /// Service to perform, e.g. "Desratización".
    pub service_type: String,
    /// Work-order number shown on printed documents.
    #[cfg_attr(feature = "serde", serde(default))]
    pub order_number: Option<u32>,
}

/// A single place the technician must visit.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vectores_core::{TimeSlot, VisitTarget};
///
/// let slot = TimeSlot::from_hm(9, 0);
/// let target = VisitTarget::new("64a1", Coord { x: -58.52, y: -34.49 })
///     .with_time_slot(slot);
///
/// assert_eq!(target.id.as_str(), "64a1");
/// assert!(target.fixed_time_slot.is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitTarget {
    /// Identifier of the underlying work order.
    pub id: TargetId,
    /// Resolved position of the property.
    pub location: Coord<f64>,
    /// Appointment time, when the visit is pinned to one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fixed_time_slot: Option<TimeSlot>,
    /// Display fields for the route sheet.
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: TargetMetadata,
    /// Provenance of `location`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location_source: LocationSource,
}

impl VisitTarget {
    /// Construct a free (unscheduled) target with empty metadata.
    pub fn new(id: impl Into<TargetId>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            location,
            fixed_time_slot: None,
            metadata: TargetMetadata::default(),
            location_source: LocationSource::Geocoded,
        }
    }

    /// Pin the target to an appointment time, or clear it with `None`.
    #[must_use]
    pub const fn with_time_slot(mut self, slot: Option<TimeSlot>) -> Self {
        self.fixed_time_slot = slot;
        self
    }

    /// Attach display metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: TargetMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Record where the coordinate came from.
    #[must_use]
    pub const fn with_location_source(mut self, source: LocationSource) -> Self {
        self.location_source = source;
        self
    }

    /// Whether the visit is bound to a fixed appointment.
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        self.fixed_time_slot.is_some()
    }
}
