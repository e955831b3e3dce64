use geo::Coord;
use thiserror::Error;

use super::{Resident, ServiceType, Visit, WorkOrderStatus};
use crate::{LocationSource, TargetId, TargetMetadata, TimeSlot, VisitTarget};

/// A pest-control work order ("orden de trabajo") issued for a resident.
///
/// # Examples
/// ```
/// use vectores_core::{Resident, ServiceType, WorkOrder, WorkOrderStatus};
///
/// let mut order = WorkOrder::new(
///     "65f1",
///     42,
///     Resident::new("Ana Sosa", "Alvear 100"),
///     ServiceType::Deratization,
/// );
/// assert_eq!(order.formatted_number(), "00042");
///
/// order.complete();
/// assert_eq!(order.status, WorkOrderStatus::Completed);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkOrder {
    /// Persistence identifier.
    #[cfg_attr(feature = "serde", serde(rename = "_id"))]
    pub id: TargetId,
    /// Sequential order number.
    #[cfg_attr(feature = "serde", serde(rename = "numeroOrden"))]
    pub number: u32,
    /// Resident the order was issued for.
    #[cfg_attr(feature = "serde", serde(rename = "vecino"))]
    pub resident: Resident,
    /// Service requested.
    #[cfg_attr(feature = "serde", serde(rename = "tipoServicio"))]
    pub service_type: ServiceType,
    /// Current progress.
    #[cfg_attr(feature = "serde", serde(rename = "estado", default))]
    pub status: WorkOrderStatus,
    /// Visits logged so far, oldest first.
    #[cfg_attr(feature = "serde", serde(rename = "visitas", default))]
    pub visits: Vec<Visit>,
    /// Appointment time agreed with the resident.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "horario",
            default,
            deserialize_with = "super::wire::optional_slot",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub fixed_time_slot: Option<TimeSlot>,
}

/// Errors returned by [`WorkOrder`] state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkOrderError {
    /// Visits cannot be logged against a closed order.
    #[error("work order {number} is already completed")]
    AlreadyCompleted {
        /// Number of the closed order.
        number: u32,
    },
}

impl WorkOrder {
    /// Construct a pending order with no visits or appointment.
    pub fn new(
        id: impl Into<TargetId>,
        number: u32,
        resident: Resident,
        service_type: ServiceType,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            resident,
            service_type,
            status: WorkOrderStatus::Pending,
            visits: Vec::new(),
            fixed_time_slot: None,
        }
    }

    /// Order number zero-padded to five digits, as printed on documents.
    #[must_use]
    pub fn formatted_number(&self) -> String {
        format!("{:05}", self.number)
    }

    /// Whether the office has closed the order.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == WorkOrderStatus::Completed
    }

    /// Close the order. Completing twice is a no-op.
    pub const fn complete(&mut self) {
        self.status = WorkOrderStatus::Completed;
    }

    /// Log a visit; the first visit moves a pending order to in-progress.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderError::AlreadyCompleted`] when the order is closed.
    pub fn add_visit(&mut self, visit: Visit) -> Result<(), WorkOrderError> {
        if self.is_completed() {
            return Err(WorkOrderError::AlreadyCompleted {
                number: self.number,
            });
        }
        self.visits.push(visit);
        self.status = WorkOrderStatus::InProgress;
        Ok(())
    }

    /// Search-box match on the order number or the resident's details.
    ///
    /// An empty term matches every order.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        self.number.to_string().contains(term)
            || self.resident.matches_folded(term, &term.to_lowercase())
    }

    /// Build the sequencer input for this order at a resolved location.
    #[must_use]
    pub fn to_visit_target(&self, location: Coord<f64>, source: LocationSource) -> VisitTarget {
        VisitTarget::new(self.id.clone(), location)
            .with_time_slot(self.fixed_time_slot)
            .with_metadata(TargetMetadata {
                label: self.resident.name.clone(),
                address: self.resident.address.clone(),
                service_type: self.service_type.to_string(),
                order_number: Some(self.number),
            })
            .with_location_source(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    #[fixture]
    fn order() -> WorkOrder {
        let resident = Resident {
            phone: "11-3151-2985".into(),
            ..Resident::new("Carlos Paz", "Italia 55")
        };
        WorkOrder::new("65f1", 1203, resident, ServiceType::Scorpions)
    }

    fn visit() -> Visit {
        Visit::on(NaiveDate::from_ymd_opt(2024, 5, 2).expect("valid date"))
    }

    #[rstest]
    #[case(7, "00007")]
    #[case(1203, "01203")]
    #[case(123_456, "123456")]
    fn pads_order_numbers(mut order: WorkOrder, #[case] number: u32, #[case] expected: &str) {
        order.number = number;
        assert_eq!(order.formatted_number(), expected);
    }

    #[rstest]
    fn first_visit_starts_the_order(mut order: WorkOrder) {
        order.add_visit(visit()).expect("pending order accepts visits");
        assert_eq!(order.status, WorkOrderStatus::InProgress);
        assert_eq!(order.visits.len(), 1);
    }

    #[rstest]
    fn completed_order_rejects_visits(mut order: WorkOrder) {
        order.complete();
        order.complete();
        let err = order.add_visit(visit()).expect_err("closed order");
        assert_eq!(err, WorkOrderError::AlreadyCompleted { number: 1203 });
        assert!(order.visits.is_empty());
    }

    #[rstest]
    #[case("120", true)]
    #[case("carlos", true)]
    #[case("ITALIA", true)]
    #[case("3151", true)]
    #[case("Sosa", false)]
    fn searches_number_and_resident(order: WorkOrder, #[case] term: &str, #[case] hit: bool) {
        assert_eq!(order.matches(term), hit);
    }

    #[rstest]
    fn converts_to_visit_target(mut order: WorkOrder) {
        order.fixed_time_slot = TimeSlot::from_hm(9, 0);
        let location = Coord { x: -58.5, y: -34.5 };
        let target = order.to_visit_target(location, LocationSource::Fallback);
        assert_eq!(target.id, order.id);
        assert_eq!(target.location, location);
        assert_eq!(target.fixed_time_slot, order.fixed_time_slot);
        assert_eq!(target.metadata.label, "Carlos Paz");
        assert_eq!(target.metadata.service_type, "Alacranes");
        assert_eq!(target.metadata.order_number, Some(1203));
        assert_eq!(target.location_source, LocationSource::Fallback);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#""horario": "14:30","#, TimeSlot::from_hm(14, 30))]
    #[case(r#""horario": "","#, None)]
    #[case(r#""horario": null,"#, None)]
    #[case("", None)]
    fn reads_optional_slot(#[case] slot_field: &str, #[case] expected: Option<TimeSlot>) {
        let json = format!(
            r#"{{
                "_id": "65f1",
                "numeroOrden": 9,
                {slot_field}
                "vecino": {{"nombre": "Ana", "direccion": "Alvear 1"}},
                "tipoServicio": "Otro servicio"
            }}"#
        );
        let order: WorkOrder = serde_json::from_str(&json).expect("valid order");
        assert_eq!(order.fixed_time_slot, expected);
        assert_eq!(order.status, WorkOrderStatus::Pending);
        assert_eq!(order.service_type, ServiceType::Other("Otro servicio".into()));
    }
}
