use super::contains_folded;

/// A resident ("vecino") requesting service at their property.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resident {
    /// Persistence identifier, absent for records not yet stored.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "_id", default, skip_serializing_if = "Option::is_none")
    )]
    pub id: Option<String>,
    /// Full name.
    #[cfg_attr(feature = "serde", serde(rename = "nombre"))]
    pub name: String,
    /// Street address used for geocoding.
    #[cfg_attr(feature = "serde", serde(rename = "direccion"))]
    pub address: String,
    /// Neighbourhood ("barrio").
    #[cfg_attr(feature = "serde", serde(rename = "barrio", default))]
    pub neighbourhood: String,
    /// Contact phone number.
    #[cfg_attr(feature = "serde", serde(rename = "telefono", default))]
    pub phone: String,
    /// Surface to treat, in square metres.
    #[cfg_attr(feature = "serde", serde(rename = "m2", default))]
    pub area_m2: f64,
    /// Whether the request comes through a municipal delegation.
    #[cfg_attr(feature = "serde", serde(rename = "esDelegacion", default))]
    pub is_delegation: bool,
    /// Delegation name; meaningful only when `is_delegation` is set.
    #[cfg_attr(feature = "serde", serde(rename = "delegacion", default))]
    pub delegation: String,
    /// Whether the resident pays for the service.
    #[cfg_attr(feature = "serde", serde(rename = "abona", default))]
    pub pays: bool,
    /// Receipt number for paid services.
    #[cfg_attr(feature = "serde", serde(rename = "numeroRecibo", default))]
    pub receipt_number: String,
    /// Why the service is not charged.
    #[cfg_attr(feature = "serde", serde(rename = "motivoNoAbona", default))]
    pub exemption_reason: String,
}

/// How a resident's service is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payment<'a> {
    /// Paid, with the receipt issued.
    Paid {
        /// Receipt number, possibly empty.
        receipt_number: &'a str,
    },
    /// Not charged.
    Exempt {
        /// Recorded reason, possibly empty.
        reason: &'a str,
    },
}

impl Resident {
    /// Construct a resident with the fields the office requires.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            ..Self::default()
        }
    }

    /// The delegation name, when the request came through one.
    #[must_use]
    pub fn delegation(&self) -> Option<&str> {
        (self.is_delegation && !self.delegation.is_empty()).then_some(self.delegation.as_str())
    }

    /// Payment status.
    #[must_use]
    pub fn payment(&self) -> Payment<'_> {
        if self.pays {
            Payment::Paid {
                receipt_number: &self.receipt_number,
            }
        } else {
            Payment::Exempt {
                reason: &self.exemption_reason,
            }
        }
    }

    /// Search-box match on name, address, phone or delegation.
    ///
    /// Text fields compare case-insensitively; the phone compares verbatim.
    /// An empty term matches every resident.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let folded = term.to_lowercase();
        self.matches_folded(term, &folded)
            || (!self.delegation.is_empty() && contains_folded(&self.delegation, &folded))
    }

    /// Match on the fields shared with work-order search.
    pub(super) fn matches_folded(&self, term: &str, folded: &str) -> bool {
        contains_folded(&self.name, folded)
            || contains_folded(&self.address, folded)
            || self.phone.contains(term)
    }
}
