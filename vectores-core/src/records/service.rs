use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Service catalogue offered by the vector-control office.
///
/// Labels match the office forms; anything else is kept verbatim as
/// [`ServiceType::Other`].
///
/// # Examples
/// ```
/// use vectores_core::ServiceType;
///
/// let service = ServiceType::from("Alacranes".to_owned());
/// assert_eq!(service, ServiceType::Scorpions);
/// assert_eq!(ServiceType::Other("Palomas".into()).to_string(), "Palomas");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum ServiceType {
    /// Rodent control ("Desratización").
    Deratization,
    /// Bee or wasp nest removal ("Retiro de Panal").
    HiveRemoval,
    /// General insect control ("Desinsectación general").
    GeneralDisinsection,
    /// Disinfection ("Desinfección").
    Disinfection,
    /// Mosquito fogging ("Fumigación por mosquitos").
    MosquitoFumigation,
    /// Scorpion control ("Alacranes").
    Scorpions,
    /// Free-text service outside the catalogue.
    Other(String),
}

impl ServiceType {
    /// Catalogue entries in form order, excluding [`ServiceType::Other`].
    pub const CATALOGUE: [Self; 6] = [
        Self::Deratization,
        Self::HiveRemoval,
        Self::GeneralDisinsection,
        Self::Disinfection,
        Self::MosquitoFumigation,
        Self::Scorpions,
    ];

    /// Label printed on forms and documents.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Deratization => "Desratización",
            Self::HiveRemoval => "Retiro de Panal",
            Self::GeneralDisinsection => "Desinsectación general",
            Self::Disinfection => "Desinfección",
            Self::MosquitoFumigation => "Fumigación por mosquitos",
            Self::Scorpions => "Alacranes",
            Self::Other(label) => label.as_str(),
        }
    }
}

impl FromStr for ServiceType {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        Ok(Self::CATALOGUE
            .into_iter()
            .find(|service| service.label() == trimmed)
            .unwrap_or_else(|| Self::Other(trimmed.to_owned())))
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for ServiceType {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|never: Infallible| match never {})
    }
}

impl From<ServiceType> for String {
    fn from(service: ServiceType) -> Self {
        match service {
            ServiceType::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

/// Progress of a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkOrderStatus {
    /// Created, no visit yet.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "pendiente"))]
    Pending,
    /// At least one visit logged.
    #[cfg_attr(feature = "serde", serde(rename = "en curso"))]
    InProgress,
    /// Closed by the office.
    #[cfg_attr(feature = "serde", serde(rename = "completada"))]
    Completed,
}

impl WorkOrderStatus {
    /// Label used by the persistence layer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::InProgress => "en curso",
            Self::Completed => "completada",
        }
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Desratización", ServiceType::Deratization)]
    #[case(" Retiro de Panal ", ServiceType::HiveRemoval)]
    #[case("Fumigación por mosquitos", ServiceType::MosquitoFumigation)]
    #[case("Palomas", ServiceType::Other("Palomas".into()))]
    fn parses_catalogue_labels(#[case] input: &str, #[case] expected: ServiceType) {
        assert_eq!(ServiceType::from(input.to_owned()), expected);
    }

    #[rstest]
    fn catalogue_labels_round_trip_through_display() {
        for service in ServiceType::CATALOGUE {
            assert_eq!(ServiceType::from(service.to_string()), service);
        }
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn status_uses_persistence_labels() {
        let json = serde_json::to_string(&WorkOrderStatus::InProgress).expect("serialise");
        assert_eq!(json, "\"en curso\"");
        let parsed: WorkOrderStatus = serde_json::from_str("\"completada\"").expect("parse");
        assert_eq!(parsed, WorkOrderStatus::Completed);
    }
}
