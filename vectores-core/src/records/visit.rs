use chrono::NaiveDate;

/// A field visit ("visita") logged against a work order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    /// Day the visit took place.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "fecha", deserialize_with = "super::wire::date")
    )]
    pub date: NaiveDate,
    /// Free-text notes.
    #[cfg_attr(feature = "serde", serde(rename = "observaciones", default))]
    pub notes: String,
    /// Amount of product applied.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "cantidadProducto",
            default,
            deserialize_with = "super::wire::quantity"
        )
    )]
    pub product_quantity: f64,
    /// Product applied.
    #[cfg_attr(feature = "serde", serde(rename = "tipoProducto", default))]
    pub product_type: String,
    /// Technicians who attended.
    #[cfg_attr(feature = "serde", serde(rename = "tecnicos", default))]
    pub technicians: Vec<String>,
    /// Stage of the job reached on this visit, e.g. "INSPECCIÓN".
    #[cfg_attr(
        feature = "serde",
        serde(rename = "estado", default, skip_serializing_if = "String::is_empty")
    )]
    pub stage: String,
}

impl Visit {
    /// Construct a visit with no notes, product or technicians.
    #[must_use]
    pub const fn on(date: NaiveDate) -> Self {
        Self {
            date,
            notes: String::new(),
            product_quantity: 0.0,
            product_type: String::new(),
            technicians: Vec::new(),
            stage: String::new(),
        }
    }

    /// Split the comma-separated technician field of the visit form.
    ///
    /// # Examples
    /// ```
    /// use vectores_core::Visit;
    ///
    /// assert_eq!(Visit::parse_technicians("Ruiz, Paz,, "), ["Ruiz", "Paz"]);
    /// ```
    #[must_use]
    pub fn parse_technicians(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Product and dose as printed on the order, e.g. `"2.5 Brodifacoum"`.
    #[must_use]
    pub fn dose(&self) -> String {
        format!("{} {}", self.product_quantity, self.product_type)
            .trim()
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).expect("valid date")
    }

    #[rstest]
    #[case("", &[])]
    #[case("Ruiz", &["Ruiz"])]
    #[case(" Ruiz ,Paz ", &["Ruiz", "Paz"])]
    fn splits_technicians(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(Visit::parse_technicians(input), expected);
    }

    #[rstest]
    fn dose_joins_quantity_and_product() {
        let visit = Visit {
            product_quantity: 2.5,
            product_type: "cebo".into(),
            ..Visit::on(day())
        };
        assert_eq!(visit.dose(), "2.5 cebo");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#"{"fecha": "2024-03-14", "cantidadProducto": "3"}"#, 3.0)]
    #[case(r#"{"fecha": "2024-03-14T00:00:00.000Z", "cantidadProducto": 1.5}"#, 1.5)]
    #[case(r#"{"fecha": "2024-03-14", "cantidadProducto": ""}"#, 0.0)]
    fn reads_form_and_stored_shapes(#[case] json: &str, #[case] quantity: f64) {
        let visit: Visit = serde_json::from_str(json).expect("valid visit");
        assert_eq!(visit.date, day());
        assert!((visit.product_quantity - quantity).abs() < f64::EPSILON);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn rejects_unparseable_date() {
        let result = serde_json::from_str::<Visit>(r#"{"fecha": "mañana"}"#);
        assert!(result.is_err());
    }
}
