//! Cost input model
//!
//! Represents the household's current monthly costs as entered in the form.
//! Raw field values arrive as text and are coerced to numbers here:
//! - Empty or missing values count as 0
//! - Text that is not a number counts as 0
//! - NaN and infinities count as 0
//!
//! Coercion never fails. A malformed field silently contributes nothing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Months per year, used to accrue the annual tax monthly
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Named input fields of the comparison form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// Monthly housing payment (rent or mortgage)
    Housing,
    /// Annual property tax
    Tax,
    /// Monthly utilities (water, gas, management fee)
    Utilities,
    /// Monthly cleaning fee
    Cleaning,
    /// Monthly transportation and other fees
    Others,
    /// Monthly electricity
    Electricity,
    /// Monthly activities fee (extended form only)
    Activities,
    /// Monthly smart-care fee (extended form only)
    SmartCare,
}

impl FieldId {
    /// Every field, in form order
    pub const ALL: [FieldId; 8] = [
        FieldId::Housing,
        FieldId::Tax,
        FieldId::Utilities,
        FieldId::Cleaning,
        FieldId::Others,
        FieldId::Electricity,
        FieldId::Activities,
        FieldId::SmartCare,
    ];

    /// Stable snake_case name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Housing => "housing",
            FieldId::Tax => "tax",
            FieldId::Utilities => "utilities",
            FieldId::Cleaning => "cleaning",
            FieldId::Others => "others",
            FieldId::Electricity => "electricity",
            FieldId::Activities => "activities",
            FieldId::SmartCare => "smart_care",
        }
    }

    /// True for the fields that only exist in the extended form
    pub fn is_optional(&self) -> bool {
        matches!(self, FieldId::Activities | FieldId::SmartCare)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Coerce a raw form value to an amount
///
/// Mirrors how a browser number field is read: surrounding whitespace is
/// ignored, an empty string is 0, and anything that does not parse to a
/// finite number is 0. Grouping separators ("20,000") are not numbers.
///
/// # Example
/// ```
/// use care_cost_core::coerce_amount;
///
/// assert_eq!(coerce_amount(" 20000 "), 20000.0);
/// assert_eq!(coerce_amount(""), 0.0);
/// assert_eq!(coerce_amount("abc"), 0.0);
/// assert_eq!(coerce_amount("20,000"), 0.0);
/// ```
pub fn coerce_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::trace!(raw, "non-numeric field value coerced to 0");
            0.0
        }
    }
}

/// Replace a non-finite amount with 0
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Raw text values of the form, keyed by field
///
/// A field that was never set is absent. For the two extended-form fields
/// absence matters: it means the form variant has no such field at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFields {
    values: BTreeMap<FieldId, String>,
}

impl RawFields {
    /// Create an empty set of raw fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: FieldId, raw: impl Into<String>) -> Self {
        self.set(field, raw);
        self
    }

    /// Set the raw value of a field, returning the previous value
    pub fn set(&mut self, field: FieldId, raw: impl Into<String>) -> Option<String> {
        self.values.insert(field, raw.into())
    }

    /// Remove a field entirely
    pub fn remove(&mut self, field: FieldId) -> Option<String> {
        self.values.remove(&field)
    }

    /// Raw value of a field, if present
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Coerced amount of a field (0 when missing)
    pub fn amount(&self, field: FieldId) -> f64 {
        self.get(field).map(coerce_amount).unwrap_or(0.0)
    }

    /// Coerced amount, or None when the field is absent
    pub fn optional_amount(&self, field: FieldId) -> Option<f64> {
        self.get(field).map(coerce_amount)
    }

    /// Iterate over present fields in form order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.values.iter().map(|(field, raw)| (*field, raw.as_str()))
    }
}

/// Current monthly cost inputs
///
/// All amounts are monthly except `annual_tax`. Values are plain numbers in
/// the display currency; the engine never divides by anything but 12 and the
/// reporting unit, so floating point is sufficient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Monthly housing payment (rent or mortgage)
    pub monthly_housing: f64,

    /// Annual property tax, accrued monthly as `annual_tax / 12`
    pub annual_tax: f64,

    /// Monthly utilities
    pub utilities: f64,

    /// Monthly cleaning fee
    pub cleaning: f64,

    /// Monthly transportation and other fees
    pub transportation: f64,

    /// Monthly electricity, carried unchanged into the future plan
    pub electricity: f64,

    /// Monthly activities fee, present only in the extended form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<f64>,

    /// Monthly smart-care fee, present only in the extended form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_care: Option<f64>,
}

impl CostInputs {
    /// Coerce raw form values into inputs
    ///
    /// # Example
    /// ```
    /// use care_cost_core::{CostInputs, FieldId, RawFields};
    ///
    /// let raw = RawFields::new()
    ///     .with(FieldId::Housing, "20000")
    ///     .with(FieldId::Tax, "12000")
    ///     .with(FieldId::Cleaning, "not a number");
    /// let inputs = CostInputs::from_raw(&raw);
    /// assert_eq!(inputs.housing_cost(), 21000.0);
    /// assert_eq!(inputs.cleaning, 0.0);
    /// assert!(inputs.activities.is_none());
    /// ```
    pub fn from_raw(raw: &RawFields) -> Self {
        Self {
            monthly_housing: raw.amount(FieldId::Housing),
            annual_tax: raw.amount(FieldId::Tax),
            utilities: raw.amount(FieldId::Utilities),
            cleaning: raw.amount(FieldId::Cleaning),
            transportation: raw.amount(FieldId::Others),
            electricity: raw.amount(FieldId::Electricity),
            activities: raw.optional_amount(FieldId::Activities),
            smart_care: raw.optional_amount(FieldId::SmartCare),
        }
    }

    /// Copy with every non-finite amount replaced by 0
    pub fn normalized(&self) -> Self {
        Self {
            monthly_housing: sanitize_amount(self.monthly_housing),
            annual_tax: sanitize_amount(self.annual_tax),
            utilities: sanitize_amount(self.utilities),
            cleaning: sanitize_amount(self.cleaning),
            transportation: sanitize_amount(self.transportation),
            electricity: sanitize_amount(self.electricity),
            activities: self.activities.map(sanitize_amount),
            smart_care: self.smart_care.map(sanitize_amount),
        }
    }

    /// Annual tax accrued per month
    pub fn monthly_tax(&self) -> f64 {
        self.annual_tax / MONTHS_PER_YEAR
    }

    /// Monthly housing payment plus monthly tax accrual
    pub fn housing_cost(&self) -> f64 {
        self.monthly_housing + self.monthly_tax()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_plain_numbers() {
        assert_eq!(coerce_amount("1500"), 1500.0);
        assert_eq!(coerce_amount("0.5"), 0.5);
        assert_eq!(coerce_amount(".5"), 0.5);
        assert_eq!(coerce_amount("1e3"), 1000.0);
        assert_eq!(coerce_amount("-200"), -200.0);
    }

    #[test]
    fn test_coerce_degenerate_values() {
        assert_eq!(coerce_amount(""), 0.0);
        assert_eq!(coerce_amount("   "), 0.0);
        assert_eq!(coerce_amount("NaN"), 0.0);
        assert_eq!(coerce_amount("inf"), 0.0);
        assert_eq!(coerce_amount("Infinity"), 0.0);
        assert_eq!(coerce_amount("12abc"), 0.0);
    }

    #[test]
    fn test_field_id_round_trips_through_name() {
        for field in FieldId::ALL {
            assert_eq!(field.as_str().parse::<FieldId>().unwrap(), field);
        }
        assert!("rent".parse::<FieldId>().is_err());
    }

    #[test]
    fn test_normalized_replaces_non_finite() {
        let inputs = CostInputs {
            utilities: f64::NAN,
            electricity: f64::INFINITY,
            smart_care: Some(f64::NEG_INFINITY),
            ..Default::default()
        };
        let normalized = inputs.normalized();
        assert_eq!(normalized.utilities, 0.0);
        assert_eq!(normalized.electricity, 0.0);
        assert_eq!(normalized.smart_care, Some(0.0));
    }
}
