//! Facility catalogs
//!
//! Room tiers and add-on fees offered by the facility. Both are plain
//! configuration injected into the engine, so a new room tier or surcharge
//! is a config change and never a code change.
//!
//! A room tier has a nominal monthly rent used for the monthly comparison,
//! and a `{min, max}` price band used only for capital-reserve sizing.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// Errors found while loading or validating facility configuration
///
/// These never come from user input; the engine itself cannot fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog entry has an empty id")]
    EmptyId,

    #[error("Duplicate room tier id '{0}'")]
    DuplicateRoomId(String),

    #[error("Room tiers '{first}' and '{second}' share nominal rent {nominal}")]
    DuplicateNominal {
        first: String,
        second: String,
        nominal: f64,
    },

    #[error("Duplicate add-on id '{0}'")]
    DuplicateAddOnId(String),

    #[error("Entry '{id}' has a non-finite {field}")]
    NonFiniteValue { id: String, field: &'static str },

    #[error("Room tier '{id}' violates min <= nominal <= max ({min} / {nominal} / {max})")]
    RangeOrder {
        id: String,
        min: f64,
        nominal: f64,
        max: f64,
    },

    #[error("Add-on '{id}' has negative monthly amount {amount}")]
    NegativeAmount { id: String, amount: f64 },

    #[error("Reporting unit must be a positive finite number, got {0}")]
    InvalidReportingUnit(f64),

    #[error("Invalid facility configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Monthly price band `{min, max}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Zero-width range at a single value
    pub fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Both bounds moved by the same amount
    pub fn shifted(&self, amount: f64) -> Self {
        Self {
            min: self.min + amount,
            max: self.max + amount,
        }
    }

    /// Both bounds multiplied by the same factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }

    /// True when `value` lies within the band, bounds included
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// One room tier offered by the facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTier {
    /// Stable identifier (e.g. "economy")
    pub id: String,

    /// Display label
    pub label: String,

    /// Representative monthly rent, used for the monthly comparison
    pub nominal: f64,

    /// Lowest monthly rent for this tier
    pub min: f64,

    /// Highest monthly rent for this tier
    pub max: f64,
}

impl RoomTier {
    pub fn new(id: impl Into<String>, label: impl Into<String>, nominal: f64, min: f64, max: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            nominal,
            min,
            max,
        }
    }

    pub fn range(&self) -> PriceRange {
        PriceRange::new(self.min, self.max)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }
        for (field, value) in [("nominal", self.nominal), ("min", self.min), ("max", self.max)] {
            if !value.is_finite() {
                return Err(CatalogError::NonFiniteValue {
                    id: self.id.clone(),
                    field,
                });
            }
        }
        if !self.range().contains(self.nominal) {
            return Err(CatalogError::RangeOrder {
                id: self.id.clone(),
                min: self.min,
                nominal: self.nominal,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Which room the user picked
///
/// The form's radio buttons carry the nominal rent as their value, so a
/// selection may arrive either as a tier id or as that raw nominal value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RoomSelection {
    /// No room selected
    #[default]
    None,

    /// A tier selected by id
    Tier(String),

    /// A tier selected by its nominal rent
    Nominal(f64),
}

impl RoomSelection {
    /// Parse a selection from user text: a number selects by nominal rent,
    /// anything else selects by tier id, and empty text selects nothing.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return RoomSelection::None;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => RoomSelection::Nominal(value),
            _ => RoomSelection::Tier(trimmed.to_string()),
        }
    }
}

/// A selection resolved against the room catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRoom {
    /// Matching tier, if any
    pub tier_id: Option<String>,

    /// Nominal monthly rent
    pub nominal: f64,

    /// Price band around the nominal rent
    pub range: PriceRange,
}

impl ResolvedRoom {
    fn empty() -> Self {
        Self {
            tier_id: None,
            nominal: 0.0,
            range: PriceRange::point(0.0),
        }
    }
}

/// Ordered list of room tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCatalog {
    tiers: Vec<RoomTier>,
}

impl RoomCatalog {
    /// Build a catalog, validating every tier
    pub fn new(tiers: Vec<RoomTier>) -> Result<Self, CatalogError> {
        let catalog = Self { tiers };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The reference deployment's three tiers
    pub fn reference() -> Self {
        Self {
            tiers: vec![
                RoomTier::new("economy", "Economy room", 34_500.0, 33_000.0, 36_000.0),
                RoomTier::new("one_bedroom", "One bedroom, one living room", 46_000.0, 42_000.0, 50_000.0),
                RoomTier::new("two_bedroom", "Two bedrooms, one living room", 74_000.0, 70_000.0, 78_000.0),
            ],
        }
    }

    pub fn tiers(&self) -> &[RoomTier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RoomTier> {
        self.tiers.iter().find(|tier| tier.id == id)
    }

    pub fn find_by_nominal(&self, nominal: f64) -> Option<&RoomTier> {
        self.tiers.iter().find(|tier| tier.nominal == nominal)
    }

    /// Check ids, values and ordering of every tier
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for (index, tier) in self.tiers.iter().enumerate() {
            tier.validate()?;
            if !ids.insert(tier.id.as_str()) {
                return Err(CatalogError::DuplicateRoomId(tier.id.clone()));
            }
            if let Some(earlier) = self.tiers[..index].iter().find(|t| t.nominal == tier.nominal) {
                return Err(CatalogError::DuplicateNominal {
                    first: earlier.id.clone(),
                    second: tier.id.clone(),
                    nominal: tier.nominal,
                });
            }
        }
        Ok(())
    }

    /// Resolve a selection to its nominal rent and price band
    ///
    /// - A nominal value with no matching tier degenerates to a zero-width
    ///   band at that value.
    /// - An unknown tier id resolves like no selection at all.
    ///
    /// # Example
    /// ```
    /// use care_cost_core::{RoomCatalog, RoomSelection};
    ///
    /// let catalog = RoomCatalog::reference();
    /// let known = catalog.resolve(&RoomSelection::Nominal(34500.0));
    /// assert_eq!((known.range.min, known.range.max), (33000.0, 36000.0));
    ///
    /// let unknown = catalog.resolve(&RoomSelection::Nominal(50000.0));
    /// assert_eq!((unknown.range.min, unknown.range.max), (50000.0, 50000.0));
    /// ```
    pub fn resolve(&self, selection: &RoomSelection) -> ResolvedRoom {
        match selection {
            RoomSelection::None => ResolvedRoom::empty(),
            RoomSelection::Tier(id) => match self.get(id) {
                Some(tier) => ResolvedRoom {
                    tier_id: Some(tier.id.clone()),
                    nominal: tier.nominal,
                    range: tier.range(),
                },
                None => {
                    tracing::debug!(tier_id = %id, "unknown room tier id, treating as no selection");
                    ResolvedRoom::empty()
                }
            },
            RoomSelection::Nominal(value) => {
                let nominal = if value.is_finite() { *value } else { 0.0 };
                match self.find_by_nominal(nominal) {
                    Some(tier) => ResolvedRoom {
                        tier_id: Some(tier.id.clone()),
                        nominal,
                        range: tier.range(),
                    },
                    None => {
                        tracing::debug!(nominal, "no price band for nominal rent, using a point range");
                        ResolvedRoom {
                            tier_id: None,
                            nominal,
                            range: PriceRange::point(nominal),
                        }
                    }
                }
            }
        }
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

/// Optional flat monthly surcharge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOnFee {
    /// Stable identifier (e.g. "partner")
    pub id: String,

    /// Display label
    pub label: String,

    /// Amount added to the future monthly housing cost when enabled
    pub monthly_amount: f64,
}

impl AddOnFee {
    pub fn new(id: impl Into<String>, label: impl Into<String>, monthly_amount: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            monthly_amount,
        }
    }
}

/// Ordered list of add-on fees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddOnCatalog {
    fees: Vec<AddOnFee>,
}

impl AddOnCatalog {
    pub fn new(fees: Vec<AddOnFee>) -> Result<Self, CatalogError> {
        let catalog = Self { fees };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The reference deployment's add-ons: partner co-occupancy and care
    pub fn reference() -> Self {
        Self {
            fees: vec![
                AddOnFee::new("partner", "Partner co-occupancy", 5_000.0),
                AddOnFee::new("care", "Care assistance", 10_000.0),
            ],
        }
    }

    pub fn fees(&self) -> &[AddOnFee] {
        &self.fees
    }

    pub fn get(&self, id: &str) -> Option<&AddOnFee> {
        self.fees.iter().find(|fee| fee.id == id)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for fee in &self.fees {
            if fee.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !fee.monthly_amount.is_finite() {
                return Err(CatalogError::NonFiniteValue {
                    id: fee.id.clone(),
                    field: "monthly_amount",
                });
            }
            if fee.monthly_amount < 0.0 {
                return Err(CatalogError::NegativeAmount {
                    id: fee.id.clone(),
                    amount: fee.monthly_amount,
                });
            }
            if !ids.insert(fee.id.as_str()) {
                return Err(CatalogError::DuplicateAddOnId(fee.id.clone()));
            }
        }
        Ok(())
    }

    /// Sum of the enabled add-ons; ids not in the catalog contribute 0
    ///
    /// An add-on is either on or off, so a repeated id counts once.
    pub fn extra_fee<'a, I>(&self, enabled: I) -> f64
    where
        I: IntoIterator<Item = &'a String>,
    {
        enabled
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|id| match self.get(id) {
                Some(fee) => fee.monthly_amount,
                None => {
                    tracing::debug!(add_on = %id, "unknown add-on enabled, contributes 0");
                    0.0
                }
            })
            .sum()
    }
}

impl Default for AddOnCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

/// Facility configuration file: room tiers and add-on fees
///
/// A section missing from the file falls back to the reference deployment.
///
/// ```json
/// {
///   "rooms": [
///     { "id": "economy", "label": "Economy", "nominal": 34500, "min": 33000, "max": 36000 }
///   ],
///   "add_ons": [
///     { "id": "partner", "label": "Partner", "monthly_amount": 5000 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityConfig {
    #[serde(default)]
    pub rooms: RoomCatalog,

    #[serde(default)]
    pub add_ons: AddOnCatalog,
}

impl FacilityConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let config: FacilityConfig = serde_json::from_str(json)?;
        config.validate()?;
        tracing::info!(
            rooms = config.rooms.len(),
            add_ons = config.add_ons.fees().len(),
            "loaded facility configuration"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        self.rooms.validate()?;
        self.add_ons.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalogs_are_valid() {
        assert!(RoomCatalog::reference().validate().is_ok());
        assert!(AddOnCatalog::reference().validate().is_ok());
        assert_eq!(RoomCatalog::reference().len(), 3);
    }

    #[test]
    fn test_room_selection_parse() {
        assert_eq!(RoomSelection::parse(""), RoomSelection::None);
        assert_eq!(RoomSelection::parse(" 46000 "), RoomSelection::Nominal(46000.0));
        assert_eq!(
            RoomSelection::parse("economy"),
            RoomSelection::Tier("economy".to_string())
        );
    }

    #[test]
    fn test_price_range_shift_and_scale() {
        let range = PriceRange::new(33_000.0, 36_000.0);
        assert_eq!(range.shifted(5_000.0), PriceRange::new(38_000.0, 41_000.0));
        assert_eq!(range.scaled(2.0), PriceRange::new(66_000.0, 72_000.0));
        assert!(range.contains(34_500.0));
        assert!(range.contains(36_000.0));
        assert!(!range.contains(36_000.5));
    }

    #[test]
    fn test_resolve_unknown_tier_id_is_empty() {
        let resolved = RoomCatalog::reference().resolve(&RoomSelection::Tier("penthouse".into()));
        assert_eq!(resolved.nominal, 0.0);
        assert_eq!(resolved.range, PriceRange::point(0.0));
        assert!(resolved.tier_id.is_none());
    }

    #[test]
    fn test_extra_fee_ignores_unknown_ids() {
        let add_ons = AddOnCatalog::reference();
        let enabled = vec!["partner".to_string(), "butler".to_string()];
        assert_eq!(add_ons.extra_fee(&enabled), 5_000.0);
    }

    #[test]
    fn test_extra_fee_counts_repeated_id_once() {
        let add_ons = AddOnCatalog::reference();
        let enabled = vec!["partner".to_string(), "care".to_string(), "partner".to_string()];
        assert_eq!(add_ons.extra_fee(&enabled), 15_000.0);
    }

    #[test]
    fn test_tier_outside_its_band_is_rejected() {
        let tiers = vec![RoomTier::new("odd", "Odd", 40_000.0, 33_000.0, 36_000.0)];
        assert!(matches!(
            RoomCatalog::new(tiers),
            Err(CatalogError::RangeOrder { .. })
        ));
    }
}
