//! Cost Comparison Engine
//!
//! Compares current monthly costs with the facility plan and sizes the
//! one-time capital reserves.
//!
//! # Computation
//!
//! ```text
//! 1. Normalize inputs (non-finite → 0)
//! 2. housing  = monthly housing + annual tax / 12
//! 3. current  = housing + utilities + cleaning + transportation
//!               + electricity (+ activities) (+ smart care)
//! 4. Resolve room selection → nominal rent, {min, max} band
//! 5. extra    = Σ enabled add-on fees
//! 6. future housing = nominal + extra, band shifted by extra
//! 7. future   = future housing + electricity
//! 8. delta    = future - current  (negative ⇒ savings)
//! 9. trust    = band × 60 / 10,000, deposit = band × 6 / 10,000
//! ```
//!
//! The future plan is all-inclusive except electricity: every other current
//! cost, including activities and smart care, is absorbed by the facility
//! fee and contributes nothing to the future total.
//!
//! # Critical Invariants
//!
//! 1. Never fails: every degenerate input contributes 0
//! 2. Pure: identical inputs give bit-identical results
//! 3. Every number in the result is finite; a sum that overflows counts as 0
//!
//! # Example
//!
//! ```
//! use care_cost_core::{CostComparisonEngine, CostInputs, RoomSelection};
//!
//! let engine = CostComparisonEngine::reference();
//! let inputs = CostInputs {
//!     monthly_housing: 20000.0,
//!     annual_tax: 12000.0,
//!     utilities: 2000.0,
//!     cleaning: 1500.0,
//!     transportation: 500.0,
//!     electricity: 800.0,
//!     ..Default::default()
//! };
//! let enabled = vec!["partner".to_string()];
//! let result = engine.compare(&inputs, &RoomSelection::Nominal(34500.0), &enabled);
//!
//! assert_eq!(result.total_current(), 25800.0);
//! assert_eq!(result.total_future(), 40300.0);
//! assert_eq!(result.delta, 14500.0);
//! ```

use crate::costs::reserves::ReserveHorizons;
use crate::models::catalog::{
    AddOnCatalog, CatalogError, FacilityConfig, PriceRange, RoomCatalog, RoomSelection,
};
use crate::models::comparison::{
    CapitalReserves, CostComparisonResult, CurrentCosts, DeltaFraming, FutureCosts,
};
use crate::models::form::FormSnapshot;
use crate::models::inputs::{sanitize_amount, CostInputs};

/// Pure comparison engine over an injected facility configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CostComparisonEngine {
    config: FacilityConfig,
    horizons: ReserveHorizons,
}

impl CostComparisonEngine {
    /// Create an engine over a facility configuration
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the room or add-on catalog is invalid.
    pub fn new(config: FacilityConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        Ok(Self {
            config,
            horizons: ReserveHorizons::default(),
        })
    }

    /// Engine over the reference deployment's catalogs
    pub fn reference() -> Self {
        Self {
            config: FacilityConfig::default(),
            horizons: ReserveHorizons::default(),
        }
    }

    /// Replace the reserve horizons
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidReportingUnit` unless the reporting unit
    /// is positive and finite.
    pub fn with_horizons(mut self, horizons: ReserveHorizons) -> Result<Self, CatalogError> {
        if !(horizons.reporting_unit.is_finite() && horizons.reporting_unit > 0.0) {
            return Err(CatalogError::InvalidReportingUnit(horizons.reporting_unit));
        }
        self.horizons = horizons;
        Ok(self)
    }

    pub fn config(&self) -> &FacilityConfig {
        &self.config
    }

    pub fn rooms(&self) -> &RoomCatalog {
        &self.config.rooms
    }

    pub fn add_ons(&self) -> &AddOnCatalog {
        &self.config.add_ons
    }

    pub fn horizons(&self) -> &ReserveHorizons {
        &self.horizons
    }

    /// Compare current costs with the selected facility plan
    ///
    /// `enabled_add_ons` holds the ids of toggled add-on fees; ids missing
    /// from the catalog contribute nothing.
    pub fn compare<'a, I>(
        &self,
        inputs: &CostInputs,
        room: &RoomSelection,
        enabled_add_ons: I,
    ) -> CostComparisonResult
    where
        I: IntoIterator<Item = &'a String>,
    {
        let inputs = inputs.normalized();
        let current = current_costs(&inputs);

        let resolved = self.config.rooms.resolve(room);
        let extra_fee = sanitize_amount(self.config.add_ons.extra_fee(enabled_add_ons));
        let housing_nominal = sanitize_amount(resolved.nominal + extra_fee);
        let housing_range = sanitize_range(resolved.range.shifted(extra_fee));

        // Only electricity carries over; the facility fee covers the rest
        let future = FutureCosts {
            room_id: resolved.tier_id,
            base_rent: resolved.nominal,
            extra_fee,
            housing_nominal,
            housing_range,
            electricity: inputs.electricity,
            total: sanitize_amount(housing_nominal + inputs.electricity),
        };

        let delta = sanitize_amount(future.total - current.total);
        let reserves = CapitalReserves {
            trust_fund: self.horizons.trust_fund(&housing_range),
            deposit: self.horizons.deposit(&housing_range),
        };

        tracing::debug!(
            total_current = current.total,
            total_future = future.total,
            delta,
            room = ?future.room_id,
            extra_fee,
            "computed cost comparison"
        );

        CostComparisonResult {
            current,
            future,
            delta,
            framing: DeltaFraming::from_delta(delta),
            reserves,
        }
    }

    /// Compare using everything captured in a form snapshot
    pub fn compare_snapshot(&self, snapshot: &FormSnapshot) -> CostComparisonResult {
        self.compare(&snapshot.inputs, &snapshot.room, &snapshot.add_ons)
    }
}

impl Default for CostComparisonEngine {
    fn default() -> Self {
        Self::reference()
    }
}

/// Current-side breakdown; inputs must already be normalized
fn current_costs(inputs: &CostInputs) -> CurrentCosts {
    let housing = sanitize_amount(inputs.housing_cost());
    let total = sanitize_amount(
        housing
            + inputs.utilities
            + inputs.cleaning
            + inputs.transportation
            + inputs.electricity
            + inputs.activities.unwrap_or(0.0)
            + inputs.smart_care.unwrap_or(0.0),
    );

    CurrentCosts {
        housing,
        utilities: inputs.utilities,
        cleaning: inputs.cleaning,
        transportation: inputs.transportation,
        electricity: inputs.electricity,
        activities: inputs.activities,
        smart_care: inputs.smart_care,
        total,
    }
}

/// Range with each overflowed bound replaced by 0
fn sanitize_range(range: PriceRange) -> PriceRange {
    PriceRange::new(sanitize_amount(range.min), sanitize_amount(range.max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::RoomTier;

    fn no_add_ons() -> Vec<String> {
        Vec::new()
    }

    #[test]
    fn test_empty_form_is_all_zero() {
        let engine = CostComparisonEngine::reference();
        let result = engine.compare(&CostInputs::default(), &RoomSelection::None, &no_add_ons());

        assert_eq!(result.total_current(), 0.0);
        assert_eq!(result.total_future(), 0.0);
        assert_eq!(result.delta, 0.0);
        assert_eq!(result.framing, DeltaFraming::Increase(0.0));
        assert!(result.is_finite());
    }

    #[test]
    fn test_extended_fields_enter_current_total_only() {
        let engine = CostComparisonEngine::reference();
        let inputs = CostInputs {
            electricity: 800.0,
            activities: Some(1_000.0),
            smart_care: Some(2_000.0),
            ..Default::default()
        };
        let result = engine.compare(&inputs, &RoomSelection::Tier("economy".into()), &no_add_ons());

        assert_eq!(result.total_current(), 3_800.0);
        assert_eq!(result.total_future(), 34_500.0 + 800.0);
    }

    #[test]
    fn test_non_finite_inputs_are_zeroed() {
        let engine = CostComparisonEngine::reference();
        let inputs = CostInputs {
            monthly_housing: f64::NAN,
            electricity: f64::INFINITY,
            cleaning: 300.0,
            ..Default::default()
        };
        let result = engine.compare(&inputs, &RoomSelection::Nominal(f64::NAN), &no_add_ons());

        assert_eq!(result.total_current(), 300.0);
        assert_eq!(result.total_future(), 0.0);
        assert!(result.is_finite());
    }

    #[test]
    fn test_overflowing_sums_stay_finite() {
        let engine = CostComparisonEngine::reference();
        let inputs = CostInputs {
            monthly_housing: 1e308,
            utilities: 1e308,
            electricity: f64::MAX,
            ..Default::default()
        };
        let result = engine.compare(&inputs, &RoomSelection::Nominal(f64::MAX), &no_add_ons());

        assert_eq!(result.total_current(), 0.0);
        assert!(result.delta.is_finite());
        assert!(result.is_finite());
    }

    #[test]
    fn test_custom_catalog_is_used() {
        let config = FacilityConfig {
            rooms: RoomCatalog::new(vec![RoomTier::new("suite", "Suite", 90_000.0, 85_000.0, 95_000.0)]).unwrap(),
            add_ons: AddOnCatalog::new(vec![]).unwrap(),
        };
        let engine = CostComparisonEngine::new(config).unwrap();
        let enabled = vec!["partner".to_string()];
        let result = engine.compare(&CostInputs::default(), &RoomSelection::Nominal(90_000.0), &enabled);

        assert_eq!(result.future.room_id.as_deref(), Some("suite"));
        assert_eq!(result.future.extra_fee, 0.0);
        assert_eq!(result.future_housing_range(), PriceRange::new(85_000.0, 95_000.0));
    }

    #[test]
    fn test_with_horizons_rejects_zero_reporting_unit() {
        let horizons = ReserveHorizons {
            reporting_unit: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            CostComparisonEngine::reference().with_horizons(horizons),
            Err(CatalogError::InvalidReportingUnit(_))
        ));
    }
}
