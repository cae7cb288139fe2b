//! Capital Reserve Horizons
//!
//! One-time capital reserves are sized from the future monthly housing
//! cost band:
//! - Trust fund: 60 months (5 years) of housing cost
//! - Deposit: 6 months of housing cost
//!
//! Both are reported in ten-thousands of the display currency (萬),
//! rounded to one decimal place.

use serde::{Deserialize, Serialize};

use crate::costs::rounding::round_to_tenth;
use crate::models::catalog::PriceRange;
use crate::models::inputs::sanitize_amount;

/// Default trust fund horizon (5 years)
pub const TRUST_FUND_HORIZON_MONTHS: u32 = 60;

/// Default deposit horizon
pub const DEPOSIT_HORIZON_MONTHS: u32 = 6;

/// Currency units per reporting unit (萬)
pub const REPORTING_UNIT: f64 = 10_000.0;

/// Reserve range expressed in reporting units, rounded to one decimal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReserveRange {
    pub min: f64,
    pub max: f64,
}

/// Reserve horizon configuration
///
/// The reference deployment uses the defaults; facilities with a different
/// deposit or trust arrangement override the month counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReserveHorizons {
    /// Months of housing cost held in trust
    pub trust_fund_months: u32,

    /// Months of housing cost held as deposit
    pub deposit_months: u32,

    /// Currency units per reporting unit
    pub reporting_unit: f64,
}

impl Default for ReserveHorizons {
    fn default() -> Self {
        Self {
            trust_fund_months: TRUST_FUND_HORIZON_MONTHS,
            deposit_months: DEPOSIT_HORIZON_MONTHS,
            reporting_unit: REPORTING_UNIT,
        }
    }
}

impl ReserveHorizons {
    /// Reserve needed to cover `months` of the monthly band
    ///
    /// # Example
    /// ```
    /// use care_cost_core::{PriceRange, ReserveHorizons};
    ///
    /// let horizons = ReserveHorizons::default();
    /// let band = PriceRange::new(38000.0, 41000.0);
    /// let trust = horizons.reserve(&band, horizons.trust_fund_months);
    /// assert_eq!((trust.min, trust.max), (228.0, 246.0));
    /// ```
    pub fn reserve(&self, monthly: &PriceRange, months: u32) -> ReserveRange {
        let total = monthly.scaled(f64::from(months));
        ReserveRange {
            min: sanitize_amount(round_to_tenth(total.min / self.reporting_unit)),
            max: sanitize_amount(round_to_tenth(total.max / self.reporting_unit)),
        }
    }

    pub fn trust_fund(&self, monthly: &PriceRange) -> ReserveRange {
        self.reserve(monthly, self.trust_fund_months)
    }

    pub fn deposit(&self, monthly: &PriceRange) -> ReserveRange {
        self.reserve(monthly, self.deposit_months)
    }
}
