//! Comparison result model
//!
//! Output of one engine run. Derived on every call and never stored by the
//! engine; callers keep or discard it as they see fit.

use serde::{Deserialize, Serialize};

use crate::costs::reserves::ReserveRange;
use crate::costs::rounding::round_half_up;
use crate::models::catalog::PriceRange;

/// Current monthly cost breakdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentCosts {
    /// Housing payment plus monthly tax accrual
    pub housing: f64,
    pub utilities: f64,
    pub cleaning: f64,
    pub transportation: f64,
    pub electricity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_care: Option<f64>,
    /// Sum of every component above
    pub total: f64,
}

/// Future monthly cost breakdown under the facility plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureCosts {
    /// Selected tier, if the selection matched one
    pub room_id: Option<String>,

    /// Nominal rent of the selected room
    pub base_rent: f64,

    /// Sum of enabled add-on fees
    pub extra_fee: f64,

    /// `base_rent + extra_fee`
    pub housing_nominal: f64,

    /// Room price band shifted by `extra_fee`
    pub housing_range: PriceRange,

    /// Electricity carried over from the current costs
    pub electricity: f64,

    /// `housing_nominal + electricity`
    pub total: f64,
}

/// How the monthly difference is presented
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum DeltaFraming {
    /// The future plan costs less; amount is the rounded saving
    Savings(f64),
    /// The future plan costs the same or more; amount is the rounded increase
    Increase(f64),
}

impl DeltaFraming {
    /// Frame a raw delta (`future - current`)
    pub fn from_delta(delta: f64) -> Self {
        let amount = round_half_up(delta).abs();
        if delta < 0.0 {
            DeltaFraming::Savings(amount)
        } else {
            DeltaFraming::Increase(amount)
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            DeltaFraming::Savings(amount) | DeltaFraming::Increase(amount) => *amount,
        }
    }

    pub fn is_savings(&self) -> bool {
        matches!(self, DeltaFraming::Savings(_))
    }
}

/// One-time capital reserves, in reporting units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CapitalReserves {
    pub trust_fund: ReserveRange,
    pub deposit: ReserveRange,
}

/// Result of comparing current costs with the future plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComparisonResult {
    pub current: CurrentCosts,
    pub future: FutureCosts,

    /// `future.total - current.total`
    pub delta: f64,

    pub framing: DeltaFraming,
    pub reserves: CapitalReserves,
}

impl CostComparisonResult {
    pub fn total_current(&self) -> f64 {
        self.current.total
    }

    pub fn total_future(&self) -> f64 {
        self.future.total
    }

    pub fn future_housing_nominal(&self) -> f64 {
        self.future.housing_nominal
    }

    pub fn future_housing_range(&self) -> PriceRange {
        self.future.housing_range
    }

    pub fn trust_fund_range(&self) -> ReserveRange {
        self.reserves.trust_fund
    }

    pub fn deposit_range(&self) -> ReserveRange {
        self.reserves.deposit
    }

    /// True when every number in the result is finite
    pub fn is_finite(&self) -> bool {
        let c = &self.current;
        let f = &self.future;
        let r = &self.reserves;
        [
            c.housing,
            c.utilities,
            c.cleaning,
            c.transportation,
            c.electricity,
            c.activities.unwrap_or(0.0),
            c.smart_care.unwrap_or(0.0),
            c.total,
            f.base_rent,
            f.extra_fee,
            f.housing_nominal,
            f.housing_range.min,
            f.housing_range.max,
            f.electricity,
            f.total,
            self.delta,
            self.framing.amount(),
            r.trust_fund.min,
            r.trust_fund.max,
            r.deposit.min,
            r.deposit.max,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}
