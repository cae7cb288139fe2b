//! Reserve horizons and rounding rules
//!
//! - `reserves`: capital reserve sizing (trust fund, deposit)
//! - `rounding`: how reported figures are rounded

pub mod reserves;
pub mod rounding;

// Re-exports
pub use reserves::{
    ReserveHorizons, ReserveRange, DEPOSIT_HORIZON_MONTHS, REPORTING_UNIT,
    TRUST_FUND_HORIZON_MONTHS,
};
pub use rounding::{round_half_up, round_to_tenth};
