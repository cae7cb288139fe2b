//! Care Cost Core - Cost Comparison Engine
//!
//! Compares a household's current monthly living costs with a facility
//! housing plan and sizes the one-time capital reserves it requires.
//!
//! # Architecture
//!
//! - **models**: Domain types (inputs, catalogs, form snapshot, result)
//! - **costs**: Reserve horizons and rounding rules
//! - **engine**: The comparison itself and exportable summary snapshots
//! - **store**: Observable form cells that trigger recomputation
//! - **report**: Display formatting for a result
//!
//! # Critical Invariants
//!
//! 1. The engine never fails; malformed input counts as 0
//! 2. The engine is pure; identical input gives identical output
//! 3. The future total is future housing plus electricity, nothing else

// Module declarations
pub mod costs;
pub mod engine;
pub mod models;
pub mod report;
pub mod store;

// Re-exports for convenience
pub use costs::{ReserveHorizons, ReserveRange};
pub use engine::{CostComparisonEngine, SnapshotError, SummarySnapshot};
pub use models::{
    catalog::{
        AddOnCatalog, AddOnFee, CatalogError, FacilityConfig, PriceRange, ResolvedRoom,
        RoomCatalog, RoomSelection, RoomTier,
    },
    comparison::{CapitalReserves, CostComparisonResult, CurrentCosts, DeltaFraming, FutureCosts},
    form::FormSnapshot,
    inputs::{coerce_amount, CostInputs, FieldId, RawFields},
};
pub use report::{ComparisonReport, ReportFormat};
pub use store::{ComparisonSession, FormChange, FormStore, SubscriptionId};
