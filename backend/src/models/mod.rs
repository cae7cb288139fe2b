//! Domain models for the cost comparison

pub mod catalog;
pub mod comparison;
pub mod form;
pub mod inputs;

// Re-exports
pub use catalog::{
    AddOnCatalog, AddOnFee, CatalogError, FacilityConfig, PriceRange, ResolvedRoom, RoomCatalog,
    RoomSelection, RoomTier,
};
pub use comparison::{CapitalReserves, CostComparisonResult, CurrentCosts, DeltaFraming, FutureCosts};
pub use form::FormSnapshot;
pub use inputs::{coerce_amount, sanitize_amount, CostInputs, FieldId, RawFields, UnknownField};
