//! Comparison engine and summary snapshots
//!
//! See `comparison.rs` for the computation itself.

pub mod comparison;
pub mod snapshot;

// Re-export main types for convenience
pub use comparison::CostComparisonEngine;
pub use snapshot::{
    compute_config_hash, engine_config_hash, export_file_name, SnapshotError, SummarySnapshot,
    SNAPSHOT_VERSION,
};
