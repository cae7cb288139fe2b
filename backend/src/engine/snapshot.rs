//! Summary Snapshots - Export/Verify Comparison Summaries
//!
//! A summary snapshot captures the form state, the computed result and a
//! hash of the facility configuration it was computed against. It can be
//! written out as JSON and verified later.
//!
//! # Critical Invariants
//!
//! - **Determinism**: Recomputing a snapshot's form gives the stored result
//! - **Config Matching**: A snapshot only verifies against the same catalogs

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::engine::comparison::CostComparisonEngine;
use crate::models::comparison::CostComparisonResult;
use crate::models::form::FormSnapshot;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors raised while exporting or verifying a summary snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { expected: u32, found: u32 },

    #[error("Facility configuration mismatch: snapshot {found}, engine {expected}")]
    CatalogMismatch { expected: String, found: String },

    #[error("Stored result differs from recomputation")]
    ResultMismatch,
}

/// Exported comparison summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySnapshot {
    pub version: u32,

    /// Form state the result was computed from (inputs normalized)
    pub form: FormSnapshot,

    pub result: CostComparisonResult,

    /// SHA256 of the engine's facility configuration and reserve horizons
    pub config_hash: String,
}

impl SummarySnapshot {
    /// Compute a result for `form` and capture it
    pub fn capture(engine: &CostComparisonEngine, form: &FormSnapshot) -> Result<Self, SnapshotError> {
        let form = FormSnapshot {
            inputs: form.inputs.normalized(),
            ..form.clone()
        };
        let result = engine.compare_snapshot(&form);
        Ok(Self {
            version: SNAPSHOT_VERSION,
            form,
            result,
            config_hash: engine_config_hash(engine)?,
        })
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: SummarySnapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                expected: SNAPSHOT_VERSION,
                found: snapshot.version,
            });
        }
        Ok(snapshot)
    }

    /// Check the snapshot against an engine
    ///
    /// # Errors
    ///
    /// - `CatalogMismatch` if the engine's configuration hash differs
    /// - `ResultMismatch` if recomputing the form gives a different result
    pub fn verify(&self, engine: &CostComparisonEngine) -> Result<(), SnapshotError> {
        let expected = engine_config_hash(engine)?;
        if expected != self.config_hash {
            tracing::warn!(%expected, found = %self.config_hash, "snapshot config hash mismatch");
            return Err(SnapshotError::CatalogMismatch {
                expected,
                found: self.config_hash.clone(),
            });
        }

        if engine.compare_snapshot(&self.form) != self.result {
            tracing::warn!("snapshot result differs from recomputation");
            return Err(SnapshotError::ResultMismatch);
        }
        Ok(())
    }
}

/// Hash of everything in the engine that affects a result
pub fn engine_config_hash(engine: &CostComparisonEngine) -> Result<String, SnapshotError> {
    #[derive(Serialize)]
    struct Hashed<'a> {
        facility: &'a crate::models::catalog::FacilityConfig,
        horizons: &'a crate::costs::reserves::ReserveHorizons,
    }

    compute_config_hash(&Hashed {
        facility: engine.config(),
        horizons: engine.horizons(),
    })
}

/// Compute deterministic SHA256 hash of a serializable config
///
/// Uses canonical JSON serialization with sorted keys.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, SnapshotError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let canonical = canonicalize(serde_json::to_value(config)?);
    let json = serde_json::to_string(&canonical)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

/// File name for an exported summary, stamped with the export date
///
/// # Example
/// ```
/// use care_cost_core::engine::snapshot::export_file_name;
///
/// assert_eq!(export_file_name("care_cost_report", 2024, 3, 7), "care_cost_report_20240307.json");
/// ```
pub fn export_file_name(prefix: &str, year: i32, month: u32, day: u32) -> String {
    format!("{}_{:04}{:02}{:02}.json", prefix, year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_config_hash_deterministic() {
        #[derive(Serialize)]
        struct TestConfig {
            value: i32,
            name: String,
        }

        let hash1 = compute_config_hash(&TestConfig { value: 42, name: "test".into() }).unwrap();
        let hash2 = compute_config_hash(&TestConfig { value: 42, name: "test".into() }).unwrap();
        assert_eq!(hash1, hash2, "Same config should produce same hash");
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_engine_hash_changes_with_horizons() {
        let reference = CostComparisonEngine::reference();
        let longer = CostComparisonEngine::reference()
            .with_horizons(crate::costs::reserves::ReserveHorizons {
                trust_fund_months: 120,
                ..Default::default()
            })
            .unwrap();

        assert_ne!(
            engine_config_hash(&reference).unwrap(),
            engine_config_hash(&longer).unwrap()
        );
    }
}
