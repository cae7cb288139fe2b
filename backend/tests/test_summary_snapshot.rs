//! Summary Snapshot Tests
//!
//! Critical invariants tested:
//! - Determinism: a reloaded snapshot recomputes to the stored result
//! - Config matching: a snapshot is rejected by a different catalog
//! - Tampering: an edited result no longer verifies

use care_cost_core::engine::snapshot::{export_file_name, SNAPSHOT_VERSION};
use care_cost_core::{
    AddOnCatalog, CostComparisonEngine, CostInputs, FacilityConfig, FormSnapshot, RoomCatalog,
    RoomSelection, RoomTier, SnapshotError, SummarySnapshot,
};

fn example_form() -> FormSnapshot {
    FormSnapshot::new(CostInputs {
        monthly_housing: 20_000.0,
        annual_tax: 12_000.0,
        utilities: 2_000.0,
        cleaning: 1_500.0,
        transportation: 500.0,
        electricity: 800.0,
        activities: None,
        smart_care: None,
    })
    .with_room(RoomSelection::Nominal(34_500.0))
    .with_add_on("partner")
}

#[test]
fn test_capture_and_reload_verifies() {
    let engine = CostComparisonEngine::reference();
    let snapshot = SummarySnapshot::capture(&engine, &example_form()).unwrap();
    assert_eq!(snapshot.version, SNAPSHOT_VERSION);
    assert_eq!(snapshot.result.total_future(), 40_300.0);

    let json = snapshot.to_json().unwrap();
    let restored = SummarySnapshot::from_json(&json).unwrap();

    assert_eq!(restored, snapshot);
    assert!(restored.verify(&engine).is_ok());
}

#[test]
fn test_capture_normalizes_inputs() {
    let engine = CostComparisonEngine::reference();
    let form = FormSnapshot::new(CostInputs {
        utilities: f64::NAN,
        ..Default::default()
    });
    let snapshot = SummarySnapshot::capture(&engine, &form).unwrap();

    assert_eq!(snapshot.form.inputs.utilities, 0.0);
    let restored = SummarySnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
    assert!(restored.verify(&engine).is_ok());
}

#[test]
fn test_different_catalog_is_rejected() {
    let snapshot = SummarySnapshot::capture(&CostComparisonEngine::reference(), &example_form()).unwrap();

    let other = CostComparisonEngine::new(FacilityConfig {
        rooms: RoomCatalog::new(vec![RoomTier::new("economy", "Economy", 34_500.0, 30_000.0, 39_000.0)]).unwrap(),
        add_ons: AddOnCatalog::reference(),
    })
    .unwrap();

    assert!(matches!(
        snapshot.verify(&other),
        Err(SnapshotError::CatalogMismatch { .. })
    ));
}

#[test]
fn test_tampered_result_is_rejected() {
    let engine = CostComparisonEngine::reference();
    let mut snapshot = SummarySnapshot::capture(&engine, &example_form()).unwrap();
    snapshot.result.delta = -1.0;

    assert!(matches!(snapshot.verify(&engine), Err(SnapshotError::ResultMismatch)));
}

#[test]
fn test_unknown_version_is_rejected() {
    let engine = CostComparisonEngine::reference();
    let mut snapshot = SummarySnapshot::capture(&engine, &example_form()).unwrap();
    snapshot.version = 99;
    let json = snapshot.to_json().unwrap();

    assert!(matches!(
        SummarySnapshot::from_json(&json),
        Err(SnapshotError::UnsupportedVersion { found: 99, .. })
    ));
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(matches!(
        SummarySnapshot::from_json("{"),
        Err(SnapshotError::Serialization(_))
    ));
}

#[test]
fn test_export_file_name_is_date_stamped() {
    assert_eq!(
        export_file_name("care_cost_report", 2025, 12, 1),
        "care_cost_report_20251201.json"
    );
}
