use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::info;

use care_cost_core::engine::snapshot::export_file_name;
use care_cost_core::{CostComparisonEngine, FormSnapshot, SummarySnapshot};

use crate::cli::FormArgs;

const FILE_PREFIX: &str = "care_cost_report";

/// Execute the export command
pub fn execute(engine: &CostComparisonEngine, form: &FormArgs, out_dir: &Path) -> Result<()> {
    let today = Local::now().date_naive();
    let path = write_summary(engine, &form.form_snapshot(), out_dir, today)?;
    println!("{}", path.display());
    Ok(())
}

/// Write the summary for `form` into `out_dir`, named after `date`
pub fn write_summary(
    engine: &CostComparisonEngine,
    form: &FormSnapshot,
    out_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    let snapshot = SummarySnapshot::capture(engine, form)?;
    let json = snapshot.to_json()?;
    let path = out_dir.join(export_file_name(FILE_PREFIX, date.year(), date.month(), date.day()));

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), "Exported comparison summary");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::verify;
    use care_cost_core::{
        AddOnCatalog, CostInputs, FacilityConfig, RoomCatalog, RoomSelection, RoomTier,
    };
    use tempfile::TempDir;

    fn sample_form() -> FormSnapshot {
        let inputs = CostInputs {
            monthly_housing: 20_000.0,
            annual_tax: 12_000.0,
            electricity: 800.0,
            ..Default::default()
        };
        FormSnapshot::new(inputs)
            .with_room(RoomSelection::Nominal(33_250.0))
            .with_add_on("partner")
    }

    #[test]
    fn test_export_then_verify() {
        let temp_dir = TempDir::new().unwrap();
        let engine = CostComparisonEngine::reference();
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        let path = write_summary(&engine, &sample_form(), temp_dir.path(), date).unwrap();

        assert_eq!(path, temp_dir.path().join("care_cost_report_20240307.json"));
        let snapshot = verify::verify_file(&engine, &path).unwrap();
        assert_eq!(snapshot.result.deposit_range().min, 22.9);
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("reports").join("2024");
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let path = write_summary(&CostComparisonEngine::reference(), &sample_form(), &nested, date).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_verify_rejects_other_configuration() {
        let temp_dir = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let path = write_summary(&CostComparisonEngine::reference(), &sample_form(), temp_dir.path(), date).unwrap();

        let config = FacilityConfig {
            rooms: RoomCatalog::new(vec![RoomTier::new("suite", "Suite", 90_000.0, 85_000.0, 95_000.0)]).unwrap(),
            add_ons: AddOnCatalog::reference(),
        };
        let other = CostComparisonEngine::new(config).unwrap();
        assert!(verify::verify_file(&other, &path).is_err());
    }
}
