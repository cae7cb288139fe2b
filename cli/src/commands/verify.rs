use anyhow::{Context, Result};
use std::path::Path;

use care_cost_core::{CostComparisonEngine, SummarySnapshot};

/// Execute the verify command
pub fn execute(engine: &CostComparisonEngine, file: &Path) -> Result<()> {
    verify_file(engine, file)?;
    println!("✓ {} matches the current configuration", file.display());
    Ok(())
}

/// Read a summary and check it against `engine`
pub fn verify_file(engine: &CostComparisonEngine, file: &Path) -> Result<SummarySnapshot> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let snapshot = SummarySnapshot::from_json(&json)
        .with_context(|| format!("Invalid summary {}", file.display()))?;

    snapshot
        .verify(engine)
        .with_context(|| format!("Summary {} does not match this configuration", file.display()))?;
    Ok(snapshot)
}
