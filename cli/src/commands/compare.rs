use anyhow::Result;
use tracing::debug;

use care_cost_core::{ComparisonReport, CostComparisonEngine, ReportFormat};

use crate::cli::FormArgs;

/// Execute the compare command
pub fn execute(engine: &CostComparisonEngine, form: &FormArgs, json: bool) -> Result<()> {
    let snapshot = form.form_snapshot();
    debug!(?snapshot, "Comparing form");

    let result = engine.compare_snapshot(&snapshot);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", ComparisonReport::render(&result, &ReportFormat::default()));
    }
    Ok(())
}
