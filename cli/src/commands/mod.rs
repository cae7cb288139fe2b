//! Command implementations for the CLI
//!
//! - compare: Print the comparison for the given form values
//! - rooms: List configured room tiers and add-ons
//! - export: Write a date-stamped summary snapshot
//! - verify: Check a summary snapshot against the configuration

pub mod compare;
pub mod export;
pub mod rooms;
pub mod verify;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use care_cost_core::{CostComparisonEngine, FacilityConfig};

/// Build the engine from a configuration file, or the reference catalogs
pub fn load_engine(config: Option<&Path>) -> Result<CostComparisonEngine> {
    let Some(path) = config else {
        info!("Using reference facility configuration");
        return Ok(CostComparisonEngine::reference());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration {}", path.display()))?;
    let facility = FacilityConfig::from_json_str(&json)
        .with_context(|| format!("Invalid configuration {}", path.display()))?;
    info!(path = %path.display(), "Loaded facility configuration");

    Ok(CostComparisonEngine::new(facility)?)
}
