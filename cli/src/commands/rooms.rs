use care_cost_core::{CostComparisonEngine, ReportFormat};

/// Execute the rooms command
pub fn execute(engine: &CostComparisonEngine) {
    print!("{}", listing(engine));
}

/// Room tiers and add-on fees, one per line
pub fn listing(engine: &CostComparisonEngine) -> String {
    let format = ReportFormat::default();
    let mut out = String::from("Room tiers:\n");
    for tier in engine.rooms().tiers() {
        out.push_str(&format!(
            "  {:<14} {:<32} {} ({} ~ {})\n",
            tier.id,
            tier.label,
            format.currency(tier.nominal),
            format.currency(tier.min),
            format.currency(tier.max)
        ));
    }

    out.push_str("\nAdd-on fees:\n");
    for fee in engine.add_ons().fees() {
        out.push_str(&format!(
            "  {:<14} {:<32} {}\n",
            fee.id,
            fee.label,
            format.currency(fee.monthly_amount)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_shows_reference_catalog() {
        let text = listing(&CostComparisonEngine::reference());
        assert!(text.starts_with("Room tiers:\n"));
        assert!(text.contains("economy"));
        assert!(text.contains("NT$ 34,500 (NT$ 33,000 ~ NT$ 36,000)"));
        assert!(text.contains("partner"));
        assert!(text.contains("NT$ 5,000"));
        assert_eq!(text.lines().filter(|line| line.starts_with("  ")).count(), 5);
    }
}
