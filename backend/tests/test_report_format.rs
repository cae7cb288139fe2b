//! Report Formatting Tests
//!
//! Display text for the worked example and for the savings case.

use care_cost_core::{
    ComparisonReport, CostComparisonEngine, CostInputs, ReportFormat, RoomSelection,
};

fn example_inputs() -> CostInputs {
    CostInputs {
        monthly_housing: 20_000.0,
        annual_tax: 12_000.0,
        utilities: 2_000.0,
        cleaning: 1_500.0,
        transportation: 500.0,
        electricity: 800.0,
        activities: None,
        smart_care: None,
    }
}

#[test]
fn test_report_for_increase() {
    let engine = CostComparisonEngine::reference();
    let enabled = vec!["partner".to_string()];
    let result = engine.compare(&example_inputs(), &RoomSelection::Nominal(34_500.0), &enabled);
    let report = ComparisonReport::render(&result, &ReportFormat::default());

    assert_eq!(report.total_current, "NT$ 25,800");
    assert_eq!(report.total_future, "NT$ 40,300");
    assert!(!report.savings);
    assert!(report.delta.contains("increase"));
    assert!(report.delta.contains("NT$ 14,500"));
    assert_eq!(report.trust_fund, "228.0 ~ 246.0 萬");
    assert_eq!(report.deposit, "22.8 ~ 24.6 萬");
    assert_eq!(report.lines.len(), 5);
    assert_eq!(report.lines[0].current, "NT$ 21,000");
    assert_eq!(report.lines[0].future, "NT$ 39,500");
}

#[test]
fn test_report_for_savings() {
    let engine = CostComparisonEngine::reference();
    let inputs = CostInputs {
        monthly_housing: 40_000.0,
        ..example_inputs()
    };
    let result = engine.compare(&inputs, &RoomSelection::Nominal(34_500.0), &Vec::<String>::new());
    let report = ComparisonReport::render(&result, &ReportFormat::default());

    assert!(report.savings);
    assert_eq!(report.delta, "Monthly savings of about NT$ 10,500");
}

#[test]
fn test_extended_rows_are_listed() {
    let engine = CostComparisonEngine::reference();
    let inputs = CostInputs {
        activities: Some(1_200.0),
        smart_care: Some(3_000.0),
        ..example_inputs()
    };
    let result = engine.compare(&inputs, &RoomSelection::None, &Vec::<String>::new());
    let report = ComparisonReport::render(&result, &ReportFormat::default());

    assert_eq!(report.lines.len(), 7);
    assert_eq!(report.lines[6].label, "Smart care");
    assert_eq!(report.lines[6].future, "included");
}

#[test]
fn test_custom_currency_prefix() {
    let format = ReportFormat {
        currency_prefix: "$".to_string(),
        reserve_unit: "x10k".to_string(),
    };
    assert_eq!(format.currency(-1_234.4), "$ -1,234");
    assert_eq!(format.currency(0.4), "$ 0");
}

#[test]
fn test_display_contains_totals_and_reserves() {
    let engine = CostComparisonEngine::reference();
    let result = engine.compare(&example_inputs(), &RoomSelection::Nominal(46_000.0), &Vec::<String>::new());
    let text = ComparisonReport::render(&result, &ReportFormat::default()).to_string();

    assert!(text.contains("Total"));
    assert!(text.contains("NT$ 25,800"));
    assert!(text.contains("NT$ 46,800"));
    assert!(text.contains("Trust fund: 252.0 ~ 300.0 萬"));
    assert!(text.contains("Deposit:    25.2 ~ 30.0 萬"));
}
