//! Report formatting
//!
//! Turns a `CostComparisonResult` into display text: currency amounts with
//! thousands separators, the savings/increase sentence, and the capital
//! reserve ranges in reporting units.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::costs::reserves::ReserveRange;
use crate::costs::rounding::round_half_up;
use crate::models::comparison::{CostComparisonResult, DeltaFraming};

/// Display conventions for a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFormat {
    /// Prefix for currency amounts (e.g. "NT$")
    pub currency_prefix: String,

    /// Suffix for reserve amounts in reporting units (e.g. "萬")
    pub reserve_unit: String,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            currency_prefix: "NT$".to_string(),
            reserve_unit: "萬".to_string(),
        }
    }
}

impl ReportFormat {
    /// Rounded, thousands-separated, prefixed amount
    ///
    /// # Example
    /// ```
    /// use care_cost_core::ReportFormat;
    ///
    /// let format = ReportFormat::default();
    /// assert_eq!(format.currency(25800.0), "NT$ 25,800");
    /// assert_eq!(format.currency(1234567.5), "NT$ 1,234,568");
    /// ```
    pub fn currency(&self, value: f64) -> String {
        format!("{} {}", self.currency_prefix, group_thousands(round_half_up(value)))
    }

    /// `"min ~ max unit"` with one decimal place
    pub fn reserve(&self, range: &ReserveRange) -> String {
        format!("{:.1} ~ {:.1} {}", range.min, range.max, self.reserve_unit)
    }

    /// Savings or increase sentence for the monthly difference
    pub fn delta(&self, framing: &DeltaFraming) -> String {
        match framing {
            DeltaFraming::Savings(amount) => {
                format!("Monthly savings of about {}", self.currency(*amount))
            }
            DeltaFraming::Increase(amount) => format!(
                "Monthly increase of about {} (in exchange for full-service care)",
                self.currency(*amount)
            ),
        }
    }
}

/// Integer part of `value` with `,` every three digits
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 && digits != "0" {
        grouped.push('-');
    }
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// One row of the side-by-side table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    pub current: String,
    pub future: String,
}

/// Rendered comparison summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub lines: Vec<ReportLine>,
    pub total_current: String,
    pub total_future: String,
    pub delta: String,
    pub savings: bool,
    pub trust_fund: String,
    pub deposit: String,
}

impl ComparisonReport {
    /// Render a result with the given display conventions
    pub fn render(result: &CostComparisonResult, format: &ReportFormat) -> Self {
        const INCLUDED: &str = "included";

        let current = &result.current;
        let future = &result.future;
        let mut lines = vec![
            ReportLine {
                label: "Housing".to_string(),
                current: format.currency(current.housing),
                future: format.currency(future.housing_nominal),
            },
            ReportLine {
                label: "Utilities".to_string(),
                current: format.currency(current.utilities),
                future: INCLUDED.to_string(),
            },
            ReportLine {
                label: "Cleaning".to_string(),
                current: format.currency(current.cleaning),
                future: INCLUDED.to_string(),
            },
            ReportLine {
                label: "Transportation & other".to_string(),
                current: format.currency(current.transportation),
                future: INCLUDED.to_string(),
            },
            ReportLine {
                label: "Electricity".to_string(),
                current: format.currency(current.electricity),
                future: format.currency(future.electricity),
            },
        ];
        if let Some(activities) = current.activities {
            lines.push(ReportLine {
                label: "Activities".to_string(),
                current: format.currency(activities),
                future: INCLUDED.to_string(),
            });
        }
        if let Some(smart_care) = current.smart_care {
            lines.push(ReportLine {
                label: "Smart care".to_string(),
                current: format.currency(smart_care),
                future: INCLUDED.to_string(),
            });
        }

        Self {
            lines,
            total_current: format.currency(current.total),
            total_future: format.currency(future.total),
            delta: format.delta(&result.framing),
            savings: result.framing.is_savings(),
            trust_fund: format.reserve(&result.reserves.trust_fund),
            deposit: format.reserve(&result.reserves.deposit),
        }
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .lines
            .iter()
            .map(|line| line.label.chars().count())
            .max()
            .unwrap_or(0)
            .max("Total".len());

        writeln!(f, "{:<width$}  {:>14}  {:>14}", "", "Current", "Future", width = width)?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<width$}  {:>14}  {:>14}",
                line.label,
                line.current,
                line.future,
                width = width
            )?;
        }
        writeln!(
            f,
            "{:<width$}  {:>14}  {:>14}",
            "Total",
            self.total_current,
            self.total_future,
            width = width
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.delta)?;
        writeln!(f, "Trust fund: {}", self.trust_fund)?;
        write!(f, "Deposit:    {}", self.deposit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(-1200.0), "-1,200");
        assert_eq!(group_thousands(-0.0), "0");
    }

    #[test]
    fn test_reserve_format() {
        let format = ReportFormat::default();
        let range = ReserveRange { min: 228.0, max: 246.0 };
        assert_eq!(format.reserve(&range), "228.0 ~ 246.0 萬");
    }
}
