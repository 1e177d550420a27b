use serde::Serialize;

use super::types::{ProjectionPoint, RetirementSummary};

/// Whole euros with thousands separators, e.g. `€1,833,475`.
pub fn format_euro(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-€{grouped}")
    } else {
        format!("€{grouped}")
    }
}

pub fn format_pct(pct: f64) -> String {
    if !pct.is_finite() {
        return "n/a".to_string();
    }
    format!("{pct:.1}%")
}

pub fn point_tooltip_title(point: &ProjectionPoint) -> String {
    format!("Year= {} Age= {}", point.year, point.age)
}

/// Display strings for the banner, chart subtitle and donut tooltips.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLabels {
    pub target_nest_egg: String,
    pub spend_at_retirement: String,
    pub pension_at_retirement: String,
    pub gap_at_retirement: String,
    pub pension_coverage: String,
    pub savings_share: String,
    pub subtitle: String,
    pub pension_slice: String,
    pub savings_slice: String,
}

pub fn summary_labels(summary: &RetirementSummary, pension_age: u32) -> SummaryLabels {
    let target = format_euro(summary.target_nest_egg);
    let spend = format_euro(summary.spend_at_retirement);
    let pension = format_euro(summary.pension_at_retirement);
    let gap = format_euro(summary.gap_at_retirement);
    let coverage = format_pct(summary.pension_coverage_pct);
    let savings = format_pct(summary.savings_share_pct);

    SummaryLabels {
        subtitle: format!(
            "Target saving@{pension_age}={target} | Pension@{pension_age}={pension} p.y. | \
             Spending@{pension_age}={spend} | Gap@{pension_age}={gap}"
        ),
        pension_slice: format!("Pension: {pension} ({coverage})"),
        savings_slice: format!("Savings: {gap} ({savings})"),
        target_nest_egg: target,
        spend_at_retirement: spend,
        pension_at_retirement: pension,
        gap_at_retirement: gap,
        pension_coverage: coverage,
        savings_share: savings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_euro_groups_thousands_and_rounds() {
        assert_eq!(format_euro(0.0), "€0");
        assert_eq!(format_euro(999.4), "€999");
        assert_eq!(format_euro(999.5), "€1,000");
        assert_eq!(format_euro(1_833_474.745), "€1,833,475");
        assert_eq!(format_euro(123_456_789.0), "€123,456,789");
        assert_eq!(format_euro(-40_000.0), "-€40,000");
    }

    #[test]
    fn format_euro_and_pct_mark_non_finite_values() {
        assert_eq!(format_euro(f64::NAN), "n/a");
        assert_eq!(format_euro(f64::INFINITY), "n/a");
        assert_eq!(format_pct(f64::NAN), "n/a");
    }

    #[test]
    fn format_pct_uses_one_decimal() {
        assert_eq!(format_pct(45.0), "45.0%");
        assert_eq!(format_pct(54.96), "55.0%");
        assert_eq!(format_pct(100.0), "100.0%");
    }

    #[test]
    fn point_tooltip_title_shows_year_and_age() {
        let point = ProjectionPoint {
            year: 2030,
            age: 35,
            required_amount: 1.0,
        };
        assert_eq!(point_tooltip_title(&point), "Year= 2030 Age= 35");
    }

    #[test]
    fn summary_labels_build_subtitle_and_slices() {
        let summary = RetirementSummary {
            years_to_pension: 35,
            spend_at_retirement: 133_343.6,
            pension_at_retirement: 60_004.6,
            gap_at_retirement: 73_339.0,
            target_nest_egg: 1_833_475.0,
            pension_coverage_pct: 45.0,
            savings_share_pct: 55.0,
        };

        let labels = summary_labels(&summary, 65);
        assert_eq!(
            labels.subtitle,
            "Target saving@65=€1,833,475 | Pension@65=€60,005 p.y. | \
             Spending@65=€133,344 | Gap@65=€73,339"
        );
        assert_eq!(labels.pension_slice, "Pension: €60,005 (45.0%)");
        assert_eq!(labels.savings_slice, "Savings: €73,339 (55.0%)");
        assert_eq!(labels.target_nest_egg, "€1,833,475");
    }
}
