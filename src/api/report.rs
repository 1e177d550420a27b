use crate::core::{format_euro, format_pct};

use super::ProjectResponse;

/// Plain-text rendering of a projection: banner, coverage and the year table.
pub fn render_report(response: &ProjectResponse) -> String {
    let inputs = &response.inputs;
    let labels = &response.labels;

    let mut lines = vec![
        format!(
            "Retire at {}: you need {} in savings (4% rule)",
            inputs.pension_age, labels.target_nest_egg
        ),
        format!(
            "Annual spending at retirement: {} (today: {})",
            labels.spend_at_retirement,
            format_euro(inputs.withdrawal_yearly)
        ),
        format!(
            "Pension coverage: {} | Savings: {}",
            labels.pension_coverage, labels.savings_share
        ),
        format!("Years to pension: {}", response.years_to_pension_display),
        labels.subtitle.clone(),
        format!(
            "Assumptions: inflation {} p.a., growth {} p.a.",
            format_pct(inputs.inflation_rate * 100.0),
            format_pct(inputs.growth_rate * 100.0)
        ),
    ];

    for warning in &response.warnings {
        lines.push(format!("warning: {warning}"));
    }

    if response.points.is_empty() {
        lines.push(String::new());
        lines.push("No savings series: the pension age has already passed.".to_string());
        return lines.join("\n");
    }

    lines.push(String::new());
    lines.push(format!("{:<6} {:>4} {:>16}", "Year", "Age", "Required saving"));
    for point in &response.points {
        lines.push(format!(
            "{:<6} {:>4} {:>16}",
            point.year,
            point.age,
            format_euro(point.required_amount)
        ));
    }

    lines.join("\n")
}
