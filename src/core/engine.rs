use chrono::{Datelike, Local};

use super::config::NEST_EGG_MULTIPLE;
use super::types::{Inputs, Projection, ProjectionPoint, RetirementSummary};

const NO_REAL_GROWTH_EPS: f64 = 1e-12;

/// Value after `years` of inflation of an amount expressed in today's money.
/// Negative `years` discounts back in time.
pub fn inflation_adjust(amount_today: f64, years: i32, inflation_rate: f64) -> f64 {
    amount_today * (1.0 + inflation_rate).powi(years)
}

/// Starting pot that, growing at `growth_rate` per step while paying out a
/// withdrawal that tracks `withdrawal_today` in real terms, lands on
/// `target_final` after `steps` steps.
///
/// With `g = (1 + growth) / (1 + inflation)` the closed form is
/// `S = (X + w * (g^n - 1) / (g - 1)) / g^n`, degenerating to `S = X + n * w`
/// when there is no net real growth.
pub fn required_present_value(
    target_final: f64,
    growth_rate: f64,
    steps: u32,
    inflation_rate: f64,
    withdrawal_today: f64,
) -> f64 {
    if steps == 0 {
        return target_final;
    }

    let g = (1.0 + growth_rate) / (1.0 + inflation_rate);
    if (g - 1.0).abs() < NO_REAL_GROWTH_EPS {
        return target_final + withdrawal_today * steps as f64;
    }

    let g_pow = g.powi(steps as i32);
    let series_factor = (g_pow - 1.0) / (g - 1.0);
    (target_final + withdrawal_today * series_factor) / g_pow
}

/// Share of retirement spending covered by the pension, and the remainder
/// that savings have to fund. Undefined when `spend_at_retirement` is zero;
/// callers check the result before display.
pub fn coverage_percentages(pension_at_retirement: f64, spend_at_retirement: f64) -> (f64, f64) {
    // Comparisons rather than f64::min/max, which would swallow a NaN ratio.
    let ratio = pension_at_retirement / spend_at_retirement * 100.0;
    let coverage = if ratio > 100.0 { 100.0 } else { ratio };
    let remainder = 100.0 - coverage;
    let savings = if remainder < 0.0 { 0.0 } else { remainder };
    (coverage, savings)
}

pub fn summarize_retirement(inputs: &Inputs) -> RetirementSummary {
    let years_to_pension = inputs.years_to_pension();
    let spend_at_retirement = inflation_adjust(
        inputs.withdrawal_yearly,
        years_to_pension,
        inputs.inflation_rate,
    );
    let pension_at_retirement = inflation_adjust(
        inputs.pension_yearly(),
        years_to_pension,
        inputs.inflation_rate,
    );
    let gap_at_retirement = (spend_at_retirement - pension_at_retirement).max(0.0);
    let (pension_coverage_pct, savings_share_pct) =
        coverage_percentages(pension_at_retirement, spend_at_retirement);

    RetirementSummary {
        years_to_pension,
        spend_at_retirement,
        pension_at_retirement,
        gap_at_retirement,
        target_nest_egg: gap_at_retirement * NEST_EGG_MULTIPLE,
        pension_coverage_pct,
        savings_share_pct,
    }
}

/// Required savings for every calendar year from `current_year` up to the
/// pension year. An inverted horizon yields no points.
pub fn build_series(inputs: &Inputs, current_year: i32) -> Projection {
    let summary = summarize_retirement(inputs);
    let years_to_pension = summary.years_to_pension;
    let start_age = inputs.age as i32;

    let points = (0..=years_to_pension)
        .rev()
        .map(|steps_remaining| {
            let nth_from_today = years_to_pension - steps_remaining;
            ProjectionPoint {
                year: current_year + nth_from_today,
                age: start_age + nth_from_today,
                required_amount: required_present_value(
                    summary.target_nest_egg,
                    inputs.growth_rate,
                    steps_remaining as u32,
                    inputs.inflation_rate,
                    summary.spend_at_retirement,
                ),
            }
        })
        .collect();

    Projection { points, summary }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn run_projection(inputs: &Inputs) -> Projection {
    build_series(inputs, current_year())
}
