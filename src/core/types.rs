use serde::Serialize;

use super::config::{GROWTH_RATE, INFLATION};
use super::error::ProjectionError;

/// One snapshot of the calculator inputs, already clamped by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    pub age: u32,
    pub pension_age: u32,
    pub withdrawal_yearly: f64,
    pub monthly_pension: f64,
    pub inflation_rate: f64,
    pub growth_rate: f64,
}

impl Inputs {
    /// Inputs with the fixed inflation and growth assumptions.
    pub fn new(age: u32, pension_age: u32, withdrawal_yearly: f64, monthly_pension: f64) -> Self {
        Self {
            age,
            pension_age,
            withdrawal_yearly,
            monthly_pension,
            inflation_rate: INFLATION,
            growth_rate: GROWTH_RATE,
        }
    }

    pub fn pension_yearly(&self) -> f64 {
        self.monthly_pension * 12.0
    }

    /// Signed, so a pension age below the current age gives a negative horizon.
    pub fn years_to_pension(&self) -> i32 {
        self.pension_age as i32 - self.age as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: i32,
    pub age: i32,
    pub required_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementSummary {
    pub years_to_pension: i32,
    pub spend_at_retirement: f64,
    pub pension_at_retirement: f64,
    pub gap_at_retirement: f64,
    pub target_nest_egg: f64,
    pub pension_coverage_pct: f64,
    pub savings_share_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub points: Vec<ProjectionPoint>,
    pub summary: RetirementSummary,
}

impl Projection {
    /// Reports degenerate results the caller has to decide how to display.
    ///
    /// An inverted horizon takes precedence: its series is empty but the
    /// summary is still meaningful, whereas non-finite coverage figures are not.
    pub fn check(&self) -> Result<(), ProjectionError> {
        let summary = &self.summary;
        if summary.years_to_pension < 0 {
            return Err(ProjectionError::InvertedHorizon {
                years_to_pension: summary.years_to_pension,
            });
        }
        let spend_positive = summary.spend_at_retirement > 0.0;
        if !spend_positive
            || !summary.pension_coverage_pct.is_finite()
            || !summary.savings_share_pct.is_finite()
        {
            return Err(ProjectionError::InvalidDomain {
                spend_at_retirement: summary.spend_at_retirement,
            });
        }
        Ok(())
    }
}
