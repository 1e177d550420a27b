use serde::Serialize;

/// Lowest starting age accepted by the input layer.
pub const AGE_MIN: u32 = 30;
pub const AGE_MAX: u32 = 70;
pub const PENSION_AGE_MIN: u32 = 55;
pub const PENSION_AGE_MAX: u32 = 75;
pub const WITHDRAWAL_MIN: f64 = 10_000.0;
pub const WITHDRAWAL_MAX: f64 = 250_000.0;
pub const MONTHLY_PENSION_MIN: f64 = 0.0;
pub const MONTHLY_PENSION_MAX: f64 = 6_000.0;

/// Fixed annual inflation rate applied to spending and pension income.
pub const INFLATION: f64 = 0.035;
/// Assumed nominal annual growth of savings.
pub const GROWTH_RATE: f64 = 0.04;
/// 4% rule: a pot of 25x the annual gap sustains it indefinitely.
pub const NEST_EGG_MULTIPLE: f64 = 25.0;

pub const DEFAULT_AGE: u32 = 30;
pub const DEFAULT_PENSION_AGE: u32 = 65;
pub const DEFAULT_WITHDRAWAL_YEARLY: f64 = 40_000.0;
pub const DEFAULT_MONTHLY_PENSION: f64 = 1_500.0;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRange<T> {
    pub min: T,
    pub max: T,
    pub default: T,
    pub step: T,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBounds {
    pub age: InputRange<u32>,
    pub pension_age: InputRange<u32>,
    pub withdrawal_yearly: InputRange<f64>,
    pub monthly_pension: InputRange<f64>,
}

pub const INPUT_BOUNDS: InputBounds = InputBounds {
    age: InputRange {
        min: AGE_MIN,
        max: AGE_MAX,
        default: DEFAULT_AGE,
        step: 1,
    },
    pension_age: InputRange {
        min: PENSION_AGE_MIN,
        max: PENSION_AGE_MAX,
        default: DEFAULT_PENSION_AGE,
        step: 1,
    },
    withdrawal_yearly: InputRange {
        min: WITHDRAWAL_MIN,
        max: WITHDRAWAL_MAX,
        default: DEFAULT_WITHDRAWAL_YEARLY,
        step: 1_000.0,
    },
    monthly_pension: InputRange {
        min: MONTHLY_PENSION_MIN,
        max: MONTHLY_PENSION_MAX,
        default: DEFAULT_MONTHLY_PENSION,
        step: 50.0,
    },
};
