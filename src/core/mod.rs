pub mod config;
mod engine;
mod error;
mod format;
mod types;

pub use engine::{
    build_series, coverage_percentages, current_year, inflation_adjust, required_present_value,
    run_projection, summarize_retirement,
};
pub use error::ProjectionError;
pub use format::{SummaryLabels, format_euro, format_pct, point_tooltip_title, summary_labels};
pub use types::{Inputs, Projection, ProjectionPoint, RetirementSummary};
