use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectionError {
    #[error("pension age lies before the current age ({years_to_pension} years to pension)")]
    InvertedHorizon { years_to_pension: i32 },

    #[error("coverage is undefined for spending at retirement of {spend_at_retirement}")]
    InvalidDomain { spend_at_retirement: f64 },
}

impl ProjectionError {
    /// Degenerate but still worth rendering (empty series, valid summary).
    pub fn is_displayable(&self) -> bool {
        matches!(self, Self::InvertedHorizon { .. })
    }
}
