use thiserror::Error;

/// Result type for scene conversion
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during scene conversion
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid floor plan: {0}")]
    Plan(#[from] planlift_core::PlanError),
}
