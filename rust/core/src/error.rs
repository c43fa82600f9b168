use thiserror::Error;

/// Errors raised when a floor plan violates its producer contract
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid scale: {0} (must be a positive, finite unit-to-meter factor)")]
    InvalidScale(f64),
}
