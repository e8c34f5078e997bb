//! Crate-level error type

use crate::report::ReportError;
use crate::validation::ValidationError;
use std::io;
use thiserror::Error;

/// Anything that can go wrong between raw input and a rendered result
#[derive(Debug, Error)]
pub enum BeccsError {
    /// Input rejected before the calculator ran
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The calculator produced something unusable (NaN or infinite metrics)
    #[error("An error occurred: {0}")]
    Computation(String),
    #[error(transparent)]
    Report(#[from] ReportError),
    /// Input file could not be read
    #[error("failed to read input: {0}")]
    Load(#[from] io::Error),
    /// Input file is not a valid calculation input
    #[error("failed to parse input: {0}")]
    Parse(#[from] serde_json::Error),
}

impl BeccsError {
    /// True for errors caused by the values the user entered
    pub fn is_validation(&self) -> bool {
        matches!(self, BeccsError::Validation(_))
    }
}

/// Convenience type for `Result<T, BeccsError>`.
pub type BeccsResult<T> = Result<T, BeccsError>;
