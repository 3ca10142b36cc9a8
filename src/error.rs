// error.rs - Errors reported at the engine and driver boundaries

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

/// Every variant is recoverable: the rejected call leaves all state unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("step interval {0}s must be a finite value between 0 and 0.1 seconds")]
    InvalidInterval(f32),

    #[error("grid dimensions {width}x{height} must both be non-zero")]
    InvalidDimensions { width: usize, height: usize },

    #[error("no pattern named {0:?}")]
    UnknownPattern(String),

    #[error("fill density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),
}
