use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShamirError {
    #[error("Secret must be less than the field prime")]
    InvalidSecret,

    #[error("Invalid threshold {0}: must be at least 2 and less than the field prime")]
    InvalidThreshold(u64),

    #[error("Cannot issue {requested} more shares after {issued}: x-coordinates would leave the field")]
    ShareDomainExceeded { issued: u64, requested: u64 },

    #[error("Share with x = {x} has a coordinate outside the field")]
    InvalidShareValue { x: u64 },

    #[error("Duplicate share x-coordinate {0}")]
    DuplicatePoint(u64),

    #[error("Evaluation point {0} is outside the field")]
    InvalidEvaluationPoint(u64),

    #[error("Zero has no multiplicative inverse")]
    NonInvertible,
}

pub type Result<T> = std::result::Result<T, ShamirError>;
