use crate::gradient::VariableId;
use thiserror::Error;

/// Failures raised by the differentiation engine.
///
/// All of these indicate misuse of a contract rather than an environmental condition;
/// nothing here is retryable.
#[derive(Error, Debug)]
pub enum GradientError {
    /// A derivative was requested for a variable the bundle does not track.
    #[error("variable {0} is not tracked by this gradient")]
    UnknownVariable(VariableId),

    /// A variable sequence is not strictly increasing.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("`vars` and `dual` must have the same length: {vars} != {dual}")]
    LengthMismatch { vars: usize, dual: usize },

    #[error("variable {0} appears more than once")]
    DuplicateVariable(VariableId),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GradientError>;
