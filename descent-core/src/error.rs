use crate::params::Params;
use thiserror::Error;

/// Error type shared by every crate of the descent workspace.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum DescentError {
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Empty input during operation {operation}")]
    EmptyInput { operation: String },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Non-finite parameters {params:?} after step {step}")]
    NonFiniteParams { step: usize, params: Params },

    #[error("Incompatible optimizer state: {0}")]
    IncompatibleState(String),
}

impl DescentError {
    /// Shortcut used by the validation code paths.
    pub(crate) fn config(message: impl Into<String>) -> Self {
        DescentError::ConfigurationError(message.into())
    }
}
