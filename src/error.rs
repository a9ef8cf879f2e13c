//! Error types for the startup simulation engine
//!
//! The turn engine itself is total: operations on a session never fail, they
//! silently do nothing when their inputs don't match the current state. Errors
//! only surface at the edges where data enters the crate (content and config
//! loading, founder creation, condition parsing).

use thiserror::Error;

/// Main error type for the startup simulation engine
#[derive(Error, Debug)]
pub enum StartupSimError {
    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    #[error("Invalid founder: {0}")]
    InvalidFounder(String),

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(#[from] serde_json::Error),
}

#[cfg(feature = "python")]
impl From<StartupSimError> for pyo3::PyErr {
    fn from(err: StartupSimError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyRuntimeError, PyValueError};

        match err {
            StartupSimError::InvalidCondition(msg) => {
                PyValueError::new_err(format!("Invalid condition: {}", msg))
            }
            StartupSimError::InvalidFounder(msg) => {
                PyValueError::new_err(format!("Invalid founder: {}", msg))
            }
            StartupSimError::InvalidContent(msg) => {
                PyValueError::new_err(format!("Invalid content: {}", msg))
            }
            StartupSimError::DeserializationError(e) => {
                PyRuntimeError::new_err(format!("Deserialization error: {}", e))
            }
        }
    }
}

/// Result type alias for the startup simulation engine
pub type Result<T> = std::result::Result<T, StartupSimError>;
