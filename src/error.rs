//! Error types for the enemy generation engine

use crate::config::MagicType;
use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the enemy generation engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnemyGenError {
    #[error("Invalid notation: {0}")]
    InvalidNotation(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("No {0} spells left to select")]
    EmptyPool(MagicType),

    #[error("Missing stat: {0}")]
    MissingStat(String),

    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<EnemyGenError> for PyErr {
    fn from(err: EnemyGenError) -> PyErr {
        match err {
            EnemyGenError::InvalidNotation(msg) => {
                PyValueError::new_err(format!("Invalid notation: {}", msg))
            }
            EnemyGenError::OutOfRange(msg) => {
                PyValueError::new_err(format!("Out of range: {}", msg))
            }
            EnemyGenError::EmptyPool(magic_type) => {
                PyRuntimeError::new_err(format!("No {} spells left to select", magic_type))
            }
            EnemyGenError::MissingStat(name) => {
                PyKeyError::new_err(format!("Missing stat: {}", name))
            }
            EnemyGenError::UnknownWeapon(name) => {
                PyKeyError::new_err(format!("Unknown weapon: {}", name))
            }
            EnemyGenError::DeserializationError(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
        }
    }
}

/// Result type alias for the enemy generation engine
pub type Result<T> = std::result::Result<T, EnemyGenError>;
