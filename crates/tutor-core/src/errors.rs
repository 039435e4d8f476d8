//! Error types for tutor-core
//!
//! Draws themselves never fail for valid input. Everything here is either a
//! rejected argument (`try_get`, `get_as`), a failure to read OS entropy, or
//! a configuration problem.

use thiserror::Error;

/// Core error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TutorError {
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },

    #[error("Bound {value} is not representable as {target}")]
    BoundOutOfRange { value: String, target: &'static str },

    #[error("Entropy source unavailable: {0}")]
    Entropy(String),

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TutorError {
    pub fn invalid_range<T: core::fmt::Display>(min: T, max: T) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn bound_out_of_range<V: core::fmt::Display>(value: V, target: &'static str) -> Self {
        Self::BoundOutOfRange {
            value: value.to_string(),
            target,
        }
    }
}

pub type Result<T> = core::result::Result<T, TutorError>;
