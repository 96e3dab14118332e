//! Error types for clt-sim.
//!
//! Every operation validates its parameters before computing and returns
//! `Result<T, SimError>` instead of panicking. An error is fatal to the
//! current run only.

use thiserror::Error;

/// Result type alias for clt-sim operations.
pub type SimResult<T> = Result<T, SimError>;

/// Unified error type for all clt-sim operations.
#[derive(Debug, Error)]
pub enum SimError {
    // ===== Domain Errors =====
    /// Out-of-range or non-positive distribution/sample parameter.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Empty population or otherwise degenerate input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability detected (NaN or Inf).
    #[error("non-finite value detected at {location}")]
    NonFiniteValue {
        /// Location where the non-finite value was detected.
        location: String,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SimError {
    /// Create an invalid-parameter error.
    #[must_use]
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check if this error was caused by the caller's parameters or data,
    /// as opposed to configuration loading or I/O.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::InvalidInput(_)
        )
    }
}
