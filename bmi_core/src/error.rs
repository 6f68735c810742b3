//! Error types for the bmi_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bmi_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record failed a domain or type check
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// BMI computation error
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// Classification error
    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Reasons a record is rejected before BMI construction.
///
/// Type failures (non-string gender, non-numeric height/weight) and domain
/// failures are distinct kinds so that callers can tell a malformed field
/// apart from a merely out-of-range one.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Gender value was not a string at all
    #[error("gender must be a string, either male or female")]
    NonStringGender,

    /// Height or weight value was not numeric
    #[error("{field} must be a numeric value")]
    NonNumericInput { field: &'static str },

    /// Gender string is not one of the accepted values
    #[error("gender {value:?} is not recognised")]
    UnknownGender { value: String },

    /// Numeric field is outside its accepted domain
    #[error("{field} {value} is outside the accepted range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Failures while computing the BMI ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// Height in meters was zero
    #[error("height in meters must not be zero")]
    DivisionByZero,
}

/// Failures while mapping a BMI value to a category.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ClassificationError {
    /// BMI value was NaN or infinite
    #[error("BMI value {0} is not a finite number")]
    InvalidBmiType(f64),
}
