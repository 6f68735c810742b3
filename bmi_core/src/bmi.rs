//! BMI computation for validated records.
//!
//! The BMI value is kept at one *significant digit*, not one decimal place:
//! a raw ratio of 23.805 becomes 20.0, and 8.7 becomes 9.0. This matches
//! the precision the rest of the system classifies and reports against.

use crate::error::ArithmeticError;
use crate::validate::validate_record;
use crate::{classify, BmiReport, Record, Result, ValidRecord};

/// Convert a height in centimeters to meters
pub fn height_cm_to_m(height_cm: f64) -> f64 {
    height_cm / 100.0
}

/// Round a value to one significant digit
pub fn round_to_one_significant(value: f64) -> f64 {
    // Exponent formatting keeps exactly one significant digit; the result
    // always parses back.
    format!("{:.0e}", value).parse().unwrap_or(value)
}

/// Compute the BMI ratio for a height/weight pair
///
/// Zero height cannot come out of the validated domain, but it is still
/// handled as a recoverable error rather than producing an infinite ratio.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> Result<f64> {
    if height_m == 0.0 {
        return Err(ArithmeticError::DivisionByZero.into());
    }
    Ok(round_to_one_significant(weight_kg / (height_m * height_m)))
}

impl BmiReport {
    /// Validate, compute and classify a single raw record
    ///
    /// This is the only entry point for raw records: any failure surfaces
    /// as a structured error, never as a partially-built report.
    pub fn from_record(record: &Record) -> Result<Self> {
        let valid = validate_record(record)?;
        Self::from_valid(valid)
    }

    /// Build a report for an already-validated record
    pub fn from_valid(record: ValidRecord) -> Result<Self> {
        let height_m = height_cm_to_m(record.height_cm);
        let bmi_value = compute_bmi(record.weight_kg, height_m)?;
        let (category, health_risk) = classify::classify(bmi_value)?;

        Ok(BmiReport {
            gender: record.gender,
            height_cm: record.height_cm,
            weight_kg: record.weight_kg,
            height_m,
            bmi_value,
            category,
            health_risk,
        })
    }
}
