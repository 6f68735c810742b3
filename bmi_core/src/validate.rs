//! Record validation rules.
//!
//! Three independent domain checks gate BMI construction: gender must be a
//! known value, height and weight must be numeric and within their accepted
//! ranges. A record is accepted only when all three checks hold.

use serde_json::Value;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::{Gender, Record, Result, ValidRecord};

pub const MIN_HEIGHT_CM: f64 = 40.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;
pub const MIN_WEIGHT_KG: f64 = 20.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;

/// Check whether a gender value is acceptable
///
/// A non-string value is a type error, not merely an unacceptable gender.
pub fn is_valid_gender(value: &Value) -> Result<bool> {
    let s = gender_str(value)?;
    Ok(Gender::from_str(s).is_ok())
}

/// Check whether a height value lies in the accepted range (cm)
pub fn is_valid_height(value: &Value) -> Result<bool> {
    let height = numeric_field(value, "height")?;
    Ok((MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height))
}

/// Check whether a weight value lies in the accepted range (kg)
pub fn is_valid_weight(value: &Value) -> Result<bool> {
    let weight = numeric_field(value, "weight")?;
    Ok((MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight))
}

/// Validate a raw record, producing its typed form
///
/// Acceptance requires the gender, height and weight checks to all pass;
/// the first failing check names the offending field in the error.
pub fn validate_record(record: &Record) -> Result<ValidRecord> {
    let gender = gender_str(&record.gender)?;
    let height_cm = numeric_field(&record.height_cm, "height")?;
    let weight_kg = numeric_field(&record.weight_kg, "weight")?;

    Gender::from_str(gender)?;
    ensure_in_range("height", height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)?;
    ensure_in_range("weight", weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)?;

    Ok(ValidRecord {
        gender: gender.to_string(),
        height_cm,
        weight_kg,
    })
}

fn gender_str(value: &Value) -> std::result::Result<&str, ValidationError> {
    value.as_str().ok_or(ValidationError::NonStringGender)
}

fn numeric_field(
    value: &Value,
    field: &'static str,
) -> std::result::Result<f64, ValidationError> {
    value
        .as_f64()
        .ok_or(ValidationError::NonNumericInput { field })
}

fn ensure_in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> std::result::Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    fn record(gender: Value, height: Value, weight: Value) -> Record {
        Record {
            gender,
            height_cm: height,
            weight_kg: weight,
        }
    }

    #[test]
    fn test_accepted_genders_case_insensitive() {
        assert!(is_valid_gender(&json!("Male")).unwrap());
        assert!(is_valid_gender(&json!("male")).unwrap());
        assert!(is_valid_gender(&json!("FEMALE")).unwrap());
        assert!(!is_valid_gender(&json!("other")).unwrap());
        assert!(!is_valid_gender(&json!("")).unwrap());
    }

    #[test]
    fn test_non_string_gender_is_a_type_error() {
        let err = is_valid_gender(&json!(42)).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NonStringGender)
        ));

        let err = is_valid_gender(&Value::Null).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NonStringGender)
        ));
    }

    #[test]
    fn test_height_boundaries_inclusive() {
        assert!(is_valid_height(&json!(40)).unwrap());
        assert!(is_valid_height(&json!(300)).unwrap());
        assert!(is_valid_height(&json!(152.5)).unwrap());
        assert!(!is_valid_height(&json!(39.9)).unwrap());
        assert!(!is_valid_height(&json!(300.1)).unwrap());
    }

    #[test]
    fn test_weight_boundaries_inclusive() {
        assert!(is_valid_weight(&json!(20)).unwrap());
        assert!(is_valid_weight(&json!(200)).unwrap());
        assert!(!is_valid_weight(&json!(19.9)).unwrap());
        assert!(!is_valid_weight(&json!(200.5)).unwrap());
    }

    #[test]
    fn test_non_numeric_measurement_is_a_type_error() {
        let err = is_valid_height(&json!("tall")).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NonNumericInput { field: "height" })
        ));

        let err = is_valid_weight(&Value::Null).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NonNumericInput { field: "weight" })
        ));
    }

    #[test]
    fn test_validate_record_keeps_input_spelling() {
        let valid = validate_record(&record(json!("male"), json!(152), json!(55))).unwrap();
        assert_eq!(valid.gender, "male");
        assert_eq!(valid.height_cm, 152.0);
        assert_eq!(valid.weight_kg, 55.0);
    }

    #[test]
    fn test_invalid_gender_rejects_even_with_valid_measurements() {
        // Valid height/weight must not rescue a record with a bad gender.
        let err = validate_record(&record(json!("other"), json!(170), json!(70))).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::UnknownGender { .. })
        ));
    }

    #[test]
    fn test_out_of_range_measurements_reject() {
        let err = validate_record(&record(json!("Female"), json!(20), json!(70))).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::OutOfRange { field: "height", .. })
        ));

        let err = validate_record(&record(json!("Female"), json!(170), json!(500))).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::OutOfRange { field: "weight", .. })
        ));
    }

    #[test]
    fn test_missing_fields_reject() {
        let raw: Record = serde_json::from_str("{}").unwrap();
        assert!(validate_record(&raw).is_err());
    }
}
