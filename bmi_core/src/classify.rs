//! Classification bands mapping BMI values to categories and health risks.
//!
//! The bands form a disjoint, ordered partition of `[0, +inf)`; anything
//! that matches no band (negative values) falls back to NOTA/NOTA.

use once_cell::sync::Lazy;

use crate::error::ClassificationError;
use crate::{Category, HealthRisk, Result};

/// A single inclusive classification band
#[derive(Clone, Copy, Debug)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
    pub category: Category,
    pub risk: HealthRisk,
}

/// Cached band table - built once and reused across all classifications
static BANDS: Lazy<Vec<Band>> = Lazy::new(build_bands);

/// Get a reference to the classification band table
///
/// Bands are evaluated top to bottom; the first match wins.
pub fn classification_bands() -> &'static [Band] {
    &BANDS
}

fn build_bands() -> Vec<Band> {
    vec![
        Band {
            lower: 0.0,
            upper: 18.4,
            category: Category::UnderWeight,
            risk: HealthRisk::Malnutrition,
        },
        Band {
            lower: 18.5,
            upper: 24.9,
            category: Category::NormalWeight,
            risk: HealthRisk::LowRisk,
        },
        Band {
            lower: 25.0,
            upper: 29.9,
            category: Category::OverWeight,
            risk: HealthRisk::EnhancedRisk,
        },
        Band {
            lower: 30.0,
            upper: 34.9,
            category: Category::ModeratelyObese,
            risk: HealthRisk::MediumRisk,
        },
        Band {
            lower: 35.0,
            upper: 39.9,
            category: Category::SeverelyObese,
            risk: HealthRisk::HighRisk,
        },
        Band {
            lower: 40.0,
            upper: f64::INFINITY,
            category: Category::VerySeverelyObese,
            risk: HealthRisk::VeryHighRisk,
        },
    ]
}

/// Map a BMI value to its category and paired health risk
///
/// The value must be a finite float. Category and risk are always assigned
/// together; an unmatched value yields the NOTA/NOTA pair rather than an
/// error.
pub fn classify(bmi_value: f64) -> Result<(Category, HealthRisk)> {
    if !bmi_value.is_finite() {
        return Err(ClassificationError::InvalidBmiType(bmi_value).into());
    }

    for band in classification_bands() {
        if band.lower <= bmi_value && bmi_value <= band.upper {
            return Ok((band.category, band.risk));
        }
    }

    tracing::debug!("BMI value {} matched no band, falling back to NOTA", bmi_value);
    Ok((Category::Nota, HealthRisk::Nota))
}
