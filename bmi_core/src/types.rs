//! Core domain types for the BMI screening system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Raw input records and their validated form
//! - Weight categories and paired health risks
//! - Per-record BMI reports
//! - Batch run summaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ValidationError;

// ============================================================================
// Input Records
// ============================================================================

/// A raw input record as it appears in the data file.
///
/// Field values are kept as loose JSON values so that type problems (a
/// numeric gender, a string height) reach the validator as structured
/// errors instead of failing wholesale in the deserializer. A missing key
/// deserializes to JSON null and is rejected the same way.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Record {
    #[serde(rename = "Gender", default)]
    pub gender: Value,

    #[serde(rename = "HeightCm", default)]
    pub height_cm: Value,

    #[serde(rename = "WeightKg", default)]
    pub weight_kg: Value,
}

/// Gender values accepted by the validator
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = ValidationError;

    /// Case-insensitive parse; anything other than male/female is rejected
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ValidationError::UnknownGender {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// A record that has passed all three domain checks.
///
/// The gender string keeps the spelling it had in the input; the numeric
/// fields are within the accepted domains.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidRecord {
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
}

// ============================================================================
// Categories and Health Risks
// ============================================================================

/// Weight category assigned to a classified record
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    UnderWeight,
    NormalWeight,
    OverWeight,
    ModeratelyObese,
    SeverelyObese,
    VerySeverelyObese,
    /// Fallback when no classification band matches
    #[serde(rename = "NOTA")]
    Nota,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::UnderWeight => "UnderWeight",
            Category::NormalWeight => "NormalWeight",
            Category::OverWeight => "OverWeight",
            Category::ModeratelyObese => "ModeratelyObese",
            Category::SeverelyObese => "SeverelyObese",
            Category::VerySeverelyObese => "VerySeverelyObese",
            Category::Nota => "NOTA",
        };
        write!(f, "{}", label)
    }
}

/// Health-risk tier paired one-to-one with a category
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthRisk {
    Malnutrition,
    LowRisk,
    EnhancedRisk,
    MediumRisk,
    HighRisk,
    VeryHighRisk,
    /// Fallback when no classification band matches
    #[serde(rename = "NOTA")]
    Nota,
}

impl fmt::Display for HealthRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthRisk::Malnutrition => "Malnutrition",
            HealthRisk::LowRisk => "LowRisk",
            HealthRisk::EnhancedRisk => "EnhancedRisk",
            HealthRisk::MediumRisk => "MediumRisk",
            HealthRisk::HighRisk => "HighRisk",
            HealthRisk::VeryHighRisk => "VeryHighRisk",
            HealthRisk::Nota => "NOTA",
        };
        write!(f, "{}", label)
    }
}

// ============================================================================
// BMI Reports
// ============================================================================

/// The classified outcome for a single valid record.
///
/// Immutable once constructed. Serializes to the flat mapping used as the
/// batch output artifact; `height_m` is derived and excluded from it.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct BmiReport {
    #[serde(rename = "Gender")]
    pub gender: String,

    #[serde(rename = "HeightCm")]
    pub height_cm: f64,

    #[serde(rename = "WeightKg")]
    pub weight_kg: f64,

    #[serde(skip)]
    pub height_m: f64,

    #[serde(rename = "bmi_value")]
    pub bmi_value: f64,

    #[serde(rename = "Category")]
    pub category: Category,

    #[serde(rename = "HealthRisk")]
    pub health_risk: HealthRisk,
}

impl BmiReport {
    /// Whether this record counts toward the batch overweight aggregate
    pub fn is_overweight(&self) -> bool {
        self.category == Category::OverWeight
    }
}

// ============================================================================
// Batch Summaries
// ============================================================================

/// Aggregate outcome of a batch run
#[derive(Clone, Debug, Serialize)]
pub struct BatchSummary {
    pub run_id: Uuid,
    pub run_at: DateTime<Utc>,
    pub total_records: usize,
    pub classified: usize,
    pub skipped: usize,
    pub overweight_count: usize,
}

/// Summary plus the per-record reports that produced it
#[derive(Clone, Debug)]
pub struct BatchOutcome {
    pub summary: BatchSummary,
    pub reports: Vec<BmiReport>,
}
