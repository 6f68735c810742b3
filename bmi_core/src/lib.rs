#![forbid(unsafe_code)]

//! Core domain model and business logic for the bmiscan system.
//!
//! This crate provides:
//! - Domain types (records, categories, health risks, reports)
//! - Record validation
//! - BMI computation and classification
//! - Batch execution and aggregation
//! - Input loading, synthetic data generation and CSV export

pub mod types;
pub mod error;
pub mod validate;
pub mod classify;
pub mod bmi;
pub mod batch;
pub mod loader;
pub mod generator;
pub mod report;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{ArithmeticError, ClassificationError, Error, Result, ValidationError};
pub use types::*;
pub use validate::{is_valid_gender, is_valid_height, is_valid_weight, validate_record};
pub use classify::{classification_bands, classify};
pub use bmi::{compute_bmi, height_cm_to_m, round_to_one_significant};
pub use batch::{count_overweight, run_batch};
pub use loader::load_records;
pub use generator::{generate_records, write_records};
pub use report::write_csv_report;
pub use config::Config;
