//! CSV export of classified batch results.
//!
//! Appends one row per report with header management, so repeated runs can
//! accumulate into a single results file.

use std::fs::OpenOptions;
use std::path::Path;

use crate::{BmiReport, Result};

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    gender: String,
    height_cm: f64,
    weight_kg: f64,
    bmi_value: f64,
    category: String,
    health_risk: String,
}

impl From<&BmiReport> for CsvRow {
    fn from(report: &BmiReport) -> Self {
        CsvRow {
            gender: report.gender.clone(),
            height_cm: report.height_cm,
            weight_kg: report.weight_kg,
            bmi_value: report.bmi_value,
            category: report.category.to_string(),
            health_risk: report.health_risk.to_string(),
        }
    }
}

/// Append reports to a CSV file, creating it with headers if needed
///
/// The file is fsynced before returning. Returns the number of rows
/// written.
pub fn write_csv_report(path: &Path, reports: &[BmiReport]) -> Result<usize> {
    if reports.is_empty() {
        tracing::info!("No reports to export");
        return Ok(0);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    // Headers are only wanted on a fresh file.
    let needs_headers = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);

    for report in reports {
        writer.serialize(CsvRow::from(report))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Wrote {} report rows to {:?}", reports.len(), path);
    Ok(reports.len())
}
