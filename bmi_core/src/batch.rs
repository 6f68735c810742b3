//! Batch execution over a sequence of input records.
//!
//! Records are processed strictly sequentially and independently. A record
//! that fails validation, computation or classification is logged and
//! dropped; it never aborts the run and is never retried.

use chrono::Utc;
use uuid::Uuid;

use crate::{BatchOutcome, BatchSummary, BmiReport, Record};

/// Classify every record in the batch and aggregate the results
///
/// Each record is visited exactly once. The summary carries the count of
/// records whose category is exactly `OverWeight` alongside the
/// classified/skipped totals.
pub fn run_batch(records: &[Record]) -> BatchOutcome {
    let run_id = Uuid::new_v4();
    let mut reports = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    tracing::info!("Starting batch run {} over {} records", run_id, records.len());

    for (index, record) in records.iter().enumerate() {
        match BmiReport::from_record(record) {
            Ok(report) => {
                tracing::info!(
                    gender = %report.gender,
                    bmi = report.bmi_value,
                    category = %report.category,
                    risk = %report.health_risk,
                    "classified record {}",
                    index
                );
                reports.push(report);
            }
            Err(e) => {
                tracing::warn!("Could not process record {} ({:?}): {}", index, record, e);
                skipped += 1;
            }
        }
    }

    let overweight_count = count_overweight(&reports);

    let summary = BatchSummary {
        run_id,
        run_at: Utc::now(),
        total_records: records.len(),
        classified: reports.len(),
        skipped,
        overweight_count,
    };

    tracing::info!(
        "Batch run {} complete: {} classified, {} skipped, {} overweight",
        run_id,
        summary.classified,
        summary.skipped,
        summary.overweight_count
    );

    BatchOutcome { summary, reports }
}

/// Count the reports classified as OverWeight
pub fn count_overweight(reports: &[BmiReport]) -> usize {
    reports.iter().filter(|r| r.is_overweight()).count()
}
