//! Synthetic record generation.
//!
//! Produces random-but-plausible input records for fixtures and demos.
//! Heights and weights are drawn as whole numbers from the accepted
//! domains, genders uniformly from the two accepted values.

use fs2::FileExt;
use rand::Rng;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::validate::{MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_HEIGHT_CM, MIN_WEIGHT_KG};
use crate::{Error, Gender, Record, Result};

/// Generate `count` random records
pub fn generate_records(count: usize) -> Vec<Record> {
    let mut rng = rand::rng();
    (0..count).map(|_| random_record(&mut rng)).collect()
}

fn random_record<R: Rng + ?Sized>(rng: &mut R) -> Record {
    let gender = if rng.random_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };

    Record {
        gender: Value::from(gender.to_string()),
        height_cm: Value::from(rng.random_range(MIN_HEIGHT_CM as i64..MAX_HEIGHT_CM as i64)),
        weight_kg: Value::from(rng.random_range(MIN_WEIGHT_KG as i64..MAX_WEIGHT_KG as i64)),
    }
}

/// Write records to the data file location
///
/// Atomically replaces the target by writing to a temp file in the same
/// directory, syncing, and renaming over the original.
pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::Other, "data path missing parent")
    })?)?;

    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let contents = serde_json::to_string_pretty(records)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::info!("Wrote {} synthetic records to {:?}", records.len(), path);
    Ok(())
}
