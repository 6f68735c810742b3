//! Input record loading.
//!
//! The data file is a JSON array of record mappings. A missing file is a
//! diagnosable but non-fatal condition; malformed content is a hard error
//! so that a truncated or corrupted file is never mistaken for an empty
//! batch.

use fs2::FileExt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{Record, Result};

/// Load all records from the data file
///
/// Returns an empty set if the file does not exist. A shared lock is held
/// while reading so a concurrent generator run cannot interleave.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        tracing::error!("data file not found at {:?}", path);
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    let read_result = reader.read_to_string(&mut contents);
    file.unlock()?;
    read_result?;

    let records: Vec<Record> = serde_json::from_str(&contents)?;

    tracing::info!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_path = temp_dir.path().join("records.json");

        let json = r#"[
            {"Gender": "Male", "HeightCm": 152, "WeightKg": 55},
            {"Gender": "Female", "HeightCm": 170, "WeightKg": 65}
        ]"#;
        std::fs::write(&data_path, json).unwrap();

        let records = load_records(&data_path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].gender, serde_json::json!("Male"));
        assert_eq!(records[1].height_cm, serde_json::json!(170));
    }

    #[test]
    fn test_missing_file_yields_empty_batch() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_path = temp_dir.path().join("nonexistent.json");

        let records = load_records(&data_path).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_path = temp_dir.path().join("bad.json");

        std::fs::write(&data_path, "{ not an array }").unwrap();

        assert!(load_records(&data_path).is_err());
    }

    #[test]
    fn test_records_with_unexpected_field_types_still_load() {
        // Type problems belong to the validator, not the loader.
        let temp_dir = tempfile::tempdir().unwrap();
        let data_path = temp_dir.path().join("records.json");

        let json = r#"[{"Gender": 12, "HeightCm": "tall", "WeightKg": null}]"#;
        std::fs::write(&data_path, json).unwrap();

        let records = load_records(&data_path).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_empty_array_loads() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_path = temp_dir.path().join("records.json");
        std::fs::write(&data_path, "[]").unwrap();

        let records = load_records(&data_path).unwrap();
        assert!(records.is_empty());
    }
}
