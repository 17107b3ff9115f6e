//! JSON persistence for partitioners and models

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use fts_spi::{FtsError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Write `value` to `path` as JSON, replacing any existing file
pub fn save<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| FtsError::Persistence(format!("failed to create {}: {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)
        .map_err(|e| FtsError::Persistence(format!("failed to encode {}: {e}", path.display())))?;
    writer
        .flush()
        .map_err(|e| FtsError::Persistence(format!("failed to write {}: {e}", path.display())))
}

/// Read a value previously written with [`save`]
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| FtsError::Persistence(format!("failed to open {}: {e}", path.display())))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| FtsError::Persistence(format!("failed to decode {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::partitioner::Partitioner;
    use crate::partitioning::GridPartitioning;
    use crate::song::ConventionalFts;
    use fts_spi::{Forecaster, PartitionerConfig};

    fn series() -> Vec<f64> {
        (0..60).map(|i| 20.0 + (i as f64 * 0.4).cos() * 5.0).collect()
    }

    #[test]
    fn test_partitioner_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partitioner.json");
        let partitioner = Partitioner::new(&GridPartitioning, &series(), PartitionerConfig::with_partitions(7)).unwrap();

        save(&partitioner, &path).unwrap();
        let loaded: Partitioner = load(&path).unwrap();

        assert_eq!(loaded.names(), partitioner.names());
        assert_eq!(loaded.universe(), partitioner.universe());
        // The spatial index is rebuilt on demand after loading
        assert_eq!(loaded.search(21.0, 2), partitioner.search(21.0, 2));
    }

    #[test]
    fn test_model_roundtrip_forecasts_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let data = series();
        let partitioner = Partitioner::new(&GridPartitioning, &data, PartitionerConfig::with_partitions(7)).unwrap();
        let mut model = ConventionalFts::new(Arc::new(partitioner));
        model.train(&data).unwrap();

        save(&model, &path).unwrap();
        let loaded: ConventionalFts = load(&path).unwrap();

        assert!(loaded.is_trained());
        assert_eq!(loaded.forecast(&data[40..]).unwrap(), model.forecast(&data[40..]).unwrap());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Partitioner> = load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(FtsError::Persistence(_))));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<ConventionalFts> = load(&path);
        assert!(matches!(result, Err(FtsError::Persistence(_))));
    }

    #[test]
    fn test_inconsistent_model_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.json");
        let data = series();
        let partitioner = Partitioner::new(&GridPartitioning, &data, PartitionerConfig::with_partitions(5)).unwrap();
        let mut model = ConventionalFts::new(Arc::new(partitioner));
        model.train(&data).unwrap();

        let mut json = serde_json::to_value(&model).unwrap();
        json["relation"]["cells"] = serde_json::json!([0.0]);
        std::fs::write(&path, json.to_string()).unwrap();

        let result: Result<ConventionalFts> = load(&path);
        match result {
            Err(FtsError::Persistence(message)) => assert!(message.contains("Dimension mismatch")),
            other => panic!("Expected a persistence error, got {other:?}"),
        }

        json["relation"]["cells"] = serde_json::json!([]);
        json["relation"]["dimension"] = serde_json::json!(0);
        std::fs::write(&path, json.to_string()).unwrap();
        assert!(matches!(load::<ConventionalFts>(&path), Err(FtsError::Persistence(_))));

        json["relation"] = serde_json::Value::Null;
        json["partitioner"]["sets"] = serde_json::json!([]);
        std::fs::write(&path, json.to_string()).unwrap();
        assert!(matches!(load::<ConventionalFts>(&path), Err(FtsError::Persistence(_))));
    }
}
