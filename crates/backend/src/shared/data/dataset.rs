use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use contracts::domain::a001_sales_order::SalesOrderRecord;
use once_cell::sync::OnceCell;

use super::generator;
use crate::shared::config::DatasetConfig;
use crate::shared::error::DataLoadError;

/// Owns the loaded order dataset for one dashboard session.
///
/// The expensive path (file probing or generation) runs at most once per
/// provider; there is no file-change detection, so a refresh means
/// constructing a new provider. Independent sessions construct independent
/// providers and share nothing.
pub struct DatasetProvider {
    config: DatasetConfig,
    cache: OnceCell<Arc<Vec<SalesOrderRecord>>>,
}

impl DatasetProvider {
    pub fn new(config: DatasetConfig) -> Self {
        Self {
            config,
            cache: OnceCell::new(),
        }
    }

    /// Returns the order dataset, loading or generating it on first call.
    pub fn get_dataset(&self) -> Result<Arc<Vec<SalesOrderRecord>>, DataLoadError> {
        self.cache
            .get_or_try_init(|| self.load_or_generate().map(Arc::new))
            .cloned()
    }

    fn load_or_generate(&self) -> Result<Vec<SalesOrderRecord>, DataLoadError> {
        for path in self.config.candidate_paths() {
            if path.exists() {
                tracing::info!("Loading dataset from {}", path.display());
                return read_dataset(&path);
            }
        }

        let target = self.config.target_path();
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| DataLoadError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        tracing::info!(
            "No dataset file found, generating {} rows at {}",
            generator::SYNTHETIC_ROWS,
            target.display()
        );
        let records = generator::synthesize_orders(generator::SYNTHETIC_ROWS);
        match write_dataset_if_absent(&target, &records) {
            Ok(()) => Ok(records),
            // Another session won the create race; its file is the dataset
            Err(DataLoadError::Write { ref source, .. })
                if source.kind() == ErrorKind::AlreadyExists =>
            {
                tracing::info!(
                    "Dataset appeared concurrently, reading {}",
                    target.display()
                );
                read_dataset(&target)
            }
            Err(e) => Err(e),
        }
    }
}

/// Parses and validates a dataset file. Any malformed or invalid row fails
/// the whole load; partial data is never returned.
pub fn read_dataset(path: &Path) -> Result<Vec<SalesOrderRecord>, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| DataLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<SalesOrderRecord>().enumerate() {
        // Header occupies line 1, first record line 2
        let line = index as u64 + 2;
        let record = result.map_err(|source| DataLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        record
            .validate()
            .map_err(|reason| DataLoadError::InvalidRecord {
                path: path.to_path_buf(),
                line,
                reason,
            })?;
        records.push(record);
    }

    tracing::info!("Loaded {} dataset rows from {}", records.len(), path.display());
    Ok(records)
}

/// Writes the dataset with a create-if-absent open, so concurrent first-time
/// loads across sessions cannot clobber each other's file.
fn write_dataset_if_absent(
    path: &Path,
    records: &[SalesOrderRecord],
) -> Result<(), DataLoadError> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| DataLoadError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer
            .serialize(record)
            .map_err(|source| DataLoadError::Serialize {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush().map_err(|source| DataLoadError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Wrote {} dataset rows to {}", records.len(), path.display());
    Ok(())
}
