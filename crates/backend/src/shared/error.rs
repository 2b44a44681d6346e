use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal dataset load failures. The dashboard render aborts with a visible
/// message; partial data is never substituted.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse dataset file {path}: {source}")]
    Parse { path: PathBuf, source: csv::Error },

    #[error("invalid record at line {line} of {path}: {reason}")]
    InvalidRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("cannot write dataset file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot serialize dataset file {path}: {source}")]
    Serialize { path: PathBuf, source: csv::Error },
}

/// Errors surfaced across the presentation boundary.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    /// Defensive check; unreachable through the date-picker controls
    #[error("start day {from} is after end day {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    /// Recoverable: the view renders a "no data" notice and skips the charts
    #[error("no data available for the selected filters")]
    EmptySelection,
}
