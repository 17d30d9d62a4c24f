use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for dataset loading, sampling, and saving failures.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("column '{0}' not found in dataset")]
    ColumnNotFound(String),
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
