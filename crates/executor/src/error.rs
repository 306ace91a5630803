use thiserror::Error;

use common::error::Error as CycleBasisError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] CycleBasisError),

    #[error("Cycle basis computation exceeded the {0} ms timeout.")]
    Timeout(u64),

    #[error("Solver task failed: {0}")]
    TaskFailed(String),
}
