use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("no dataset sizes configured")]
    EmptySizes,
    #[error("value range 0..{upper} is empty")]
    EmptyValueRange { upper: i32 },
    #[error("set difference needs two datasets, only {found} configured")]
    NotEnoughDatasets { found: usize },
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}
