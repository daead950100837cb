// Library error type (data loading)

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read usage data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid usage data JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
