use std::path::PathBuf;

use thiserror::Error;

/// Errors loading or validating a Portfolio Document.
#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed portfolio JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
