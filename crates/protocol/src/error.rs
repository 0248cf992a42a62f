use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractionError>;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid extraction record {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}
