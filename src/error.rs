use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("Decode error for {0:?}: {1}")]
    Decode(PathBuf, String),

    #[error("Encode error for {0:?}: {1}")]
    Encode(PathBuf, String),

    #[error("Invalid input {0:?}: original file is empty")]
    InvalidInput(PathBuf),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("No input files to compress")]
    EmptyBatch,

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
