use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use crate::error::{CompressionError, Result};
use std::path::PathBuf;

/// One user-triggered batch: an ordered list of input files sharing a
/// single quality setting. The quality is fixed for the whole run.
#[derive(Debug, Clone)]
pub struct CompressionRequest {
    pub paths: Vec<PathBuf>,
    pub quality: u8,
}

impl CompressionRequest {
    pub fn new(paths: Vec<PathBuf>, quality: u8) -> Result<Self> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(CompressionError::InvalidQuality(quality));
        }
        Ok(Self { paths, quality })
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Outcome of one successfully compressed input.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionResult {
    pub file_name: String,
    pub original_kb: f64,
    pub compressed_kb: f64,
    /// Percentage reduction in file size; negative when the output grew.
    pub ratio: f64,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Everything one batch accumulated: results for the inputs that
/// succeeded, failures for the ones that did not. Handed to the shell
/// exactly once, on completion. Totals are derived, never stored.
#[derive(Debug, Clone, Default)]
pub struct CompressionOutcome {
    pub results: Vec<CompressionResult>,
    pub failures: Vec<BatchFailure>,
}

impl CompressionOutcome {
    pub fn success_count(&self) -> usize {
        self.results.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn total_original_kb(&self) -> f64 {
        self.results.iter().map(|r| r.original_kb).sum()
    }

    pub fn total_compressed_kb(&self) -> f64 {
        self.results.iter().map(|r| r.compressed_kb).sum()
    }

    pub fn overall_ratio(&self) -> f64 {
        compression_ratio(self.total_original_kb(), self.total_compressed_kb())
    }
}

pub fn bytes_to_kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Percentage reduction in size (positive means reduction, negative means
/// increase). A non-positive original yields 0.0; the compressor rejects
/// zero-byte inputs before this is ever reached.
pub fn compression_ratio(original_kb: f64, compressed_kb: f64) -> f64 {
    if original_kb <= 0.0 {
        return 0.0;
    }
    (original_kb - compressed_kb) / original_kb * 100.0
}
