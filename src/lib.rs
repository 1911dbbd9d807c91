pub mod cli;
pub mod compress;
pub mod constants;
pub mod error;
pub mod logger;
pub mod paths;
pub mod report;
pub mod request;
pub mod runner;
pub mod select;

pub use compress::compress_single;
pub use error::{CompressionError, Result};
pub use paths::derive_output_path;
pub use request::{
    bytes_to_kb, compression_ratio, BatchFailure, CompressionOutcome, CompressionRequest,
    CompressionResult,
};
pub use runner::{progress_percent, start_run, BatchEvent, BatchHandle, BatchState};
pub use select::{expand_inputs, is_accepted_image};
