//! Error types for bandcrop-detect

use thiserror::Error;

/// Errors that can occur during block detection
#[derive(Debug, Error)]
pub enum DetectError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bandcrop_core::Error),

    /// Binarization error
    #[error("filter error: {0}")]
    Filter(#[from] bandcrop_filter::FilterError),

    /// Component location error
    #[error("region error: {0}")]
    Region(#[from] bandcrop_region::RegionError),

    /// The frame could not be decoded
    #[error("decode error: {0}")]
    Decode(#[from] bandcrop_io::IoError),

    /// Invalid detection option
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for detection operations
pub type DetectResult<T> = Result<T, DetectError>;
