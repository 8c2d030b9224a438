//! Error types for fontscan-recog

use thiserror::Error;

/// Errors raised by a labeling sink
#[derive(Debug, Error)]
pub enum SinkError {
    /// The operator abandoned labeling
    #[error("labeling cancelled by operator")]
    Cancelled,

    /// A label that cannot be used as a file name
    #[error("invalid label {0:?}")]
    InvalidLabel(String),

    /// Persisting the glyph failed
    #[error("failed to persist glyph: {0}")]
    Persist(String),

    /// I/O error while prompting or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during glyph extraction
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] fontscan_core::Error),

    /// Binarization error
    #[error("color error: {0}")]
    Color(#[from] fontscan_color::ColorError),

    /// Region discovery error
    #[error("region error: {0}")]
    Region(#[from] fontscan_region::RegionError),

    /// An empty region reached the normalizer
    #[error("invalid input: cannot normalize an empty region")]
    EmptyRegion,

    /// The labeling sink failed
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
