//! Error types for the fontscan tool

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning a directory
#[derive(Debug, Error)]
pub enum ScanError {
    /// Bad command line or unusable configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error outside any single image (listing the directory etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Processing one image failed
    #[error("{}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: ImageFailure,
    },
}

/// Why a single image could not be processed
#[derive(Debug, Error)]
pub enum ImageFailure {
    /// Decoding the file failed
    #[error(transparent)]
    Decode(#[from] fontscan_io::IoError),

    /// Binarization, discovery or labeling failed
    #[error(transparent)]
    Extract(#[from] fontscan_recog::RecogError),
}

impl ScanError {
    pub(crate) fn image(path: impl Into<PathBuf>, source: impl Into<ImageFailure>) -> Self {
        Self::Image {
            path: path.into(),
            source: source.into(),
        }
    }

    /// True if the operator cancelled labeling
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Image {
                source: ImageFailure::Extract(fontscan_recog::RecogError::Sink(
                    fontscan_recog::SinkError::Cancelled
                )),
                ..
            }
        )
    }
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;
