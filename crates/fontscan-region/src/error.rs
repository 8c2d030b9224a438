//! Error types for fontscan-region

use thiserror::Error;

/// Errors that can occur during region discovery
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] fontscan_core::Error),

    /// Seed outside the grid
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: u32, y: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
