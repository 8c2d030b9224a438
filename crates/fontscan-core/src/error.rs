//! Error types for fontscan-core
//!
//! Provides a unified error type for the shared data model. Each variant
//! captures enough context for diagnostics without exposing internal
//! implementation details.

use thiserror::Error;

/// fontscan-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image or grid dimensions
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Buffer or grid size does not match the declared dimensions
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Coordinate outside the grid
    #[error("coordinate out of bounds: ({x}, {y}) in {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A region with no points was handed to an operation that needs one
    #[error("empty region: no points to process")]
    EmptyRegion,

    /// Invalid input value
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for fontscan-core operations
pub type Result<T> = std::result::Result<T, Error>;
