//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// An ASCII fixture could not be parsed
    #[error("bad fixture at row {row}: {message}")]
    Fixture { row: usize, message: String },

    /// A core constructor rejected the fixture
    #[error("core error: {0}")]
    Core(#[from] fontscan_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
