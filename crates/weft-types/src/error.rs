//! Error types for the Weft simulator.
//!
//! All crates return `WeftResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Weft simulator.
#[derive(Debug, Error)]
pub enum WeftError {
    /// A configuration value is missing, out of range, or non-finite.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A computation hit a zero-length spring or a zero vector normalize.
    #[error("Numerical degeneracy: {0}")]
    NumericalDegeneracy(String),

    /// A particle coordinate lies outside the grid.
    #[error("Coordinate ({i}, {j}) is outside a {resolution}x{resolution} grid")]
    InvalidCoordinate {
        i: usize,
        j: usize,
        resolution: usize,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, WeftError>`.
pub type WeftResult<T> = Result<T, WeftError>;
