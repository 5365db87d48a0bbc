//! Typed errors for the grid engine

use thiserror::Error;

/// Errors raised by grid construction and access.
///
/// Every variant is a caller contract violation, detected synchronously at
/// the offending call and reported once; the engine never recovers or
/// retries internally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Both grid dimensions must be positive.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },

    /// Coordinate access outside `[0, width) x [0, height)`.
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A buffer or row whose length does not match the grid shape.
    #[error("length {actual} does not match expected length {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}
