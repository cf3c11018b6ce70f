//! Grid engine error taxonomy.
//!
//! All failures are local and synchronous: the engine rejects the call and
//! returns the error to the immediate caller. Coordinates are never clamped
//! or wrapped on misuse, so out-of-range access stays observable in tests.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("noise denominator must be at least 1")]
    InvalidNoiseDenominator,

    #[error("cell ({column}, {row}) is outside the {columns}x{rows} grid")]
    OutOfRange {
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },
}
