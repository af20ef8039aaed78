//! Error types for torus_life.

use thiserror::Error;

/// Errors produced by grid construction, pattern loading and snapshots.
#[derive(Debug, Error)]
pub enum Error {
    /// Width or height of the grid would be zero.
    #[error("invalid grid dimensions {width}x{height}: both sides must be positive")]
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Pattern name is not present in the catalog.
    #[error("unknown pattern: {0:?}")]
    UnknownPattern(String),

    /// Rule text is not in `B.../S...` notation.
    #[error("invalid rule {0:?}: expected notation like \"B3/S23\"")]
    InvalidRule(String),

    /// Snapshot lists a live cell outside of its own dimensions.
    #[error("snapshot cell ({x}, {y}) lies outside the grid")]
    SnapshotOutOfBounds {
        /// Column of the offending cell.
        x: usize,
        /// Row of the offending cell.
        y: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
