use thiserror::Error;

/// Everything that can go wrong when building or editing an [`Engine`](crate::Engine).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Rows and columns must both be positive.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: i64, cols: i64 },
    /// A coordinate outside `[0, cols) x [0, rows)`.
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds { x: i64, y: i64, cols: usize, rows: usize },
    /// Pattern text that doesn't parse.
    #[error("invalid pattern: {0}")]
    Pattern(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
