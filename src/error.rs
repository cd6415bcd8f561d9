use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the simulation and its terminal front end.
///
/// Every error is final for the call that produced it: stepping a grid is
/// deterministic, so repeating the call would fail the same way.
#[derive(Debug, Error)]
pub enum Error {
    /// The cells handed over do not form a rectangular 0/1 matrix.
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridDefect),
    /// Topology selector (mode or padding style) is not recognised.
    #[error("unknown topology: {0}")]
    UnknownTopology(String),
    /// Writing a frame to the terminal failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// What exactly is wrong with a rejected grid.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GridDefect {
    #[error("grid has no rows")]
    NoRows,
    #[error("row {row} has no cells")]
    EmptyRow { row: usize },
    #[error("row {row} has {actual} cells while row 0 has {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    NotBinary { row: usize, col: usize, value: u8 },
    #[error("fill rate {0} is outside of [0, 1]")]
    FillRate(f64),
}
