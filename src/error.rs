//! Error types for board construction and parsing.

use thiserror::Error;

/// Rejected tile grids.
///
/// `Board::new` only reports the shape problems. The permutation checks are
/// done by `Board::validate`, which callers run when the input is untrusted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("tiles cannot be empty")]
    Empty,

    #[error("board can't be smaller than 2 x 2, got dimension {dimension}")]
    TooSmall { dimension: usize },

    #[error("row {row} has {len} tiles, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("tile {value} is out of range for a {dimension} x {dimension} board")]
    TileOutOfRange { value: u32, dimension: usize },

    #[error("tile {value} appears more than once")]
    NotAPermutation { value: u32 },
}

/// Failures reading the textual board format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("missing board dimension")]
    MissingDimension,

    #[error("invalid number '{token}'")]
    InvalidNumber { token: String },

    #[error("expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },

    #[error(transparent)]
    Board(#[from] BoardError),
}
