//! # Slider Puzzle
//!
//! Optimal solver for the n-by-n sliding-tile puzzle (8-puzzle, 15-puzzle, ...).
//!
//! A [`Board`] is an immutable snapshot of the grid with the usual distance
//! heuristics and neighbor generation. A [`Solver`] runs A* on the board and on
//! its twin side by side, which settles both the minimum number of moves and
//! whether the board can be solved at all.
//!
//! ```
//! use slider_puzzle::{Board, Solver};
//!
//! let board = Board::new(&[[1u32, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
//! let solver = Solver::new(&board);
//! assert!(solver.is_solvable());
//! assert_eq!(solver.moves(), Some(1));
//!
//! let unsolvable = Board::new(&[[1u32, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
//! assert!(!Solver::new(&unsolvable).is_solvable());
//! ```
//!
//! ## Modules
//! - `board`: the grid, its heuristics, neighbors and twin, plus random boards.
//! - `solver`: the two-frontier A* search and its configuration.
//! - `min_pq`: a comparator-driven min-priority queue used as the frontier.
//! - `format`: reading and writing boards as text.
//! - `error`: construction and parse errors.

pub mod board;
pub mod error;
pub mod format;
pub mod min_pq;
pub mod solver;

pub use board::{Board, Move};
pub use error::{BoardError, ParseBoardError};
pub use solver::{Heuristic, Pruning, Solver, SolverConfig};
