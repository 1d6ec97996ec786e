//! # N-Puzzle Solver Library
//!
//! This library finds optimal solutions to the sliding-tile puzzle (the
//! 8-puzzle, 15-puzzle and their N-by-N generalisations) with A* search, and
//! detects unsolvable boards by searching the board's twin in lockstep.
//!
//! It is used by two binaries:
//! - `solve`: Reads a puzzle file, then prints the minimum number of moves
//!   and every board along one shortest solution.
//! - `heuristic_evaluator`: Solves a batch of seeded scrambles with each
//!   heuristic and compares how many nodes they expand.
//!
//! ## Modules
//! - `engine`: The immutable `Board` and the blank's `Direction`s, with the
//!   Hamming and Manhattan distances, neighbor generation and the twin board.
//! - `heuristics`: `Heuristic`, choosing which distance drives node priority.
//! - `node`: `SearchNode`, a board with its move count and predecessor link.
//! - `frontier`: The minimum-priority open set used by the search.
//! - `solver`: The `Solver` state machine running both searches.
//! - `config`: `SolverConfig`, optionally loaded from TOML.
//! - `utils`: Parsing puzzle files.
//! - `error`: `PuzzleError` and the crate `Result` alias.
//!
//! ```
//! use npuzzle_solver::{Board, Solver};
//!
//! let board = Board::from_rows(&[[0, 1, 3], [4, 2, 5], [7, 8, 6]]).unwrap();
//! let solver = Solver::new(board);
//! assert_eq!(solver.moves(), Some(4));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod node;
pub mod solver;
pub mod utils;

pub use config::SolverConfig;
pub use engine::{Board, Direction};
pub use error::{PuzzleError, Result};
pub use heuristics::Heuristic;
pub use solver::{SearchStats, Solver, SolverState};
