//! Error types for the N-puzzle solver.

use thiserror::Error;

/// Errors surfaced by board construction, puzzle loading and bounded solving.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The grid is not an N-by-N permutation of `0..N*N` (N >= 2).
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    /// Puzzle text could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// A configured round or time limit stopped the search before either
    /// frontier reached its goal.
    #[error("Search limit reached after {rounds} rounds")]
    SearchLimit { rounds: u64 },
}

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, PuzzleError>;
