use crate::engine::Board;
use crate::error::{PuzzleError, Result};
use std::path::Path;

/// Parses a puzzle in text form into a `Board`.
///
/// The text holds the dimension `N` followed by `N * N` whitespace-separated
/// tiles in row-major order, `0` marking the blank. Line breaks are not
/// significant, so the usual layout of one row per line is accepted as is.
///
/// # Arguments
/// * `s`: The puzzle text.
///
/// # Returns
/// * `Ok(Board)` if the text is well formed and describes a valid board.
/// * `Err(PuzzleError::Parse)` if the dimension or a tile is not a number,
///   or the tile count does not match the dimension.
/// * `Err(PuzzleError::InvalidBoard)` if the tiles are not a permutation of
///   `0..N*N` or `N < 2`.
///
/// # Examples
/// ```
/// use npuzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("3\n 0 1 3\n 4 2 5\n 7 8 6\n").unwrap();
/// assert_eq!(board.dimension(), 3);
/// assert_eq!(board.blank(), (0, 0));
///
/// assert!(board_from_str("2\n1 2\n3").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board> {
    let mut tokens = s.split_whitespace();

    let dimension_token = tokens
        .next()
        .ok_or_else(|| PuzzleError::Parse("missing board dimension".to_string()))?;
    let dimension: usize = dimension_token.parse().map_err(|_| {
        PuzzleError::Parse(format!("invalid board dimension '{}'", dimension_token))
    })?;
    let cells = dimension.checked_mul(dimension).ok_or_else(|| {
        PuzzleError::Parse(format!("board dimension {} is too large", dimension))
    })?;

    let mut tiles = Vec::with_capacity(cells.min(1 << 16));
    for (position, token) in tokens.enumerate() {
        if position >= cells {
            return Err(PuzzleError::Parse(format!(
                "unexpected value '{}' after {} tiles",
                token, cells
            )));
        }
        let tile: u32 = token.parse().map_err(|_| {
            PuzzleError::Parse(format!(
                "invalid tile '{}' at row {} col {}",
                token,
                position / dimension,
                position % dimension
            ))
        })?;
        tiles.push(tile);
    }

    if tiles.len() != cells {
        return Err(PuzzleError::Parse(format!(
            "expected {} tiles for a {}x{} board, found {}",
            cells,
            dimension,
            dimension,
            tiles.len()
        )));
    }

    Board::from_tiles(dimension, tiles)
}

/// Reads and parses a puzzle file in the format accepted by `board_from_str`.
///
/// # Errors
/// Returns `PuzzleError::Io` if the file cannot be read, otherwise any error
/// from `board_from_str`.
pub fn read_board_file(path: impl AsRef<Path>) -> Result<Board> {
    let content = std::fs::read_to_string(path)?;
    board_from_str(&content)
}
