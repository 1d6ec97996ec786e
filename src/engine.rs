//! Board representation for the N-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Direction`: The four ways the blank can slide.
//! - `Board`: An immutable N-by-N tile layout with its heuristics, goal test,
//!   neighbor generation and twin construction.
//! - `Neighbors`: The lazy iterator returned by `Board::neighbors`.
use crate::error::{PuzzleError, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A direction in which the blank cell moves.
///
/// `Up` swaps the blank with the tile directly above it, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order `Board::neighbors` visits them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the direction that undoes this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_solver::engine::Direction;
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// (row delta, column delta) of the blank.
    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable snapshot of an N-by-N sliding puzzle.
///
/// Tiles are stored row-major; `0` is the blank. In the goal layout tile `v`
/// sits at linear index `v - 1` and the blank occupies the last cell.
///
/// Two boards are equal exactly when their tile layouts match cell for cell.
/// The cached blank index is a function of the layout, so the derived
/// `PartialEq` and `Hash` agree with that definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    tiles: Vec<u32>,
    blank: usize,
}

impl Board {
    /// Creates a board from a grid of rows.
    ///
    /// # Arguments
    /// * `grid`: `grid[r][c]` is the tile in row `r`, column `c`; `0` is the blank.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidBoard` if the grid has fewer than two rows,
    /// is not square, or its values are not a permutation of `0..N*N`.
    pub fn new(grid: Vec<Vec<u32>>) -> Result<Self> {
        Self::from_rows(&grid)
    }

    /// Creates a board from any slice of row-like values.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::Board;
    ///
    /// let board = Board::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
    /// assert!(board.is_goal());
    /// assert!(Board::from_rows(&[[1, 1], [2, 0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let dimension = rows.len();
        let mut tiles = Vec::with_capacity(dimension * dimension);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != dimension {
                return Err(PuzzleError::InvalidBoard(format!(
                    "row {} has {} tiles, expected {}",
                    r,
                    row.len(),
                    dimension
                )));
            }
            tiles.extend_from_slice(row);
        }
        Self::from_tiles(dimension, tiles)
    }

    /// Creates a board from a row-major list of `dimension * dimension` tiles.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidBoard` under the same conditions as `Board::new`.
    pub fn from_tiles(dimension: usize, tiles: Vec<u32>) -> Result<Self> {
        if dimension < 2 {
            return Err(PuzzleError::InvalidBoard(format!(
                "dimension must be at least 2, found {}",
                dimension
            )));
        }
        let cells = dimension * dimension;
        if tiles.len() != cells {
            return Err(PuzzleError::InvalidBoard(format!(
                "expected {} tiles for a {}x{} board, found {}",
                cells,
                dimension,
                dimension,
                tiles.len()
            )));
        }

        let mut seen = vec![false; cells];
        for (idx, &value) in tiles.iter().enumerate() {
            let v = value as usize;
            if v >= cells {
                return Err(PuzzleError::InvalidBoard(format!(
                    "tile {} at row {} col {} is outside 0..{}",
                    value,
                    idx / dimension,
                    idx % dimension,
                    cells
                )));
            }
            if seen[v] {
                return Err(PuzzleError::InvalidBoard(format!(
                    "tile {} appears more than once",
                    value
                )));
            }
            seen[v] = true;
        }

        // Every value in 0..cells was seen exactly once, so the blank exists.
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();
        Ok(Board {
            dimension,
            tiles,
            blank,
        })
    }

    /// Returns the goal board of the given dimension.
    ///
    /// # Panics
    /// Panics if `dimension < 2`.
    pub fn goal(dimension: usize) -> Self {
        assert!(dimension >= 2, "board dimension must be at least 2");
        let cells = dimension * dimension;
        let mut tiles: Vec<u32> = (1..cells as u32).collect();
        tiles.push(0);
        Board {
            dimension,
            tiles,
            blank: cells - 1,
        }
    }

    /// Creates a board whose tiles are a uniformly shuffled permutation.
    ///
    /// The same seed always yields the same board. Roughly half of all
    /// shuffles are unsolvable, which makes this useful for exercising the
    /// solver's unsolvability detection.
    ///
    /// # Panics
    /// Panics if `dimension < 2`.
    pub fn new_random_with_seed(dimension: usize, seed: u64) -> Self {
        assert!(dimension >= 2, "board dimension must be at least 2");
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tiles: Vec<u32> = (0..(dimension * dimension) as u32).collect();
        tiles.shuffle(&mut rng);
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();
        Board {
            dimension,
            tiles,
            blank,
        }
    }

    /// Creates a solvable board by sliding the blank `walk` times from the goal.
    ///
    /// Each step picks uniformly among the legal slides that do not undo the
    /// previous one, so the result is at most `walk` moves from the goal.
    ///
    /// # Panics
    /// Panics if `dimension < 2`.
    pub fn scrambled(dimension: usize, walk: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal(dimension);
        let mut last: Option<Direction> = None;

        for _ in 0..walk {
            let mut options: Vec<(Direction, Board)> = Direction::ALL
                .iter()
                .filter(|&&d| last.map_or(true, |l| d != l.opposite()))
                .filter_map(|&d| board.slide(d).map(|b| (d, b)))
                .collect();
            // A corner blank still has one slide left after excluding the undo.
            let pick = rng.gen_range(0..options.len());
            let (direction, next) = options.swap_remove(pick);
            last = Some(direction);
            board = next;
        }
        board
    }

    /// Returns the board dimension N.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the tile at row `r`, column `c` (`0` for the blank).
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn tile(&self, r: usize, c: usize) -> u32 {
        assert!(r < self.dimension && c < self.dimension, "cell out of bounds");
        self.tiles[r * self.dimension + c]
    }

    /// Returns the (row, column) of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.dimension, self.blank % self.dimension)
    }

    /// Returns the tiles row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.tiles.chunks(self.dimension)
    }

    /// Counts tiles, excluding the blank, that are not in their goal cell.
    pub fn hamming(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(idx, &value)| value != 0 && value as usize != idx + 1)
            .count() as u32
    }

    /// Sums, over all non-blank tiles, the row and column distance to the goal cell.
    pub fn manhattan(&self) -> u32 {
        let n = self.dimension;
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(idx, &value)| {
                let target = value as usize - 1;
                ((idx / n).abs_diff(target / n) + (idx % n).abs_diff(target % n)) as u32
            })
            .sum()
    }

    /// Returns `true` if this is the goal layout.
    pub fn is_goal(&self) -> bool {
        self.manhattan() == 0
    }

    /// Returns the board obtained by sliding the blank in `direction`,
    /// or `None` if that would leave the grid.
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let (dr, dc) = direction.offset();
        let (r, c) = self.blank();
        let nr = r.checked_add_signed(dr)?;
        let nc = c.checked_add_signed(dc)?;
        if nr >= self.dimension || nc >= self.dimension {
            return None;
        }
        Some(self.swapped(self.blank, nr * self.dimension + nc))
    }

    /// Returns the boards one blank-slide away, in `Direction::ALL` order.
    ///
    /// The iterator is lazy; call `neighbors` again to restart it. A board of
    /// dimension 2 or more always has between 2 and 4 neighbors.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::Board;
    ///
    /// let corner = Board::goal(3);
    /// assert_eq!(corner.neighbors().count(), 2);
    /// ```
    pub fn neighbors(&self) -> Neighbors<'_> {
        Neighbors {
            board: self,
            next: 0,
        }
    }

    /// Returns the board with one pair of horizontally adjacent tiles exchanged.
    ///
    /// The first two cells of row 0 are swapped when the blank is not in row 0;
    /// otherwise the first two cells of row 1. The blank never moves, so the
    /// twin differs by a single tile transposition and exactly one of
    /// `self` and `self.twin()` is solvable.
    pub fn twin(&self) -> Board {
        let n = self.dimension;
        if self.blank >= n {
            self.swapped(0, 1)
        } else {
            self.swapped(n, n + 1)
        }
    }

    /// Returns the slide that turns `self` into `next`, if they are neighbors.
    pub fn direction_to(&self, next: &Board) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.slide(d).as_ref() == Some(next))
    }

    fn swapped(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        let blank = if self.blank == a {
            b
        } else if self.blank == b {
            a
        } else {
            self.blank
        };
        Board {
            dimension: self.dimension,
            tiles,
            blank,
        }
    }
}

/// Lazy iterator over the neighbors of a `Board`.
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    board: &'a Board,
    next: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        while let Some(&direction) = Direction::ALL.get(self.next) {
            self.next += 1;
            if let Some(board) = self.board.slide(direction) {
                return Some(board);
            }
        }
        None
    }
}

impl fmt::Display for Board {
    /// Writes N on the first line, then N rows of right-aligned tiles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        write!(f, "{}", self.dimension)?;
        for row in self.rows() {
            writeln!(f)?;
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", tile, width = width)?;
            }
        }
        Ok(())
    }
}
