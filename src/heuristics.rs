use crate::engine::Board;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chooses which board distance estimate drives search-node priority.
///
/// Both estimates are admissible and consistent: a single slide moves one
/// tile by one cell, so neither can drop by more than one per move. The
/// solver therefore reports the same optimal move count with either; the
/// Manhattan sum is tighter and expands far fewer nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Number of tiles out of place.
    Hamming,
    /// Sum of per-tile grid distances to the goal cell.
    #[default]
    Manhattan,
}

impl Heuristic {
    /// Evaluates this heuristic on `board`.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_solver::engine::Board;
    /// use npuzzle_solver::heuristics::Heuristic;
    ///
    /// let board = Board::from_rows(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap();
    /// assert_eq!(Heuristic::Hamming.estimate(&board), 5);
    /// assert_eq!(Heuristic::Manhattan.estimate(&board), 10);
    /// ```
    pub fn estimate(self, board: &Board) -> u32 {
        match self {
            Heuristic::Hamming => board.hamming(),
            Heuristic::Manhattan => board.manhattan(),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heuristic::Hamming => "hamming",
            Heuristic::Manhattan => "manhattan",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Direction;

    #[test]
    fn test_default_is_manhattan() {
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
    }

    #[test]
    fn test_both_zero_only_at_goal() {
        let goal = Board::goal(4);
        assert_eq!(Heuristic::Hamming.estimate(&goal), 0);
        assert_eq!(Heuristic::Manhattan.estimate(&goal), 0);

        let one_off = goal.slide(Direction::Left).unwrap();
        assert_eq!(Heuristic::Hamming.estimate(&one_off), 1);
        assert_eq!(Heuristic::Manhattan.estimate(&one_off), 1);
    }

    #[test]
    fn test_hamming_never_exceeds_manhattan() {
        for seed in 0..20 {
            let board = Board::new_random_with_seed(3, seed);
            assert!(
                Heuristic::Hamming.estimate(&board) <= Heuristic::Manhattan.estimate(&board),
                "hamming exceeded manhattan on seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_consistent_across_single_slides() {
        let board = Board::scrambled(3, 15, 7);
        for heuristic in [Heuristic::Hamming, Heuristic::Manhattan] {
            let h = heuristic.estimate(&board) as i64;
            for neighbor in board.neighbors() {
                let hn = heuristic.estimate(&neighbor) as i64;
                assert!((h - hn).abs() <= 1, "{} changed by more than one", heuristic);
            }
        }
    }

    #[test]
    fn test_display_and_serde_names_match() {
        #[derive(Deserialize)]
        struct Wrapper {
            heuristic: Heuristic,
        }
        let parsed: Wrapper = toml::from_str("heuristic = \"hamming\"").unwrap();
        assert_eq!(parsed.heuristic, Heuristic::Hamming);
        assert_eq!(Heuristic::Hamming.to_string(), "hamming");
        assert_eq!(Heuristic::Manhattan.to_string(), "manhattan");
    }
}
