use npuzzle_solver::engine::Board;
use npuzzle_solver::heuristics::Heuristic;
use npuzzle_solver::solver::Solver;
use npuzzle_solver::SolverConfig;
use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};

/// Shortest slide count from `start` to the goal by exhaustive breadth-first
/// search, or `None` if the goal is unreachable.
fn bfs_distance(start: &Board) -> Option<usize> {
    let goal = Board::goal(start.dimension());
    let mut distance: HashMap<Board, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    distance.insert(start.clone(), 0);
    queue.push_back(start.clone());

    while let Some(board) = queue.pop_front() {
        let d = distance[&board];
        if board == goal {
            return Some(d);
        }
        for neighbor in board.neighbors() {
            if !distance.contains_key(&neighbor) {
                distance.insert(neighbor.clone(), d + 1);
                queue.push_back(neighbor);
            }
        }
    }
    None
}

fn cells_differing(a: &Board, b: &Board) -> Vec<(usize, usize)> {
    let n = a.dimension();
    (0..n)
        .flat_map(|r| (0..n).map(move |c| (r, c)))
        .filter(|&(r, c)| a.tile(r, c) != b.tile(r, c))
        .collect()
}

#[test]
fn every_two_by_two_board_matches_brute_force() {
    // All 24 permutations of a 2x2 board: half reach the goal, half do not.
    let mut solvable = 0;
    for seed in 0..500 {
        let board = Board::new_random_with_seed(2, seed);
        let solver = Solver::new(board.clone());
        let expected = bfs_distance(&board);
        assert_eq!(
            solver.moves().map(|m| m as usize),
            expected,
            "mismatch on board\n{}",
            board
        );
        if expected.is_some() {
            solvable += 1;
        }
    }
    assert!(solvable > 0 && solvable < 500);
}

#[test]
fn scrambles_from_the_original_test_suite() {
    let puzzle04 = Board::from_rows(&[[0, 1, 3], [4, 2, 5], [7, 8, 6]]).unwrap();
    assert_eq!(Solver::new(puzzle04).moves(), Some(4));

    let unsolvable = Board::from_rows(&[[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
    assert_eq!(bfs_distance(&unsolvable.twin()), Some(22));
    assert!(!Solver::new(unsolvable).is_solvable());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn goal_predicates_agree(n in 2usize..=5, seed in any::<u64>(), walk in 0usize..4) {
        let board = Board::scrambled(n, walk, seed);
        let goal = board.is_goal();
        prop_assert_eq!(goal, board.hamming() == 0);
        prop_assert_eq!(goal, board.manhattan() == 0);
        prop_assert_eq!(goal, board == Board::goal(n));
    }

    #[test]
    fn neighbors_are_single_adjacent_swaps(n in 2usize..=5, seed in any::<u64>()) {
        let board = Board::new_random_with_seed(n, seed);
        let neighbors: Vec<Board> = board.neighbors().collect();
        prop_assert!((2..=4).contains(&neighbors.len()));

        for neighbor in &neighbors {
            let diffs = cells_differing(&board, neighbor);
            prop_assert_eq!(diffs.len(), 2);
            prop_assert!(diffs.contains(&board.blank()));
            let (a, b) = (diffs[0], diffs[1]);
            prop_assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1);
        }
    }

    #[test]
    fn twin_is_deterministic_tile_transposition(n in 2usize..=5, seed in any::<u64>()) {
        let board = Board::new_random_with_seed(n, seed);
        let twin = board.twin();
        prop_assert_eq!(&twin, &board.twin());
        prop_assert_eq!(twin.blank(), board.blank());

        let diffs = cells_differing(&board, &twin);
        prop_assert_eq!(diffs.len(), 2);
        prop_assert_eq!(diffs[0].0, diffs[1].0);
        prop_assert!(diffs.iter().all(|&(r, c)| board.tile(r, c) != 0));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn exactly_one_of_board_and_twin_is_solvable(seed in any::<u64>()) {
        let board = Board::new_random_with_seed(3, seed);
        let direct = Solver::new(board.clone()).is_solvable();
        let twin = Solver::new(board.twin()).is_solvable();
        prop_assert_ne!(direct, twin);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn solver_is_optimal_on_scrambles(seed in any::<u64>(), walk in 0usize..=14) {
        let board = Board::scrambled(3, walk, seed);
        let expected = bfs_distance(&board);
        prop_assert!(expected.is_some());

        for heuristic in [Heuristic::Manhattan, Heuristic::Hamming] {
            let config = SolverConfig::new().with_heuristic(heuristic);
            let solver = Solver::with_config(board.clone(), &config).unwrap();
            prop_assert_eq!(solver.moves().map(|m| m as usize), expected);
        }
    }

    #[test]
    fn solution_is_a_connected_path(seed in any::<u64>(), walk in 0usize..=20) {
        let board = Board::scrambled(3, walk, seed);
        let solver = Solver::new(board.clone());
        let moves = solver.moves().unwrap() as usize;
        let path = solver.solution().unwrap();

        prop_assert!(moves <= walk);
        prop_assert_eq!(path.len(), moves + 1);
        prop_assert_eq!(&path[0], &board);
        prop_assert!(path[moves].is_goal());
        for pair in path.windows(2) {
            prop_assert!(pair[0].neighbors().any(|b| b == pair[1]));
        }
    }
}
