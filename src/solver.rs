//! A* solver with twin-board unsolvability detection.
//!
//! Two independent best-first searches run in lockstep: one from the initial
//! board, one from its twin. Exactly one of the two boards is solvable, so
//! exactly one search reaches the goal; whichever does first decides the
//! outcome. Each round extracts and expands one node on each frontier.
use crate::config::SolverConfig;
use crate::engine::{Board, Direction};
use crate::error::{PuzzleError, Result};
use crate::frontier::{Frontier, HeapFrontier};
use crate::heuristics::Heuristic;
use crate::node::SearchNode;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Rounds between progress log lines.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Lifecycle of a `Solver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverState {
    /// Neither frontier has reached its goal yet.
    Running,
    /// The primary search reached the goal.
    Solved,
    /// The twin search reached the goal, so the initial board cannot.
    Unsolvable,
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Lockstep rounds completed.
    pub rounds: u64,
    /// Nodes expanded on the primary frontier.
    pub expanded: u64,
    /// Nodes expanded on the twin frontier.
    pub twin_expanded: u64,
    /// Largest combined size of both frontiers after a round.
    pub peak_frontier: usize,
}

type NodeFrontier = HeapFrontier<Rc<SearchNode>>;

/// Finds a shortest slide sequence for a board, or proves none exists.
///
/// # Examples
///
/// ```
/// use npuzzle_solver::engine::Board;
/// use npuzzle_solver::solver::Solver;
///
/// let board = Board::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
/// let solver = Solver::new(board);
/// assert!(solver.is_solvable());
/// assert_eq!(solver.moves(), Some(1));
///
/// let swapped = Board::from_rows(&[[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
/// let solver = Solver::new(swapped);
/// assert!(!solver.is_solvable());
/// assert_eq!(solver.moves(), None);
/// assert!(solver.solution().is_none());
/// ```
pub struct Solver {
    state: SolverState,
    heuristic: Heuristic,
    primary: NodeFrontier,
    twin: NodeFrontier,
    solution: Option<Rc<SearchNode>>,
    stats: SearchStats,
}

impl Solver {
    /// Solves `initial` with the default heuristic and no limits.
    ///
    /// Always terminates for a valid board.
    pub fn new(initial: Board) -> Self {
        let mut solver = Self::start(initial, Heuristic::default());
        solver.run();
        solver
    }

    /// Solves `initial` under the heuristic and limits in `config`.
    ///
    /// Limits are checked between rounds.
    ///
    /// # Errors
    /// Returns `PuzzleError::SearchLimit` if `max_rounds` or the time limit is
    /// reached before either frontier finds its goal.
    pub fn with_config(initial: Board, config: &SolverConfig) -> Result<Self> {
        let mut solver = Self::start(initial, config.heuristic);
        let started = Instant::now();
        let deadline = config.time_limit();

        while solver.step() == SolverState::Running {
            let rounds = solver.stats.rounds;
            let out_of_rounds = config.max_rounds.is_some_and(|max| rounds >= max);
            let out_of_time = deadline.is_some_and(|limit| started.elapsed() >= limit);
            if out_of_rounds || out_of_time {
                warn!(
                    rounds,
                    expanded = solver.stats.expanded,
                    "search limit reached"
                );
                return Err(PuzzleError::SearchLimit { rounds });
            }
        }
        Ok(solver)
    }

    /// Seeds both frontiers and returns a solver in the `Running` state.
    ///
    /// Drive it with `step` or `run`.
    pub fn start(initial: Board, heuristic: Heuristic) -> Self {
        info!(
            dimension = initial.dimension(),
            %heuristic,
            manhattan = initial.manhattan(),
            "starting search"
        );
        let twin = initial.twin();

        let mut primary_frontier = HeapFrontier::new();
        primary_frontier.insert(Rc::new(SearchNode::root(initial, heuristic)));
        let mut twin_frontier = HeapFrontier::new();
        twin_frontier.insert(Rc::new(SearchNode::root(twin, heuristic)));

        Solver {
            state: SolverState::Running,
            heuristic,
            primary: primary_frontier,
            twin: twin_frontier,
            solution: None,
            stats: SearchStats::default(),
        }
    }

    /// Runs one lockstep round and returns the resulting state.
    ///
    /// Once the solver has left `Running` this is a no-op.
    pub fn step(&mut self) -> SolverState {
        if self.state != SolverState::Running {
            return self.state;
        }
        self.stats.rounds += 1;

        let primary_goal = advance(&mut self.primary, &mut self.stats.expanded);
        let twin_goal = advance(&mut self.twin, &mut self.stats.twin_expanded);

        self.stats.peak_frontier = self
            .stats
            .peak_frontier
            .max(self.primary.len() + self.twin.len());

        if let Some(goal) = primary_goal {
            self.solution = Some(goal);
            self.finish(SolverState::Solved);
        } else if twin_goal.is_some() || self.primary.is_empty() {
            self.finish(SolverState::Unsolvable);
        } else if self.stats.rounds % PROGRESS_INTERVAL == 0 {
            debug!(
                rounds = self.stats.rounds,
                frontier = self.primary.len(),
                twin_frontier = self.twin.len(),
                "search progress"
            );
        }
        self.state
    }

    /// Steps until the solver reaches a terminal state.
    pub fn run(&mut self) -> SolverState {
        while self.step() == SolverState::Running {}
        self.state
    }

    fn finish(&mut self, state: SolverState) {
        self.state = state;
        // Release every queued node; only the solution path stays alive.
        self.primary = HeapFrontier::new();
        self.twin = HeapFrontier::new();
        info!(
            ?state,
            moves = ?self.solution.as_ref().map(|n| n.moves()),
            rounds = self.stats.rounds,
            expanded = self.stats.expanded,
            twin_expanded = self.stats.twin_expanded,
            "search finished"
        );
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Returns `true` if the initial board can reach the goal.
    pub fn is_solvable(&self) -> bool {
        self.state == SolverState::Solved
    }

    /// Minimum number of moves to solve the initial board; `None` if unsolvable.
    pub fn moves(&self) -> Option<u32> {
        self.solution.as_ref().map(|node| node.moves())
    }

    /// Boards of a shortest solution, from the initial board to the goal.
    pub fn solution(&self) -> Option<Vec<Board>> {
        self.solution.as_ref().map(|node| node.trace())
    }

    /// Blank slides of a shortest solution.
    pub fn directions(&self) -> Option<Vec<Direction>> {
        let boards = self.solution()?;
        boards
            .windows(2)
            .map(|pair| pair[0].direction_to(&pair[1]))
            .collect()
    }
}

/// Extracts the best node; returns it if it is a goal, otherwise queues its children.
fn advance(frontier: &mut NodeFrontier, expanded: &mut u64) -> Option<Rc<SearchNode>> {
    let node = frontier.extract_min()?;
    if node.is_solution() {
        return Some(node);
    }
    *expanded += 1;
    for child in node.expand() {
        frontier.insert(child);
    }
    None
}
