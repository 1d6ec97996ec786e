//! Search-tree nodes.
//!
//! Nodes form a tree rooted at the start board. Each node holds a shared,
//! read-only link to the node it was expanded from; links always point at a
//! strictly older node, so no cycles can form.
use crate::engine::Board;
use crate::frontier::Prioritized;
use crate::heuristics::Heuristic;
use std::iter;
use std::rc::Rc;

/// A board reached by the search, with its path cost and predecessor.
#[derive(Debug)]
pub struct SearchNode {
    board: Board,
    previous: Option<Rc<SearchNode>>,
    moves: u32,
    priority: u32,
    heuristic: Heuristic,
}

impl SearchNode {
    /// Creates a node for `board` reached from `previous`.
    ///
    /// `moves` is one more than the predecessor's, or 0 without one. The
    /// priority `moves + heuristic(board)` is computed here and never changes.
    pub fn new(board: Board, previous: Option<Rc<SearchNode>>, heuristic: Heuristic) -> Self {
        let moves = previous.as_ref().map_or(0, |p| p.moves + 1);
        let priority = moves + heuristic.estimate(&board);
        SearchNode {
            board,
            previous,
            moves,
            priority,
            heuristic,
        }
    }

    /// Creates the root node of a search.
    pub fn root(board: Board, heuristic: Heuristic) -> Self {
        Self::new(board, None, heuristic)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn previous(&self) -> Option<&Rc<SearchNode>> {
        self.previous.as_ref()
    }

    /// Number of moves from the root board to this node's board.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_solution(&self) -> bool {
        self.board.is_goal()
    }

    /// Returns the children of this node, one per neighbor of its board.
    ///
    /// The neighbor equal to the predecessor's board is skipped; without this
    /// the search keeps sliding the same tile back and forth.
    pub fn expand(self: &Rc<Self>) -> Vec<Rc<SearchNode>> {
        let undo = self.previous.as_ref().map(|p| &p.board);
        self.board
            .neighbors()
            .filter(|neighbor| Some(neighbor) != undo)
            .map(|neighbor| {
                Rc::new(SearchNode::new(
                    neighbor,
                    Some(Rc::clone(self)),
                    self.heuristic,
                ))
            })
            .collect()
    }

    /// Returns the boards from the root to this node, in order.
    pub fn trace(&self) -> Vec<Board> {
        let mut boards: Vec<Board> = iter::successors(Some(self), |node| node.previous.as_deref())
            .map(|node| node.board.clone())
            .collect();
        boards.reverse();
        boards
    }
}

impl Prioritized for SearchNode {
    fn priority(&self) -> u32 {
        self.priority
    }
}
