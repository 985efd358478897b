//! Engine facade: opening policies on top of the minimax searcher
//!
//! [`Engine`] is what collaborators (a renderer, an input handler) talk
//! to. It answers "best move for this state" and carries the search
//! configuration; two early-game policies bypass the general search:
//!
//! 1. Empty board: play the exact center.
//! 2. Replying to the opponent's opening stone: a uniformly random legal
//!    neighbor of that stone (the one nondeterministic choice the engine
//!    makes).
//!
//! `get_move` is a blocking, pure computation with no internal timeout;
//! callers wanting responsiveness run it off their critical path.

use std::time::Instant;

use log::debug;

use crate::board::{BoardState, Outcome, Pos};
use crate::search::{SearchConfig, Searcher, DEFAULT_DEPTH};

/// Neighbor offsets for the second-move reply (8 surrounding cells)
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Result of a move request with search statistics.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the move (0 for opening-policy moves)
    pub score: i64,
    /// Nodes visited by the search
    pub nodes: u64,
    /// Wall-clock time taken
    pub time_ms: u64,
}

/// Computer opponent for the current mover of a board state.
pub struct Engine {
    searcher: Searcher,
}

impl Engine {
    /// Create an engine with the default search depth.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an engine searching `depth` plies (clamped to >= 1).
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        Self {
            searcher: Searcher::new(SearchConfig::with_depth(depth)),
        }
    }

    /// Set the search depth, re-deriving the breadth cap.
    pub fn set_depth(&mut self, depth: u32) {
        self.searcher.set_config(SearchConfig::with_depth(depth));
    }

    /// Current search depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.searcher.config().depth
    }

    /// Current breadth cap (candidates examined per ply).
    #[must_use]
    pub fn breadth(&self) -> usize {
        self.searcher.config().breadth
    }

    /// Best move for the current mover, or `None` when the game is over
    /// or no candidate position exists.
    #[must_use]
    pub fn get_move(&mut self, state: &BoardState) -> Option<Pos> {
        self.get_move_with_stats(state).best_move
    }

    /// Best move plus search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, state: &BoardState) -> MoveResult {
        let start = Instant::now();

        if state.outcome() != Outcome::InProgress {
            return MoveResult {
                best_move: None,
                score: 0,
                nodes: 0,
                time_ms: start.elapsed().as_millis() as u64,
            };
        }

        if let Some(pos) = self.opening_move(state) {
            debug!("opening policy: ({}, {})", pos.row, pos.col);
            return MoveResult {
                best_move: Some(pos),
                score: 0,
                nodes: 1,
                time_ms: start.elapsed().as_millis() as u64,
            };
        }

        let result = self.searcher.search(state);
        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "search: best={:?} score={} nodes={} time={}ms",
            result.best_move, result.score, result.nodes, time_ms
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        }
    }

    /// Early-game policy moves, or `None` to fall through to search.
    fn opening_move(&self, state: &BoardState) -> Option<Pos> {
        if state.move_count() == 0 {
            return Some(state.center());
        }

        if state.move_count() == 1 {
            let first = state.last_move()?;
            let neighbors: Vec<Pos> = NEIGHBOR_OFFSETS
                .iter()
                .filter_map(|&(dr, dc)| state.offset(first.pos, dr, dc))
                .filter(|pos| state.is_legal(pos.row, pos.col))
                .collect();
            if !neighbors.is_empty() {
                return Some(neighbors[fastrand::usize(..neighbors.len())]);
            }
        }

        None
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
