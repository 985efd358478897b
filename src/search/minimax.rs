//! Depth-limited minimax with alpha-beta pruning
//!
//! The searcher clones the caller's board once, then speculates by
//! applying a candidate move, recursing, and undoing it before trying the
//! next sibling; no per-node allocation, and the caller's state is never
//! mutated. Branching is bounded by ranking candidates with the position
//! heuristic and truncating to a depth-derived breadth cap, which is what
//! keeps fixed-depth search over a 15x15 board tractable.

use crate::board::{BoardState, Outcome, Player, Pos};
use crate::eval::{evaluate_board, evaluate_position, PatternWeights};

/// Default search depth (odd values recommended)
pub const DEFAULT_DEPTH: u32 = 3;

/// Candidate window around existing stones
const CANDIDATE_RADIUS: usize = 2;

/// Breadth cap for a given depth: deeper searches examine fewer
/// candidates per ply.
fn breadth_for_depth(depth: u32) -> usize {
    (20i64 - 3 * i64::from(depth)).max(8) as usize
}

/// Search depth and the breadth cap derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead, at least 1
    pub depth: u32,
    /// Max candidates examined per ply
    pub breadth: usize,
}

impl SearchConfig {
    /// Build a config for the given depth (clamped to >= 1), deriving
    /// the breadth cap.
    pub fn with_depth(depth: u32) -> Self {
        let depth = depth.max(1);
        Self {
            depth,
            breadth: breadth_for_depth(depth),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }
}

/// Result of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any candidate existed
    pub best_move: Option<Pos>,
    /// Minimax value of the best move
    pub score: i64,
    /// Nodes visited during this search
    pub nodes: u64,
}

/// Minimax searcher with injected pattern weights.
pub struct Searcher {
    config: SearchConfig,
    weights: PatternWeights,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher with the default weight table.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_weights(config, PatternWeights::default())
    }

    /// Create a searcher with a custom weight table.
    pub fn with_weights(config: SearchConfig, weights: PatternWeights) -> Self {
        Self {
            config,
            weights,
            nodes: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Find the best move for the current mover of `state`.
    ///
    /// Returns `best_move: None` only when there are zero candidate
    /// positions. A single candidate is returned without recursing. The
    /// caller's state is left untouched; ordering is deterministic for a
    /// given state, with ties keeping the first-encountered candidate.
    pub fn search(&mut self, state: &BoardState) -> SearchResult {
        self.nodes = 0;

        let mut board = state.clone();
        let mover = board.turn();
        let candidates = self.ordered_candidates(&mut board);

        match candidates.as_slice() {
            [] => {
                return SearchResult {
                    best_move: None,
                    score: 0,
                    nodes: self.nodes,
                }
            }
            [only] => {
                return SearchResult {
                    best_move: Some(*only),
                    score: 0,
                    nodes: self.nodes,
                }
            }
            _ => {}
        }

        let mut best_move = None;
        let mut best_score = i64::MIN;

        for pos in candidates {
            let applied = board.apply_move(pos.row, pos.col);
            debug_assert!(applied, "candidates must be legal moves");

            // Each root candidate gets a full window; alpha is not
            // threaded across root siblings.
            let score = self.minimax(
                &mut board,
                self.config.depth - 1,
                i64::MIN,
                i64::MAX,
                false,
                mover,
            );
            board.undo_last();

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    /// Recursive minimax with fail-hard alpha-beta cutoffs.
    ///
    /// `engine` is the player the score is computed for; `maximizing`
    /// alternates each ply. Terminal positions score `five` plus the
    /// remaining depth so faster wins rank above slower ones.
    fn minimax(
        &mut self,
        board: &mut BoardState,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        engine: Player,
    ) -> i64 {
        self.nodes += 1;

        match board.outcome() {
            Outcome::Win(winner) if winner == engine => {
                return self.weights.five + i64::from(depth);
            }
            Outcome::Win(_) => return -self.weights.five - i64::from(depth),
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }

        if depth == 0 {
            return evaluate_board(board, engine, &self.weights);
        }

        let candidates = self.ordered_candidates(board);
        if candidates.is_empty() {
            return evaluate_board(board, engine, &self.weights);
        }

        if maximizing {
            let mut best = i64::MIN;
            for pos in candidates {
                let applied = board.apply_move(pos.row, pos.col);
                debug_assert!(applied, "candidates must be legal moves");
                let score = self.minimax(board, depth - 1, alpha, beta, false, engine);
                board.undo_last();

                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i64::MAX;
            for pos in candidates {
                let applied = board.apply_move(pos.row, pos.col);
                debug_assert!(applied, "candidates must be legal moves");
                let score = self.minimax(board, depth - 1, alpha, beta, true, engine);
                board.undo_last();

                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Candidates near existing stones, ranked by the position heuristic
    /// for the ply's mover (descending) and truncated to the breadth cap.
    ///
    /// Stable sort over the row-major candidate order keeps ordering
    /// deterministic for a given board state.
    fn ordered_candidates(&self, board: &mut BoardState) -> Vec<Pos> {
        let mover = board.turn();
        let mut scored: Vec<(Pos, f64)> = board
            .candidate_positions(CANDIDATE_RADIUS)
            .into_iter()
            .map(|pos| {
                let score = evaluate_position(board, pos, mover, &self.weights);
                (pos, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.config.breadth);
        scored.into_iter().map(|(pos, _)| pos).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searcher(depth: u32) -> Searcher {
        Searcher::new(SearchConfig::with_depth(depth))
    }

    /// Play out alternating moves; panics on an illegal script.
    fn play(state: &mut BoardState, moves: &[(usize, usize)]) {
        for &(r, c) in moves {
            assert!(state.apply_move(r, c), "illegal scripted move ({r}, {c})");
        }
    }

    #[test]
    fn test_breadth_cap_formula() {
        assert_eq!(breadth_for_depth(1), 17);
        assert_eq!(breadth_for_depth(2), 14);
        assert_eq!(breadth_for_depth(3), 11);
        assert_eq!(breadth_for_depth(4), 8);
        // Floor of 8 for deep searches
        assert_eq!(breadth_for_depth(5), 8);
        assert_eq!(breadth_for_depth(10), 8);
    }

    #[test]
    fn test_config_clamps_depth() {
        let config = SearchConfig::with_depth(0);
        assert_eq!(config.depth, 1);
        assert_eq!(config.breadth, 17);
    }

    #[test]
    fn test_completes_open_four() {
        // Black has an open four; either end wins on the spot.
        let mut state = BoardState::new();
        play(
            &mut state,
            &[
                (7, 4),
                (9, 0),
                (7, 5),
                (9, 2),
                (7, 6),
                (11, 0),
                (7, 7),
                (11, 2),
            ],
        );

        let result = searcher(1).search(&state);
        let best = result.best_move.expect("a move must be found");
        assert!(
            best == Pos::new(7, 3) || best == Pos::new(7, 8),
            "expected a completing move, got {best:?}"
        );
        assert_eq!(result.score, PatternWeights::default().five);
    }

    #[test]
    fn test_blocks_opponent_open_four() {
        // White threatens five on either end; Black has no win of its own,
        // so the defensive block must be chosen.
        let mut state = BoardState::new();
        play(
            &mut state,
            &[
                (0, 0),
                (7, 4),
                (0, 2),
                (7, 5),
                (0, 4),
                (7, 6),
                (0, 6),
                (7, 7),
            ],
        );
        assert_eq!(state.turn(), Player::Black);

        let result = searcher(2).search(&state);
        let best = result.best_move.expect("a move must be found");
        assert!(
            best == Pos::new(7, 3) || best == Pos::new(7, 8),
            "expected a blocking move, got {best:?}"
        );
    }

    #[test]
    fn test_single_candidate_short_circuits() {
        let mut state = BoardState::with_size(3);
        play(
            &mut state,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 0),
                (2, 1),
            ],
        );
        assert_eq!(state.outcome(), Outcome::InProgress);

        let result = searcher(3).search(&state);
        assert_eq!(result.best_move, Some(Pos::new(2, 2)));
        assert_eq!(result.nodes, 0, "no recursion for a lone candidate");
    }

    #[test]
    fn test_full_board_yields_no_move() {
        // Fill the grid directly so the outcome stays in progress but no
        // empty candidate remains.
        let mut state = BoardState::with_size(5);
        for r in 0..5 {
            for c in 0..5 {
                let player = if (r + c) % 2 == 0 {
                    Player::Black
                } else {
                    Player::White
                };
                state.place(Pos::new(r, c), player);
            }
        }

        let result = searcher(2).search(&state);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_search_does_not_mutate_caller_state() {
        let mut state = BoardState::new();
        play(&mut state, &[(7, 7), (7, 8), (8, 7), (8, 8)]);
        let before = state.clone();

        let _ = searcher(2).search(&state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut state = BoardState::new();
        play(&mut state, &[(7, 7), (6, 6), (8, 8)]);

        let first = searcher(2).search(&state);
        let second = searcher(2).search(&state);
        assert_eq!(first, second);
    }

    /// Plain minimax without pruning, over the same ordered candidates.
    fn plain_minimax(
        s: &Searcher,
        board: &mut BoardState,
        depth: u32,
        maximizing: bool,
        engine: Player,
    ) -> i64 {
        match board.outcome() {
            Outcome::Win(winner) if winner == engine => {
                return s.weights.five + i64::from(depth);
            }
            Outcome::Win(_) => return -s.weights.five - i64::from(depth),
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }
        if depth == 0 {
            return evaluate_board(board, engine, &s.weights);
        }
        let candidates = s.ordered_candidates(board);
        if candidates.is_empty() {
            return evaluate_board(board, engine, &s.weights);
        }

        let mut best = if maximizing { i64::MIN } else { i64::MAX };
        for pos in candidates {
            assert!(board.apply_move(pos.row, pos.col));
            let score = plain_minimax(s, board, depth - 1, !maximizing, engine);
            board.undo_last();
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        // Pruning must not change the chosen move or its value.
        let mut state = BoardState::with_size(7);
        play(&mut state, &[(3, 3), (3, 4), (2, 3), (4, 3)]);
        assert_eq!(state.turn(), Player::Black);

        let mut s = searcher(2);
        let pruned = s.search(&state);

        let mut board = state.clone();
        let mover = board.turn();
        let candidates = s.ordered_candidates(&mut board);
        let mut best_move = None;
        let mut best_score = i64::MIN;
        for pos in candidates {
            assert!(board.apply_move(pos.row, pos.col));
            let score = plain_minimax(&s, &mut board, s.config.depth - 1, false, mover);
            board.undo_last();
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        assert_eq!(pruned.best_move, best_move);
        assert_eq!(pruned.score, best_score);
    }
}
