//! Connect-five (gomoku) game engine with a minimax computer opponent
//!
//! A 15x15 five-in-a-row engine for human-vs-human or human-vs-computer
//! play. The computer opponent runs depth-limited minimax with alpha-beta
//! pruning over a heuristically ordered, breadth-capped candidate set.
//!
//! # Architecture
//!
//! - [`board`]: Board state (grid, move history, turn order, outcome)
//! - [`rules`]: Win detection
//! - [`eval`]: Pattern weights and position heuristics
//! - [`search`]: Minimax search with alpha-beta pruning
//! - [`engine`]: Engine facade with opening policies and statistics
//!
//! # Quick Start
//!
//! ```
//! use connect_five::{BoardState, Engine};
//!
//! let mut state = BoardState::new();
//! let mut engine = Engine::with_depth(1);
//!
//! // Human opens at the center
//! assert!(state.apply_move(7, 7));
//!
//! // Engine replies as White
//! if let Some(pos) = engine.get_move(&state) {
//!     state.apply_move(pos.row, pos.col);
//! }
//! ```
//!
//! # Search outline
//!
//! 1. Opening policies: center on an empty board, a random adjacent reply
//!    to the opponent's first stone.
//! 2. Candidate generation: empty cells near existing stones, ranked by a
//!    pattern heuristic and truncated to a depth-derived breadth cap.
//! 3. Minimax with alpha-beta pruning over apply/undo speculation; the
//!    caller's board is never mutated.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{BoardState, MoveRecord, Outcome, Player, Pos, DEFAULT_BOARD_SIZE};
pub use engine::{Engine, MoveResult};
pub use eval::PatternWeights;
pub use search::{SearchConfig, SearchResult, Searcher};
