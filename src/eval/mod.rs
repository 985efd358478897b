//! Position evaluation and heuristics

pub mod heuristic;
pub mod patterns;

// Re-exports
pub use heuristic::{evaluate_board, evaluate_line, evaluate_point, evaluate_position};
pub use patterns::PatternWeights;
