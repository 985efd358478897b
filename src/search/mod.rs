//! Search algorithms for the computer opponent

pub mod minimax;

// Re-exports
pub use minimax::{SearchConfig, SearchResult, Searcher, DEFAULT_DEPTH};
