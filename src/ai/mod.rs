//! Opponent AI: heuristic evaluation, minimax search and difficulty policy.

pub mod eval;
pub mod policy;
pub mod search;

pub use eval::evaluate;
pub use policy::{Decision, Difficulty, DifficultyPolicy, GameTuning, MAX_SEARCH_DEPTH};
pub use search::{Horizon, SearchEngine, SearchResult, SearchStats};
