//! Best-first search solver for generalized sliding-tile (n-puzzle) boards.

mod frontier;
mod heuristic;
mod search;
mod state;

pub use frontier::PriorityFrontier;
pub use heuristic::Heuristic;
pub use search::{solve, SearchResult, SolveError};
pub use state::{Move, PuzzleState, StateId, BLANK};
