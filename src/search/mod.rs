//! Adversarial search: the minimax engine, its evaluation seam, the random
//! baseline, and the diagnostics a search leaves behind.

mod agent;
mod diagnostics;
mod engine;
mod heuristic;
mod random;

pub use agent::Agent;
pub use diagnostics::{DiagnosticsRecorder, EvaluatedMove, SearchNode, SearchReport};
pub use engine::MinimaxEngine;
pub use heuristic::{Heuristic, WindowHeuristic, WIN_SCORE};
pub use random::RandomAgent;
