//! # Connect Four engine
//!
//! The adversarial search core behind a Connect Four computer player:
//! a mutable board with apply/undo traversal, a window-counting position
//! heuristic, depth-limited minimax with alpha-beta pruning, and structured
//! search diagnostics for rendering collaborators.
//!
//! Presentation is deliberately absent: terminal loops, desktop widgets and
//! web templates live in the hosts that call into this crate.
//!
//! ## Modules
//!
//! - [`game`] — Board state, legality, incremental win/draw detection
//! - [`search`] — Minimax engine, heuristic seam, diagnostics recorder
//! - [`arena`] — Engine-vs-engine match runner
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ## Example
//!
//! ```
//! use connectfour_engine::game::Board;
//! use connectfour_engine::search::MinimaxEngine;
//!
//! let mut board = Board::new();
//! board.apply_move(3).unwrap(); // the human opens in the center
//!
//! let engine = MinimaxEngine::new(4);
//! let (column, report) = engine.choose_move(&mut board).unwrap();
//! board.apply_move(column).unwrap();
//! assert_eq!(report.evaluated_moves.len(), board.legal_moves().len());
//! ```

pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod search;
