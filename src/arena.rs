//! Engine-vs-engine match runner: pits two searches of (possibly) different
//! depths against each other on one board and collects their reports.

use std::time::Duration;

use crate::config::MoveOrder;
use crate::error::MatchError;
use crate::game::{Board, GameResult, Player};
use crate::search::{MinimaxEngine, SearchReport};

/// Settings for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub depth_red: u32,
    pub depth_yellow: u32,
    /// Hard stop after this many plies, win or no win.
    pub turn_limit: usize,
    pub move_order: MoveOrder,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            depth_red: 4,
            depth_yellow: 4,
            turn_limit: 64,
            move_order: MoveOrder::default(),
        }
    }
}

/// One ply of a finished match.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub turn: usize,
    pub mover: Player,
    pub column: usize,
    pub report: SearchReport,
}

/// Everything a match produced.
#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub result: GameResult,
    pub turns: Vec<TurnRecord>,
    pub total_nodes: u64,
    pub total_elapsed: Duration,
    /// The turn limit cut the game short of a terminal position.
    pub turn_limit_hit: bool,
}

impl MatchSummary {
    pub fn winner(&self) -> Option<Player> {
        match self.result {
            GameResult::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Play both engines to completion (or the turn limit) from the empty board.
///
/// Searches here are pure: the process-wide diagnostics slot belongs to the
/// interactive game and batch matches leave it alone. Per-turn reports are
/// collected in the summary instead.
pub fn run_match(config: &MatchConfig) -> Result<MatchSummary, MatchError> {
    let mut board = Board::new();
    let red = MinimaxEngine::from_config(&crate::config::EngineConfig {
        search_depth: config.depth_red,
        move_order: config.move_order,
    });
    let yellow = MinimaxEngine::from_config(&crate::config::EngineConfig {
        search_depth: config.depth_yellow,
        move_order: config.move_order,
    });

    let mut turns = Vec::new();
    let mut total_nodes: u64 = 0;
    let mut total_elapsed = Duration::ZERO;

    for turn in 1..=config.turn_limit {
        if board.detect_result() != GameResult::Ongoing {
            break;
        }
        let mover = board.to_move();
        let engine = match mover {
            Player::Red => &red,
            Player::Yellow => &yellow,
        };
        let report = engine.search(&mut board)?;
        let column = report.chosen_column;
        board.apply_move(column)?;
        log::debug!(
            "turn {turn}: {} plays column {column} ({} nodes)",
            mover.name(),
            report.nodes_expanded
        );

        total_nodes += report.nodes_expanded;
        total_elapsed += report.elapsed;
        turns.push(TurnRecord {
            turn,
            mover,
            column,
            report,
        });
    }

    let result = board.detect_result();
    Ok(MatchSummary {
        result,
        turns,
        total_nodes,
        total_elapsed,
        turn_limit_hit: result == GameResult::Ongoing,
    })
}
