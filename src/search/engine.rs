use std::time::Instant;

use crate::config::{EngineConfig, MoveOrder};
use crate::error::SearchError;
use crate::game::{Board, GameResult, Player};

use super::agent::Agent;
use super::diagnostics::{DiagnosticsRecorder, EvaluatedMove, SearchNode, SearchReport};
use super::heuristic::{Heuristic, WindowHeuristic, WIN_SCORE};

/// Depth-limited minimax with alpha-beta pruning.
///
/// The engine searches on behalf of whichever side is to move on the board
/// it is handed. It mutates the board down the recursion via apply/undo and
/// returns it in the exact state it received it.
pub struct MinimaxEngine {
    depth: u32,
    move_order: MoveOrder,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxEngine {
    /// Engine with the default window heuristic and ascending column order.
    pub fn new(depth: u32) -> Self {
        MinimaxEngine {
            depth,
            move_order: MoveOrder::default(),
            heuristic: Box::new(WindowHeuristic),
        }
    }

    /// Engine configured from an [`EngineConfig`].
    pub fn from_config(config: &EngineConfig) -> Self {
        MinimaxEngine {
            depth: config.search_depth,
            move_order: config.move_order,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    /// Engine with a caller-supplied evaluation function.
    pub fn with_heuristic(depth: u32, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxEngine {
            depth,
            move_order: MoveOrder::default(),
            heuristic,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Run a full search and pick a column for the side to move.
    ///
    /// Pure with respect to process state: nothing is recorded or logged.
    /// The board comes back untouched (every apply is undone).
    pub fn search(&self, board: &mut Board) -> Result<SearchReport, SearchError> {
        if self.depth == 0 {
            return Err(SearchError::InvalidConfiguration(self.depth));
        }
        if board.legal_moves().is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let player = board.to_move();
        let start = Instant::now();
        let mut nodes: u64 = 1; // the root invocation itself

        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut best_score = i32::MIN;
        let mut best_column = None;
        let mut principal_variation = Vec::new();
        let mut children = Vec::new();
        let mut evaluated_moves = Vec::new();

        // Root level: every legal column gets its own full search so the
        // evaluations stay complete. With beta unbounded a root cutoff could
        // never fire anyway, so there is no break in this loop.
        for col in self.move_order.columns() {
            if board.apply_move(col).is_err() {
                continue;
            }
            let (score, node, variation) = self.minimax(
                board,
                self.depth - 1,
                alpha,
                beta,
                false,
                player,
                Some(col),
                &mut nodes,
            );
            let undone = board.undo_move(col);
            debug_assert!(undone.is_ok());

            evaluated_moves.push(EvaluatedMove { column: col, score });
            children.push(node);
            // Strictly better only: ties keep the earliest-explored column
            if score > best_score {
                best_score = score;
                best_column = Some(col);
                principal_variation.clear();
                principal_variation.push(col);
                principal_variation.extend(variation);
            }
            alpha = alpha.max(best_score);
        }

        let chosen_column = best_column.ok_or(SearchError::NoLegalMoves)?;
        let tree = SearchNode {
            column: None,
            score: best_score,
            maximizing: true,
            children,
        };

        Ok(SearchReport {
            chosen_column,
            principal_variation,
            evaluated_moves,
            tree,
            nodes_expanded: nodes,
            elapsed: start.elapsed(),
            search_depth: self.depth,
        })
    }

    /// Search, publish the report through [`DiagnosticsRecorder`], and emit
    /// the per-move log record. This is the entry point for an AI turn.
    pub fn choose_move(&self, board: &mut Board) -> Result<(usize, SearchReport), SearchError> {
        let report = self.search(board)?;
        DiagnosticsRecorder::record(&report);
        log::info!(
            "AI move: column {} (depth {}, {} nodes, {:.3}s)",
            report.chosen_column,
            report.search_depth,
            report.nodes_expanded,
            report.elapsed_secs()
        );
        Ok((report.chosen_column, report))
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        player: Player,
        column: Option<usize>,
        nodes: &mut u64,
    ) -> (i32, SearchNode, Vec<usize>) {
        *nodes += 1;

        let result = board.detect_result();
        if depth == 0 || result != GameResult::Ongoing {
            let score = match result {
                // Bias by remaining depth: take the shortest win, delay the loss
                GameResult::Win(winner) if winner == player => WIN_SCORE + depth as i32,
                GameResult::Win(_) => -(WIN_SCORE + depth as i32),
                GameResult::Draw => 0,
                GameResult::Ongoing => self.heuristic.score(board, player),
            };
            let node = SearchNode {
                column,
                score,
                maximizing,
                children: Vec::new(),
            };
            return (score, node, Vec::new());
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        let mut children = Vec::new();
        let mut variation = Vec::new();

        for col in self.move_order.columns() {
            if board.apply_move(col).is_err() {
                continue;
            }
            let (score, node, child_variation) = self.minimax(
                board,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                player,
                Some(col),
                nodes,
            );
            // Restore before anything else so every exit path, the pruning
            // break included, leaves the board as it was
            let undone = board.undo_move(col);
            debug_assert!(undone.is_ok());

            children.push(node);
            let improved = if maximizing { score > best } else { score < best };
            if improved {
                best = score;
                variation.clear();
                variation.push(col);
                variation.extend(child_variation);
            }
            if maximizing {
                alpha = alpha.max(best);
            } else {
                beta = beta.min(best);
            }
            if alpha >= beta {
                // Remaining siblings cannot affect the result; they are never
                // visited and never appear in the diagnostics tree
                break;
            }
        }

        let node = SearchNode {
            column,
            score: best,
            maximizing,
            children,
        };
        (best, node, variation)
    }
}

impl Agent for MinimaxEngine {
    fn select_move(&mut self, board: &mut Board) -> Result<usize, SearchError> {
        let (column, _) = self.choose_move(board)?;
        Ok(column)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
