use crate::game::{Board, Cell, Player, COLS, ROWS};

/// Sentinel magnitude for a forced win. The search biases it by remaining
/// depth so a shallower win outranks a deeper one, and a deeper loss
/// outranks a shallower one.
pub const WIN_SCORE: i32 = 1_000_000;

/// Static evaluation of a non-terminal position for the searching side.
pub trait Heuristic: Send {
    fn score(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic: every axis-aligned 4-cell window is weighted by its
/// piece counts, own windows positive and the opponent's symmetric windows
/// negated, plus a small bonus per piece in the center column.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn weigh(own: usize, opp: usize, empty: usize) -> i32 {
        let mut score = 0;
        if own == 4 {
            score += 100;
        } else if own == 3 && empty == 1 {
            score += 5;
        } else if own == 2 && empty == 2 {
            score += 2;
        }
        if opp == 3 && empty == 1 {
            score -= 4;
        }
        score
    }

    fn window_score(board: &Board, row: usize, col: usize, dr: i32, dc: i32, own: Cell) -> i32 {
        let mut own_count = 0;
        let mut opp_count = 0;
        let mut empty = 0;
        for i in 0..4 {
            let r = (row as i32 + i * dr) as usize;
            let c = (col as i32 + i * dc) as usize;
            match board.get(r, c) {
                Cell::Empty => empty += 1,
                cell if cell == own => own_count += 1,
                _ => opp_count += 1,
            }
        }
        // Symmetric: the same window scored from the opponent's side, negated
        Self::weigh(own_count, opp_count, empty) - Self::weigh(opp_count, own_count, empty)
    }
}

impl Heuristic for WindowHeuristic {
    fn score(&self, board: &Board, player: Player) -> i32 {
        let own = player.to_cell();
        let opp = player.other().to_cell();
        let mut score = 0;

        // Center column occupancy
        for row in 0..ROWS {
            let cell = board.get(row, COLS / 2);
            if cell == own {
                score += 3;
            } else if cell == opp {
                score -= 3;
            }
        }

        // Horizontal windows
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                score += Self::window_score(board, row, col, 0, 1, own);
            }
        }

        // Vertical windows
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                score += Self::window_score(board, row, col, 1, 0, own);
            }
        }

        // Diagonal windows (top-left to bottom-right)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                score += Self::window_score(board, row, col, 1, 1, own);
            }
        }

        // Diagonal windows (top-right to bottom-left)
        for row in 0..ROWS - 3 {
            for col in 3..COLS {
                score += Self::window_score(board, row, col, 1, -1, own);
            }
        }

        score
    }
}
