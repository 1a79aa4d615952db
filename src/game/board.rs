use std::fmt;

use serde::Serialize;

use crate::error::MoveError;

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

/// Outcome of result detection after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameResult {
    Ongoing,
    Win(Player),
    Draw,
}

/// Mutable Connect Four position: grid, per-column fill heights, side to move,
/// and the stack of applied moves.
///
/// The search mutates a single board down the call stack via
/// [`Board::apply_move`] / [`Board::undo_move`] instead of cloning per node;
/// an apply followed by its undo restores the exact prior state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
    to_move: Player,
    history: Vec<(usize, usize)>,
}

impl Board {
    /// Create a new empty board with Red to move.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
            to_move: Player::Red,
            history: Vec::with_capacity(ROWS * COLS),
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row 5 is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// The side whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The (row, col) of the most recently applied move, if any.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.history.last().copied()
    }

    /// Number of pieces on the board.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Whether dropping into `col` is currently legal.
    pub fn is_legal(&self, col: usize) -> bool {
        col < COLS && self.heights[col] < ROWS
    }

    /// All columns that can accept a piece, in ascending index order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.heights[col] < ROWS).collect()
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        self.history.len() == ROWS * COLS
    }

    /// Drop the side-to-move's piece into `col`. Returns the landing row.
    ///
    /// Advances the column height, pushes the move onto the history stack and
    /// passes the turn. Callers that are searching must later restore the
    /// position with [`Board::undo_move`] on the same column.
    pub fn apply_move(&mut self, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if self.heights[col] >= ROWS {
            return Err(MoveError::ColumnFull(col));
        }

        let row = ROWS - 1 - self.heights[col];
        self.cells[row][col] = self.to_move.to_cell();
        self.heights[col] += 1;
        self.history.push((row, col));
        self.to_move = self.to_move.other();
        Ok(row)
    }

    /// Remove the top piece of `col`, restoring the exact state from before
    /// the matching [`Board::apply_move`]. Moves must be undone in reverse
    /// order of application.
    pub fn undo_move(&mut self, col: usize) -> Result<(), MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if self.heights[col] == 0 {
            return Err(MoveError::EmptyColumn(col));
        }
        match self.history.last() {
            Some(&(_, last)) if last != col => {
                return Err(MoveError::UndoOutOfOrder { column: col, last });
            }
            _ => {}
        }

        self.history.pop();
        self.heights[col] -= 1;
        let row = ROWS - 1 - self.heights[col];
        self.cells[row][col] = Cell::Empty;
        self.to_move = self.to_move.other();
        Ok(())
    }

    /// Result of the position after the most recent move.
    ///
    /// Scans only the four axes through the just-placed cell, counting
    /// contiguous same-side pieces in both directions, so each call is O(1)
    /// regardless of how full the board is. The search relies on this at
    /// every node.
    pub fn detect_result(&self) -> GameResult {
        let (row, col) = match self.history.last() {
            Some(&placed) => placed,
            None => return GameResult::Ongoing,
        };
        let cell = self.cells[row][col];

        // (dr, dc) per axis: horizontal, vertical, the two diagonals
        for (dr, dc) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
            let count =
                1 + self.ray_len(row, col, dr, dc, cell) + self.ray_len(row, col, -dr, -dc, cell);
            if count >= 4 {
                if let Some(winner) = cell.player() {
                    return GameResult::Win(winner);
                }
            }
        }

        if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }

    /// Contiguous same-cell run starting one step from (row, col) along
    /// (dr, dc).
    fn ray_len(&self, row: usize, col: usize, dr: i32, dc: i32, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        while r >= 0
            && r < ROWS as i32
            && c >= 0
            && c < COLS as i32
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Clear the board back to the empty position with Red to move.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
        self.heights = [0; COLS];
        self.to_move = Player::Red;
        self.history.clear();
    }

    /// Plain-text rendering: `.` empty, `X` Red, `O` Yellow, with a column
    /// index footer.
    pub fn render_ascii(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| {
                let cells: Vec<&str> = row
                    .iter()
                    .map(|cell| match cell {
                        Cell::Empty => ".",
                        Cell::Red => "X",
                        Cell::Yellow => "O",
                    })
                    .collect();
                format!("|{}|", cells.join(" "))
            })
            .collect();
        let footer: Vec<String> = (0..COLS).map(|c| c.to_string()).collect();
        lines.push(format!(" {}", footer.join(" ")));
        lines.join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_ascii())
    }
}
