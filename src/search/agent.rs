use crate::error::SearchError;
use crate::game::Board;

/// Interface through which a hosting collaborator drives any move-selecting
/// player, engine-backed or not.
///
/// An implementation may mutate the board while deliberating but must return
/// it in the state it received it; the host applies the selected column
/// itself.
pub trait Agent {
    /// Select a column for the side to move.
    fn select_move(&mut self, board: &mut Board) -> Result<usize, SearchError>;

    /// Display name for logs and match summaries.
    fn name(&self) -> &str;
}
