//! Engine abstraction layer.
//!
//! A single trait interface so different move-selection strategies can be
//! swapped behind the interactive loop and test harnesses.

use crate::game_state::board_state::BoardState;
use crate::game_state::history::History;
use crate::game_state::shogi_types::Move;
use crate::hashing::zobrist::ZobristTable;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Pick a move for the side to move, or `None` when no legal move
    /// exists and the game is over.
    fn choose_move(
        &mut self,
        board: &BoardState,
        history: &History,
        table: &ZobristTable,
    ) -> Result<Option<Move>, String>;
}
