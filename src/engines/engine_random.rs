//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for the
//! computer side of the interactive loop and for playout testing.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::board_state::BoardState;
use crate::game_state::history::History;
use crate::game_state::shogi_types::Move;
use crate::hashing::zobrist::ZobristTable;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        board: &BoardState,
        history: &History,
        table: &ZobristTable,
    ) -> Result<Option<Move>, String> {
        let moves = legal_moves(board, history, table).map_err(|e| e.to_string())?;
        let mut rng = rand::rng();
        Ok(moves.as_slice().choose(&mut rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::history::History;
    use crate::game_state::shogi_types::{
        slot_index, Move, PieceKind, Player, Position, Square,
    };
    use crate::hashing::zobrist::ZobristTable;

    #[test]
    fn picks_a_legal_opening_move() {
        let mut engine = RandomEngine::new();
        let table = ZobristTable::from_seed(9);
        let mv = engine
            .choose_move(&BoardState::initial(), &History::new(), &table)
            .expect("engine should run");
        assert!(matches!(mv, Some(Move::Step { .. })));
    }

    #[test]
    fn reports_no_move_when_mated() {
        let mut board = BoardState {
            slots: [Position::Captured(Player::Attacker); 12],
        };
        board.slots[slot_index(Player::Attacker, PieceKind::King)] = Position::OnBoard {
            square: Square::new(3, 3),
            promoted: false,
            owner: Player::Attacker,
        };
        board.slots[slot_index(Player::Attacker, PieceKind::Gold)] = Position::OnBoard {
            square: Square::new(4, 4),
            promoted: false,
            owner: Player::Attacker,
        };
        board.slots[slot_index(Player::Defender, PieceKind::King)] = Position::OnBoard {
            square: Square::new(5, 5),
            promoted: false,
            owner: Player::Defender,
        };

        let table = ZobristTable::from_seed(9);
        let mut history = History::new();
        history.push(table.hash_board(&board, Player::Attacker));

        let mut engine = RandomEngine::new();
        let mv = engine
            .choose_move(&board, &history, &table)
            .expect("engine should run");
        assert_eq!(mv, None);
    }
}
