//! Legal-move tree walker for validating the generator.
//!
//! Counts leaf nodes of the legal move tree. Every ply pushes its position
//! hash onto a scratch history so the repetition and perpetual-check
//! filters see the same state they would in a real game.

use crate::game_state::board_state::BoardState;
use crate::game_state::history::History;
use crate::hashing::zobrist::ZobristTable;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::legal_move_generator::{legal_moves, MoveGenError, MoveGenResult};

pub fn perft(
    board: &BoardState,
    history: &History,
    table: &ZobristTable,
    depth: u8,
) -> MoveGenResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let player = history.side_to_move();
    let mut nodes = 0;
    for mv in legal_moves(board, history, table)? {
        let next = apply_move(board, mv, player).map_err(MoveGenError::InvalidState)?;
        if depth == 1 {
            nodes += 1;
            continue;
        }
        let mut scratch = history.clone();
        scratch.push(table.hash_board(&next, player));
        nodes += perft(&next, &scratch, table, depth - 1)?;
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::history::History;
    use crate::hashing::zobrist::ZobristTable;

    #[test]
    fn depth_zero_counts_the_root_itself() {
        let table = ZobristTable::from_seed(3);
        let nodes =
            perft(&BoardState::initial(), &History::new(), &table, 0).expect("perft should run");
        assert_eq!(nodes, 1);
    }

    #[test]
    fn depth_one_matches_the_root_move_count() {
        let table = ZobristTable::from_seed(3);
        let nodes =
            perft(&BoardState::initial(), &History::new(), &table, 1).expect("perft should run");
        assert_eq!(nodes, 14);
    }

    #[test]
    fn deeper_counts_are_seed_independent() {
        let board = BoardState::initial();
        let history = History::new();
        let a = perft(&board, &history, &ZobristTable::from_seed(3), 2)
            .expect("perft should run");
        let b = perft(&board, &history, &ZobristTable::from_seed(4), 2)
            .expect("perft should run");
        assert_eq!(a, b);
        // Every attacker opening leaves the defender a nonempty reply set.
        assert!(a >= 14);
    }
}
