//! Drop destination rules.
//!
//! Any piece may land on any empty square, except that pawns are further
//! restricted: no second unpromoted pawn on a file, no drop on the final
//! rank, and no drop that delivers immediate checkmate. The checkmate
//! exclusion recurses through the full legal generator.

use crate::game_state::board_state::BoardState;
use crate::game_state::history::History;
use crate::game_state::shogi_types::{
    slot_index, MonoBoard, Move, PieceKind, Player, Position, Square, BOARD_MASK,
};
use crate::hashing::zobrist::ZobristTable;
use crate::move_generation::checks::is_checkmate_after;
use crate::move_generation::legal_move_generator::MoveGenResult;
use crate::move_generation::movement_masks::{file_mask, rank_mask};

/// Squares where `player` may drop an in-hand `kind`. Assumes at least one
/// copy is actually in hand; the caller enumerates from hand slots.
pub fn placable_squares(
    board: &BoardState,
    history: &History,
    table: &ZobristTable,
    kind: PieceKind,
    player: Player,
) -> MoveGenResult<MonoBoard> {
    let mut placable = !board.occupancy(None) & BOARD_MASK;
    if kind != PieceKind::Pawn {
        return Ok(placable);
    }

    // Nifu: the file of the player's own unpromoted pawn is closed. Both
    // physical pawn copies are inspected since either may be the one on
    // the board.
    for home in Player::BOTH {
        if let Position::OnBoard { square, promoted, owner } =
            board.slots[slot_index(home, PieceKind::Pawn)]
        {
            if owner == player && !promoted {
                placable &= !file_mask(square.col);
            }
        }
    }

    // A pawn on the final rank could never move again.
    placable &= !rank_mask(player.promotion_rank());

    // Uchifuzume: discard destinations where the dropped pawn mates on
    // the spot.
    let mut remaining = placable;
    while remaining != 0 {
        let index = remaining.trailing_zeros() as usize;
        remaining &= remaining - 1;

        let to = Square::from_index(index);
        let drop = Move::Drop {
            piece: PieceKind::Pawn,
            to,
        };
        if is_checkmate_after(board, history, table, drop, player)? {
            placable &= !to.bit();
        }
    }

    Ok(placable)
}

#[cfg(test)]
mod tests {
    use super::placable_squares;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::history::History;
    use crate::game_state::shogi_types::{
        slot_index, PieceKind, Player, Position, Square, BOARD_MASK,
    };
    use crate::hashing::zobrist::ZobristTable;
    use crate::move_generation::movement_masks::{file_mask, rank_mask};

    fn table() -> ZobristTable {
        ZobristTable::from_seed(0x5EED)
    }

    #[test]
    fn non_pawn_drops_cover_every_empty_square() {
        let mut board = BoardState::initial();
        board.slots[slot_index(Player::Defender, PieceKind::Gold)] =
            Position::Captured(Player::Attacker);

        let placable = placable_squares(
            &board,
            &History::new(),
            &table(),
            PieceKind::Gold,
            Player::Attacker,
        )
        .expect("drop mask should compute");
        assert_eq!(placable, !board.occupancy(None) & BOARD_MASK);
        assert_eq!(placable.count_ones(), 25 - 11);
    }

    #[test]
    fn pawn_drops_avoid_own_pawn_files_and_the_final_rank() {
        let mut board = BoardState::initial();
        // Own unpromoted pawn stands on file 1; the in-hand copy is the
        // captured defender pawn.
        board.slots[slot_index(Player::Defender, PieceKind::Pawn)] =
            Position::Captured(Player::Attacker);

        let placable = placable_squares(
            &board,
            &History::new(),
            &table(),
            PieceKind::Pawn,
            Player::Attacker,
        )
        .expect("drop mask should compute");

        assert_eq!(placable & file_mask(1), 0);
        assert_eq!(placable & rank_mask(5), 0);
        // An open mid-board square stays available.
        assert_ne!(placable & Square::new(3, 3).bit(), 0);
    }

    #[test]
    fn a_promoted_pawn_does_not_close_its_file() {
        let mut board = BoardState::initial();
        board.slots[slot_index(Player::Attacker, PieceKind::Pawn)] = Position::OnBoard {
            square: Square::new(4, 1),
            promoted: true,
            owner: Player::Attacker,
        };
        board.slots[slot_index(Player::Defender, PieceKind::Pawn)] =
            Position::Captured(Player::Attacker);

        let placable = placable_squares(
            &board,
            &History::new(),
            &table(),
            PieceKind::Pawn,
            Player::Attacker,
        )
        .expect("drop mask should compute");
        assert_ne!(placable & Square::new(3, 1).bit(), 0);
    }

    #[test]
    fn pawn_drop_checkmate_squares_are_excluded() {
        // Defender king cornered at 55; an attacker gold at 53 and silver
        // at 34 cover every flight square, so a pawn landing on 45 would
        // be mate and must be excluded. A pawn on 44 merely checks nothing.
        let mut board = BoardState {
            slots: [Position::Captured(Player::Attacker); 12],
        };
        board.slots[slot_index(Player::Attacker, PieceKind::King)] = Position::OnBoard {
            square: Square::new(1, 1),
            promoted: false,
            owner: Player::Attacker,
        };
        board.slots[slot_index(Player::Attacker, PieceKind::Gold)] = Position::OnBoard {
            square: Square::new(5, 3),
            promoted: false,
            owner: Player::Attacker,
        };
        board.slots[slot_index(Player::Attacker, PieceKind::Silver)] = Position::OnBoard {
            square: Square::new(3, 4),
            promoted: false,
            owner: Player::Attacker,
        };
        board.slots[slot_index(Player::Defender, PieceKind::King)] = Position::OnBoard {
            square: Square::new(5, 5),
            promoted: false,
            owner: Player::Defender,
        };

        let placable = placable_squares(
            &board,
            &History::new(),
            &table(),
            PieceKind::Pawn,
            Player::Attacker,
        )
        .expect("drop mask should compute");

        assert_eq!(placable & Square::new(4, 5).bit(), 0);
        assert_ne!(placable & Square::new(4, 4).bit(), 0);
    }
}
