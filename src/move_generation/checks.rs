//! Check and checkmate detection.
//!
//! Check is detected from a danger map: the union of every opposing
//! on-board piece's movable squares. Checkmate detection applies the move
//! to scratch state and asks the full legal generator for replies, which
//! recurses back through the drop rules; a thread-local depth counter
//! guards the termination argument of that mutual recursion in debug
//! builds.

use std::cell::Cell;

use crate::game_state::board_state::BoardState;
use crate::game_state::history::History;
use crate::game_state::shogi_types::{slot_kind, MonoBoard, Move, Player, Position, SLOT_COUNT};
use crate::hashing::zobrist::ZobristTable;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::legal_move_generator::{legal_moves, MoveGenError, MoveGenResult};
use crate::move_generation::movement_masks::movable_squares;

/// Union of all squares `player`'s on-board pieces could move to.
pub fn attack_map(board: &BoardState, player: Player) -> MonoBoard {
    let mut map = 0;
    for slot in 0..SLOT_COUNT {
        if let Position::OnBoard { square, promoted, owner } = board.slots[slot] {
            if owner == player {
                map |= movable_squares(board, square, slot_kind(slot), owner, promoted);
            }
        }
    }
    map
}

/// True when `player`'s king stands on a square the opponent can reach.
pub fn is_in_check(board: &BoardState, player: Player) -> bool {
    match board.king_square(player) {
        Some(king) => attack_map(board, player.opposite()) & king.bit() != 0,
        None => false,
    }
}

/// True when playing `mv` would leave the mover's own king in check.
pub fn would_be_checked_after(
    board: &BoardState,
    mv: Move,
    player: Player,
) -> MoveGenResult<bool> {
    let next = apply_move(board, mv, player).map_err(MoveGenError::InvalidState)?;
    Ok(is_in_check(&next, player))
}

/// True when playing `mv` leaves the opponent checked with zero legal
/// replies. The not-in-check short circuit is only a fast path: checkmate
/// implies check, so skipping enumeration there is always safe.
pub fn is_checkmate_after(
    board: &BoardState,
    history: &History,
    table: &ZobristTable,
    mv: Move,
    player: Player,
) -> MoveGenResult<bool> {
    let _depth = MateSearchDepth::enter();

    let next = apply_move(board, mv, player).map_err(MoveGenError::InvalidState)?;
    let mut scratch = history.clone();
    scratch.push(table.hash_board(&next, player));

    if !is_in_check(&next, player.opposite()) {
        return Ok(false);
    }
    Ok(legal_moves(&next, &scratch, table)?.is_empty())
}

thread_local! {
    static MATE_SEARCH_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Each nesting level of the drop-checkmate recursion consumes one pawn
/// drop, so the depth is bounded by the drop options in flight. The bound
/// below has slack; hitting it means a rule change broke the termination
/// argument.
struct MateSearchDepth;

impl MateSearchDepth {
    fn enter() -> Self {
        MATE_SEARCH_DEPTH.with(|depth| {
            let nested = depth.get() + 1;
            depth.set(nested);
            debug_assert!(
                nested <= 8,
                "drop-checkmate recursion exceeded its pawn-drop bound"
            );
        });
        MateSearchDepth
    }
}

impl Drop for MateSearchDepth {
    fn drop(&mut self) {
        MATE_SEARCH_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::{is_checkmate_after, is_in_check, would_be_checked_after};
    use crate::game_state::board_state::BoardState;
    use crate::game_state::history::History;
    use crate::game_state::shogi_types::{
        slot_index, Move, PieceKind, Player, Position, Square,
    };
    use crate::hashing::zobrist::ZobristTable;

    /// All twelve pieces in the attacker's hand; tests place what they need.
    fn bare_board() -> BoardState {
        BoardState {
            slots: [Position::Captured(Player::Attacker); 12],
        }
    }

    fn place(board: &mut BoardState, home: Player, kind: PieceKind, owner: Player, sq: Square) {
        board.slots[slot_index(home, kind)] = Position::OnBoard {
            square: sq,
            promoted: false,
            owner,
        };
    }

    #[test]
    fn start_position_has_no_checks() {
        let board = BoardState::initial();
        assert!(!is_in_check(&board, Player::Attacker));
        assert!(!is_in_check(&board, Player::Defender));
    }

    #[test]
    fn rook_on_an_open_file_gives_check() {
        let mut board = bare_board();
        place(&mut board, Player::Attacker, PieceKind::King, Player::Attacker, Square::new(1, 1));
        place(&mut board, Player::Defender, PieceKind::King, Player::Defender, Square::new(5, 5));
        place(&mut board, Player::Attacker, PieceKind::Rook, Player::Attacker, Square::new(1, 5));
        assert!(is_in_check(&board, Player::Defender));
        assert!(!is_in_check(&board, Player::Attacker));
    }

    #[test]
    fn moving_a_pinned_piece_would_be_checked() {
        let mut board = bare_board();
        place(&mut board, Player::Attacker, PieceKind::King, Player::Attacker, Square::new(1, 3));
        place(&mut board, Player::Attacker, PieceKind::Gold, Player::Attacker, Square::new(3, 3));
        place(&mut board, Player::Defender, PieceKind::Rook, Player::Defender, Square::new(5, 3));
        place(&mut board, Player::Defender, PieceKind::King, Player::Defender, Square::new(5, 5));

        // The gold shields the king from the rook; stepping sideways
        // exposes it, stepping forward keeps the shield.
        let sideways = Move::Step {
            from: Square::new(3, 3),
            to: Square::new(3, 4),
            promote: false,
        };
        let forward = Move::Step {
            from: Square::new(3, 3),
            to: Square::new(4, 3),
            promote: false,
        };
        assert!(would_be_checked_after(&board, sideways, Player::Attacker)
            .expect("apply should succeed"));
        assert!(!would_be_checked_after(&board, forward, Player::Attacker)
            .expect("apply should succeed"));
    }

    #[test]
    fn gold_backed_by_the_king_delivers_checkmate() {
        let mut board = bare_board();
        place(&mut board, Player::Attacker, PieceKind::King, Player::Attacker, Square::new(3, 3));
        place(&mut board, Player::Attacker, PieceKind::Gold, Player::Attacker, Square::new(4, 3));
        place(&mut board, Player::Defender, PieceKind::King, Player::Defender, Square::new(5, 5));

        let table = ZobristTable::from_seed(0x5EED);
        let history = History::new();
        let mate = Move::Step {
            from: Square::new(4, 3),
            to: Square::new(4, 4),
            promote: false,
        };
        assert!(is_checkmate_after(&board, &history, &table, mate, Player::Attacker)
            .expect("mate probe should succeed"));

        // The same gold one file further left checks nothing.
        let quiet = Move::Step {
            from: Square::new(4, 3),
            to: Square::new(4, 2),
            promote: false,
        };
        assert!(!is_checkmate_after(&board, &history, &table, quiet, Player::Attacker)
            .expect("mate probe should succeed"));
    }

    #[test]
    fn check_with_an_escape_square_is_not_checkmate() {
        let mut board = bare_board();
        place(&mut board, Player::Attacker, PieceKind::King, Player::Attacker, Square::new(1, 1));
        place(&mut board, Player::Attacker, PieceKind::Rook, Player::Attacker, Square::new(1, 5));
        place(&mut board, Player::Defender, PieceKind::King, Player::Defender, Square::new(4, 5));

        // Rook to 25 checks down the file, but the king slips to file 4.
        let check = Move::Step {
            from: Square::new(1, 5),
            to: Square::new(2, 5),
            promote: false,
        };
        let table = ZobristTable::from_seed(0x5EED);
        let history = History::new();
        assert!(!is_checkmate_after(&board, &history, &table, check, Player::Attacker)
            .expect("mate probe should succeed"));
    }
}
