//! Full legal move generation pipeline.
//!
//! Orchestrates drop and step candidate generation, then filters each
//! candidate: self-check outcomes, the attacker's fourfold-repetition ban,
//! and fourfold perpetual check. The side to move is derived from history
//! turn parity, never stored on the board.

use std::error::Error;
use std::fmt;

use crate::game_state::board_state::BoardState;
use crate::game_state::history::History;
use crate::game_state::shogi_types::{
    slot_index, Move, PieceKind, Player, Position, Square,
};
use crate::hashing::zobrist::ZobristTable;
use crate::move_generation::checks::{is_in_check, would_be_checked_after};
use crate::move_generation::drop_rules::placable_squares;
use crate::move_generation::movement_masks::movable_squares;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenError {
    InvalidState(String),
}

impl fmt::Display for MoveGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenError::InvalidState(reason) => {
                write!(f, "move generation reached an invalid state: {reason}")
            }
        }
    }
}

impl Error for MoveGenError {}

pub type MoveGenResult<T> = Result<T, MoveGenError>;

/// Every legal move for the side to move. An empty result means the game
/// is over and the side to move has lost.
pub fn legal_moves(
    board: &BoardState,
    history: &History,
    table: &ZobristTable,
) -> MoveGenResult<Vec<Move>> {
    let player = history.side_to_move();
    let mut legal = Vec::with_capacity(32);

    for kind in PieceKind::ALL {
        for home in Player::BOTH {
            let slot = slot_index(home, kind);
            match board.slots[slot] {
                Position::Captured(holder) if holder == player => {
                    // With both copies of a kind in hand only one slot
                    // generates drops, otherwise every drop would appear
                    // twice.
                    if board.hand_slot(kind, player) != Some(slot) {
                        continue;
                    }
                    let mut placable = placable_squares(board, history, table, kind, player)?;
                    while placable != 0 {
                        let index = placable.trailing_zeros() as usize;
                        placable &= placable - 1;
                        let candidate = Move::Drop {
                            piece: kind,
                            to: Square::from_index(index),
                        };
                        if passes_filters(board, history, table, candidate, player)? {
                            legal.push(candidate);
                        }
                    }
                }
                Position::OnBoard { square, promoted, owner } if owner == player => {
                    let mut reach = movable_squares(board, square, kind, owner, promoted);
                    while reach != 0 {
                        let index = reach.trailing_zeros() as usize;
                        reach &= reach - 1;
                        let to = Square::from_index(index);

                        let may_promote = kind.is_promotable()
                            && !promoted
                            && (square.row == player.promotion_rank()
                                || to.row == player.promotion_rank());

                        // A pawn entering the zone must promote; every
                        // other promotable piece chooses.
                        if !(may_promote && kind == PieceKind::Pawn) {
                            let plain = Move::Step {
                                from: square,
                                to,
                                promote: false,
                            };
                            if passes_filters(board, history, table, plain, player)? {
                                legal.push(plain);
                            }
                        }
                        if may_promote {
                            let promoting = Move::Step {
                                from: square,
                                to,
                                promote: true,
                            };
                            if passes_filters(board, history, table, promoting, player)? {
                                legal.push(promoting);
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }

    Ok(legal)
}

fn passes_filters(
    board: &BoardState,
    history: &History,
    table: &ZobristTable,
    mv: Move,
    player: Player,
) -> MoveGenResult<bool> {
    if would_be_checked_after(board, mv, player)? {
        return Ok(false);
    }
    if player == Player::Attacker && is_repetitive_move(board, history, table, mv, player)? {
        return Ok(false);
    }
    if is_fourfold_check_move(board, history, table, mv, player)? {
        return Ok(false);
    }
    Ok(true)
}

/// True when playing `mv` would produce the same position (hash keyed by
/// the mover) for the fourth time. Only the attacker is barred from this;
/// the defender may force the repetition.
pub fn is_repetitive_move(
    board: &BoardState,
    history: &History,
    table: &ZobristTable,
    mv: Move,
    player: Player,
) -> MoveGenResult<bool> {
    let next = apply_for_filter(board, mv, player)?;
    let candidate = table.hash_board(&next, player);
    let occurrences = 1 + history
        .hashes()
        .iter()
        .filter(|&&hash| hash == candidate)
        .count();
    Ok(occurrences >= 4)
}

/// True when `mv` gives check and its position hash already appeared at
/// each of the mover's three previous turns. Requires six half-moves of
/// history before it can evaluate at all.
pub fn is_fourfold_check_move(
    board: &BoardState,
    history: &History,
    table: &ZobristTable,
    mv: Move,
    player: Player,
) -> MoveGenResult<bool> {
    let turn = history.turn();
    if turn < 6 {
        return Ok(false);
    }

    let next = apply_for_filter(board, mv, player)?;
    if !is_in_check(&next, player.opposite()) {
        return Ok(false);
    }

    let candidate = table.hash_board(&next, player);
    Ok([2, 4, 6]
        .into_iter()
        .all(|back| history.hash_at(turn - back) == Some(candidate)))
}

fn apply_for_filter(board: &BoardState, mv: Move, player: Player) -> MoveGenResult<BoardState> {
    crate::move_generation::apply_move::apply_move(board, mv, player)
        .map_err(MoveGenError::InvalidState)
}
