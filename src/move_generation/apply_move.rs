//! The board mutator.
//!
//! Applies a move to a copy of the board. Legality is the enumerator's
//! business; this only rejects moves that cannot be represented at all
//! (dropping a piece that is not in hand, stepping from an empty square),
//! which would otherwise corrupt the slot invariants silently.

use crate::game_state::board_state::BoardState;
use crate::game_state::shogi_types::{Move, Player, Position};

pub fn apply_move(board: &BoardState, mv: Move, player: Player) -> Result<BoardState, String> {
    let mut next = board.clone();

    match mv {
        Move::Drop { piece, to } => {
            let slot = next
                .hand_slot(piece, player)
                .ok_or_else(|| format!("no captured {piece:?} in hand for drop"))?;
            if next.slot_at(to).is_some() {
                return Err(format!("drop destination {}{} is occupied", to.row, to.col));
            }
            next.slots[slot] = Position::OnBoard {
                square: to,
                promoted: false,
                owner: player,
            };
        }
        Move::Step { from, to, promote } => {
            if let Some(victim) = next.slot_at(to) {
                if next.slots[victim].owner() == player {
                    return Err(format!(
                        "step destination {}{} holds the mover's own piece",
                        to.row, to.col
                    ));
                }
                next.slots[victim] = Position::Captured(player);
            }

            let slot = next
                .slot_at(from)
                .ok_or_else(|| format!("no piece on from-square {}{}", from.row, from.col))?;
            let Position::OnBoard { promoted, owner, .. } = next.slots[slot] else {
                unreachable!("slot_at only returns on-board slots");
            };
            if owner != player {
                return Err(format!(
                    "piece on from-square {}{} does not belong to the mover",
                    from.row, from.col
                ));
            }
            next.slots[slot] = Position::OnBoard {
                square: to,
                promoted: promoted || promote,
                owner,
            };
        }
    }

    debug_assert!(next.is_overlap_free(), "apply_move produced overlapping slots");
    Ok(next)
}
