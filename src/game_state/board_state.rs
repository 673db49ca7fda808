//! Central board representation.
//!
//! `BoardState` is the tuple of all twelve piece positions. Bitboard
//! occupancy is a derived projection, regenerated on demand, never stored;
//! the board is small enough that linear scans over the slots are cheap.

use crate::game_state::shogi_types::{
    slot_index, slot_kind, MonoBoard, PieceKind, Player, Position, Square, SLOT_COUNT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    /// Indexed by [`slot_index`]: attacker-home slots first, then
    /// defender-home slots, piece kinds in declaration order within each.
    pub slots: [Position; SLOT_COUNT],
}

impl BoardState {
    /// The fixed starting layout. Attacker back rank: King 11, Gold 12,
    /// Silver 13, Bishop 14, Rook 15, with the Pawn at 21; the defender's
    /// camp is the 180-degree rotation.
    pub fn initial() -> Self {
        let on = |row, col, owner| Position::OnBoard {
            square: Square::new(row, col),
            promoted: false,
            owner,
        };
        BoardState {
            slots: [
                on(2, 1, Player::Attacker),
                on(1, 5, Player::Attacker),
                on(1, 4, Player::Attacker),
                on(1, 3, Player::Attacker),
                on(1, 2, Player::Attacker),
                on(1, 1, Player::Attacker),
                on(4, 5, Player::Defender),
                on(5, 1, Player::Defender),
                on(5, 2, Player::Defender),
                on(5, 3, Player::Defender),
                on(5, 4, Player::Defender),
                on(5, 5, Player::Defender),
            ],
        }
    }

    /// Slot occupying `square`, if any.
    pub fn slot_at(&self, square: Square) -> Option<usize> {
        self.slots.iter().position(|position| {
            matches!(position, Position::OnBoard { square: s, .. } if *s == square)
        })
    }

    /// Kind, owner, and promotion state of the piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<(PieceKind, Player, bool)> {
        self.slot_at(square).map(|slot| {
            let Position::OnBoard { promoted, owner, .. } = self.slots[slot] else {
                unreachable!("slot_at only returns on-board slots");
            };
            (slot_kind(slot), owner, promoted)
        })
    }

    /// Occupancy projection. `hide` omits one side's pieces, which yields
    /// the "own pieces only" board used to allow captures when complemented.
    pub fn occupancy(&self, hide: Option<Player>) -> MonoBoard {
        let mut occupancy = 0;
        for position in &self.slots {
            if let Position::OnBoard { square, owner, .. } = position {
                if hide != Some(*owner) {
                    occupancy |= square.bit();
                }
            }
        }
        occupancy
    }

    /// Number of copies of `kind` in `player`'s hand (0, 1 or 2).
    pub fn hand_count(&self, kind: PieceKind, player: Player) -> usize {
        Player::BOTH
            .into_iter()
            .filter(|&home| {
                self.slots[slot_index(home, kind)] == Position::Captured(player)
            })
            .count()
    }

    /// Slot of an in-hand copy of `kind` held by `player`, if any. When both
    /// copies are in hand the defender-home slot is consumed first.
    pub fn hand_slot(&self, kind: PieceKind, player: Player) -> Option<usize> {
        [Player::Defender, Player::Attacker]
            .into_iter()
            .map(|home| slot_index(home, kind))
            .find(|&slot| self.slots[slot] == Position::Captured(player))
    }

    /// Square of `player`'s king. `None` only for malformed test boards.
    pub fn king_square(&self, player: Player) -> Option<Square> {
        for home in Player::BOTH {
            if let Position::OnBoard { square, owner, .. } =
                self.slots[slot_index(home, PieceKind::King)]
            {
                if owner == player {
                    return Some(square);
                }
            }
        }
        None
    }

    /// True when no two on-board slots share a square.
    pub fn is_overlap_free(&self) -> bool {
        let mut seen: MonoBoard = 0;
        for position in &self.slots {
            if let Position::OnBoard { square, .. } = position {
                if seen & square.bit() != 0 {
                    return false;
                }
                seen |= square.bit();
            }
        }
        true
    }
}
