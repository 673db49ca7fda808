//! Zobrist hashing over board, hands, and the side that just moved.
//!
//! Twenty key rows cover each owner's six base kinds plus the four
//! promotable kinds in promoted form. Each row has 27 columns: 25 board
//! squares plus two hand buckets. The hand needs two buckets because the
//! two physical copies of a kind are interchangeable; one shared key per
//! copy would XOR itself away when both copies sit in the same hand.

use rand::Rng;

use crate::game_state::board_state::BoardState;
use crate::game_state::shogi_types::{
    slot_index, Move, PieceKind, Player, Position,
};

const KEY_ROWS: usize = 20;
const KEY_COLS: usize = 27;

/// Column for a kind with exactly one copy in a player's hand.
const HAND_ONE: usize = 25;
/// Column replacing both `HAND_ONE` keys when a player holds both copies.
const HAND_TWO: usize = 26;

#[derive(Debug, Clone)]
pub struct ZobristTable {
    attacker_turn: u64,
    defender_turn: u64,
    keys: [[u64; KEY_COLS]; KEY_ROWS],
}

impl ZobristTable {
    /// Deterministic table from a splitmix64 stream. Fixed seeds keep test
    /// hashes reproducible.
    pub fn from_seed(seed: u64) -> Self {
        let mut state = seed;
        let mut next = move || {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^ (z >> 31)
        };

        let mut keys = [[0u64; KEY_COLS]; KEY_ROWS];
        for row in keys.iter_mut() {
            for key in row.iter_mut() {
                *key = next();
            }
        }
        ZobristTable {
            attacker_turn: next(),
            defender_turn: next(),
            keys,
        }
    }

    pub fn new_random() -> Self {
        let mut rng = rand::rng();
        let mut keys = [[0u64; KEY_COLS]; KEY_ROWS];
        for row in keys.iter_mut() {
            for key in row.iter_mut() {
                *key = rng.random();
            }
        }
        ZobristTable {
            attacker_turn: rng.random(),
            defender_turn: rng.random(),
            keys,
        }
    }

    /// Full recompute, keyed by the side that just moved. The pre-game
    /// position is keyed by the defender, as if it had made the last move.
    pub fn hash_board(&self, board: &BoardState, just_moved: Player) -> u64 {
        let mut hash = match just_moved {
            Player::Attacker => self.attacker_turn,
            Player::Defender => self.defender_turn,
        };

        for kind in PieceKind::ALL {
            let attacker_home = board.slots[slot_index(Player::Attacker, kind)];
            let defender_home = board.slots[slot_index(Player::Defender, kind)];

            match (attacker_home, defender_home) {
                (Position::Captured(a), Position::Captured(b)) if a == b => {
                    hash ^= self.keys[key_row(kind, a, false)][HAND_TWO];
                }
                _ => {
                    for position in [attacker_home, defender_home] {
                        hash ^= match position {
                            Position::OnBoard { square, promoted, owner } => {
                                self.keys[key_row(kind, owner, promoted)][square.index()]
                            }
                            Position::Captured(holder) => {
                                self.keys[key_row(kind, holder, false)][HAND_ONE]
                            }
                        };
                    }
                }
            }
        }

        hash
    }

    /// Incremental update from the position hash before `mv` to the one
    /// after it. Must agree with [`Self::hash_board`] of the applied board.
    pub fn update_hash(&self, before: &BoardState, hash: u64, mv: Move, player: Player) -> u64 {
        let mut hash = hash;

        match mv {
            Move::Drop { piece, to } => {
                // Leaving the hand: a two-copy hand trades its bucket key
                // for the staying copy's one-copy key; a one-copy hand
                // just loses that key. One HAND_ONE XOR covers both.
                if before.hand_count(piece, player) == 2 {
                    hash ^= self.keys[key_row(piece, player, false)][HAND_TWO];
                }
                hash ^= self.keys[key_row(piece, player, false)][HAND_ONE];
                hash ^= self.keys[key_row(piece, player, false)][to.index()];
            }
            Move::Step { from, to, promote } => {
                if let Some((victim_kind, victim_owner, victim_promoted)) = before.piece_at(to) {
                    hash ^= self.keys[key_row(victim_kind, victim_owner, victim_promoted)]
                        [to.index()];
                    // Entering the mover's hand: merge into the two-copy
                    // bucket if a copy was already there.
                    if before.hand_count(victim_kind, player) == 1 {
                        hash ^= self.keys[key_row(victim_kind, player, false)][HAND_ONE];
                        hash ^= self.keys[key_row(victim_kind, player, false)][HAND_TWO];
                    } else {
                        hash ^= self.keys[key_row(victim_kind, player, false)][HAND_ONE];
                    }
                }

                if let Some((kind, owner, promoted)) = before.piece_at(from) {
                    hash ^= self.keys[key_row(kind, owner, promoted)][from.index()];
                    hash ^= self.keys[key_row(kind, owner, promoted || promote)][to.index()];
                }
            }
        }

        // Flip the mover key: out with the opponent's, in with ours.
        hash ^ self.attacker_turn ^ self.defender_turn
    }
}

/// Key row for a piece: six base rows per owner plus four promoted rows,
/// reusing the promotable kinds' indices shifted past the base block.
fn key_row(kind: PieceKind, owner: Player, promoted: bool) -> usize {
    debug_assert!(!promoted || kind.is_promotable());
    kind.index() + owner.index() * 10 + if promoted { 6 } else { 0 }
}
