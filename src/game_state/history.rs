//! Position history for repetition tracking.
//!
//! One Zobrist hash per half-move played, appended in order and never
//! rewritten. The hash stored for a half-move is keyed by the side that
//! played it, so repetition checks compare like with like.

use crate::game_state::shogi_types::Player;

/// Hard cap on game length in half-moves; reaching it is a terminal draw.
pub const MAX_TURNS: usize = 150;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    past: Vec<u64>,
}

impl History {
    pub fn new() -> Self {
        History {
            past: Vec::with_capacity(MAX_TURNS),
        }
    }

    /// Number of half-moves played so far.
    #[inline]
    pub fn turn(&self) -> usize {
        self.past.len()
    }

    /// The attacker moves on even turns, the defender on odd turns.
    #[inline]
    pub fn side_to_move(&self) -> Player {
        if self.turn() % 2 == 0 {
            Player::Attacker
        } else {
            Player::Defender
        }
    }

    /// Append the hash of the position a half-move produced.
    #[inline]
    pub fn push(&mut self, hash: u64) {
        self.past.push(hash);
    }

    /// All recorded hashes, oldest first.
    #[inline]
    pub fn hashes(&self) -> &[u64] {
        &self.past
    }

    /// Hash recorded for half-move `turn`, if played.
    #[inline]
    pub fn hash_at(&self, turn: usize) -> Option<u64> {
        self.past.get(turn).copied()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.turn() >= MAX_TURNS
    }
}
