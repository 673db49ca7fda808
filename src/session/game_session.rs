//! Game session driver.
//!
//! Owns the board, the position history, the Zobrist table, and the
//! incrementally maintained hash of the current position. `play` is the
//! only mutation path: it admits exactly the moves the generator reports
//! legal, so the session can never hold an unreachable position.

use std::error::Error;
use std::fmt;

use crate::game_state::board_state::BoardState;
use crate::game_state::history::History;
use crate::game_state::shogi_types::{Move, Player};
use crate::hashing::zobrist::ZobristTable;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::legal_move_generator::{legal_moves, MoveGenError, MoveGenResult};

/// Terminal game results. The player named by [`History::side_to_move`]
/// when `SideToMoveHasNoMoves` is reported is the loser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    SideToMoveHasNoMoves,
    MaxTurnsReached,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    IllegalMove(Move),
    InvalidState(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove(mv) => write!(f, "illegal move {mv:?}"),
            GameError::InvalidState(reason) => write!(f, "invalid game state: {reason}"),
        }
    }
}

impl Error for GameError {}

impl From<MoveGenError> for GameError {
    fn from(err: MoveGenError) -> Self {
        let MoveGenError::InvalidState(reason) = err;
        GameError::InvalidState(reason)
    }
}

/// Fresh starting position with an empty history, for callers driving the
/// rules functions directly instead of through a [`GameSession`].
pub fn new_game() -> (BoardState, History) {
    (BoardState::initial(), History::new())
}

/// Record the position a half-move produced, advancing the turn. Callers
/// maintaining their own incremental hash can push that value directly.
pub fn advance_history(
    history: &mut History,
    table: &ZobristTable,
    board_after: &BoardState,
    side_just_moved: Player,
) {
    history.push(table.hash_board(board_after, side_just_moved));
}

/// Terminal status of a position, or `None` while the game runs. The turn
/// cap is checked before move generation so a full history is always a
/// draw, even if the side to move happens to be mated as well.
pub fn is_game_over(
    board: &BoardState,
    history: &History,
    table: &ZobristTable,
) -> MoveGenResult<Option<Outcome>> {
    if history.is_full() {
        return Ok(Some(Outcome::MaxTurnsReached));
    }
    if legal_moves(board, history, table)?.is_empty() {
        return Ok(Some(Outcome::SideToMoveHasNoMoves));
    }
    Ok(None)
}

pub struct GameSession {
    board: BoardState,
    history: History,
    table: ZobristTable,
    hash: u64,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession::with_table(ZobristTable::new_random())
    }

    /// The pre-game hash is keyed by the defender, as if it had played the
    /// half-move that produced the starting position.
    pub fn with_table(table: ZobristTable) -> Self {
        let board = BoardState::initial();
        let hash = table.hash_board(&board, Player::Defender);
        GameSession {
            board,
            history: History::new(),
            table,
            hash,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn table(&self) -> &ZobristTable {
        &self.table
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn side_to_move(&self) -> Player {
        self.history.side_to_move()
    }

    pub fn legal_moves(&self) -> MoveGenResult<Vec<Move>> {
        legal_moves(&self.board, &self.history, &self.table)
    }

    pub fn outcome(&self) -> MoveGenResult<Option<Outcome>> {
        is_game_over(&self.board, &self.history, &self.table)
    }

    /// Play one half-move for the side to move. Rejects anything outside
    /// the legal move set without touching the session.
    pub fn play(&mut self, mv: Move) -> Result<(), GameError> {
        if !self.legal_moves()?.contains(&mv) {
            return Err(GameError::IllegalMove(mv));
        }

        let mover = self.side_to_move();
        let next_hash = self.table.update_hash(&self.board, self.hash, mv, mover);
        let next = apply_move(&self.board, mv, mover).map_err(GameError::InvalidState)?;
        debug_assert_eq!(
            next_hash,
            self.table.hash_board(&next, mover),
            "incremental hash diverged from recompute"
        );

        self.board = next;
        self.hash = next_hash;
        self.history.push(next_hash);
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
