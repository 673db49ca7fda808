//! Crate root module declarations for the minishogi rules engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! hashing, session management, engines, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod game_state {
    pub mod board_state;
    pub mod history;
    pub mod shogi_types;
}

pub mod move_generation {
    pub mod apply_move;
    pub mod checks;
    pub mod drop_rules;
    pub mod legal_move_generator;
    pub mod movement_masks;
    pub mod perft;
}

pub mod hashing {
    pub mod zobrist;
}

pub mod session {
    pub mod game_session;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod notation;
    pub mod render_board;
}
