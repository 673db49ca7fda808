//! Core value types for the 5x5 minishogi variant.
//!
//! Promotion state and piece ownership are explicit fields here rather than
//! properties of a packed coordinate encoding, and off-board pieces are a
//! dedicated `Position` variant rather than sentinel bytes.

/// Side to move. The attacker opens the game from rank 1, the defender
/// faces it from rank 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Attacker,
    Defender,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::Attacker, Player::Defender];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::Attacker => 0,
            Player::Defender => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Attacker => Player::Defender,
            Player::Defender => Player::Attacker,
        }
    }

    /// The far rank for this player: entering it enables promotion, and a
    /// pawn may never be dropped on it.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Player::Attacker => 5,
            Player::Defender => 1,
        }
    }
}

/// Piece kind (ownership is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Rook,
    Bishop,
    Silver,
    Gold,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Silver,
        PieceKind::Gold,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Rook => 1,
            PieceKind::Bishop => 2,
            PieceKind::Silver => 3,
            PieceKind::Gold => 4,
            PieceKind::King => 5,
        }
    }

    /// Pawn, Rook, Bishop and Silver promote; Gold and King do not.
    #[inline]
    pub const fn is_promotable(self) -> bool {
        matches!(
            self,
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Bishop | PieceKind::Silver
        )
    }

    /// Two-letter notation code used for drop moves.
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            PieceKind::Pawn => "FU",
            PieceKind::Rook => "HI",
            PieceKind::Bishop => "KK",
            PieceKind::Silver => "GI",
            PieceKind::Gold => "KI",
            PieceKind::King => "OU",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        PieceKind::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

/// 25-bit occupancy / reachability set, one bit per board square.
pub type MonoBoard = u32;

/// All 25 valid square bits.
pub const BOARD_MASK: MonoBoard = 0x1FF_FFFF;

/// A board cell in the attacker-origin frame, `row` and `col` both `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Unchecked constructor for coordinates already known to be on board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    /// Checked constructor; `None` for coordinates off the 5x5 board.
    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if (1..=5).contains(&row) && (1..=5).contains(&col) {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Flat bitboard index, `0..25`, rank-major from the attacker's corner.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize - 1) * 5 + (self.col as usize - 1)
    }

    /// Inverse of [`Square::index`].
    #[inline]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < 25, "square index out of range: {index}");
        Square {
            row: (index / 5) as u8 + 1,
            col: (index % 5) as u8 + 1,
        }
    }

    #[inline]
    pub const fn bit(self) -> MonoBoard {
        1 << self.index()
    }
}

/// Where one physical piece currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    OnBoard {
        square: Square,
        promoted: bool,
        owner: Player,
    },
    /// Captured material, held in the given player's hand and available
    /// for drops. Promotion state is shed on capture.
    Captured(Player),
}

impl Position {
    /// The side currently controlling this piece.
    #[inline]
    pub const fn owner(self) -> Player {
        match self {
            Position::OnBoard { owner, .. } => owner,
            Position::Captured(holder) => holder,
        }
    }
}

/// A half-move: either a drop of captured material or a board-to-board step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Drop { piece: PieceKind, to: Square },
    Step { from: Square, to: Square, promote: bool },
}

/// Number of physical piece slots: six kinds, one copy per side.
pub const SLOT_COUNT: usize = 12;

/// Slot index for the copy of `kind` that starts the game on `home`'s side.
/// Ownership can change over the game; the slot identity cannot.
#[inline]
pub const fn slot_index(home: Player, kind: PieceKind) -> usize {
    home.index() * 6 + kind.index()
}

/// Piece kind held by a slot index.
#[inline]
pub const fn slot_kind(slot: usize) -> PieceKind {
    PieceKind::ALL[slot % 6]
}
