//! Movement pattern tables and sliding-piece ray casting.
//!
//! Step-moving pieces use 25-bit patterns precomputed per square at compile
//! time, with board-edge clipping built into the generation. Rook and
//! Bishop reach is ray cast against the live occupancy; their promoted
//! forms additionally gain the one-step King pattern.

use crate::game_state::board_state::BoardState;
use crate::game_state::shogi_types::{MonoBoard, PieceKind, Player, Square};

/// Row/column deltas, oriented so that positive row delta is the
/// attacker's forward direction.
type Offset = (i8, i8);

const ROOK_DIRECTIONS: [Offset; 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Step patterns per square, `[attacker_orientation, defender_orientation]`.
pub const PAWN_STEPS: [[MonoBoard; 25]; 2] = [
    generate_step_table(&[(1, 0)]),
    generate_step_table(&[(-1, 0)]),
];

pub const SILVER_STEPS: [[MonoBoard; 25]; 2] = [
    generate_step_table(&[(1, -1), (1, 0), (1, 1), (-1, -1), (-1, 1)]),
    generate_step_table(&[(-1, -1), (-1, 0), (-1, 1), (1, -1), (1, 1)]),
];

pub const GOLD_STEPS: [[MonoBoard; 25]; 2] = [
    generate_step_table(&[(1, -1), (1, 0), (1, 1), (0, -1), (0, 1), (-1, 0)]),
    generate_step_table(&[(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0)]),
];

pub const KING_STEPS: [MonoBoard; 25] = generate_step_table(&[
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
]);

const fn generate_step_table(offsets: &[Offset]) -> [MonoBoard; 25] {
    let mut table = [0u32; 25];
    let mut index = 0;
    while index < 25 {
        let row = (index / 5) as i8 + 1;
        let col = (index % 5) as i8 + 1;
        let mut k = 0;
        while k < offsets.len() {
            let r = row + offsets[k].0;
            let c = col + offsets[k].1;
            if r >= 1 && r <= 5 && c >= 1 && c <= 5 {
                table[index] |= 1u32 << (((r - 1) * 5 + (c - 1)) as u32);
            }
            k += 1;
        }
        index += 1;
    }
    table
}

/// All squares of one file, `col` in `1..=5`.
#[inline]
pub const fn file_mask(col: u8) -> MonoBoard {
    0x0010_8421 << (col - 1)
}

/// All squares of one rank, `row` in `1..=5`.
#[inline]
pub const fn rank_mask(row: u8) -> MonoBoard {
    0x1F << ((row - 1) * 5)
}

/// Precomputed step pattern for a non-sliding piece. Promoted Pawn and
/// Silver move as Gold. Sliders are ray cast and never table driven.
#[inline]
pub fn step_mask(kind: PieceKind, owner: Player, promoted: bool, square: Square) -> MonoBoard {
    let index = square.index();
    let side = owner.index();
    match kind {
        PieceKind::Pawn | PieceKind::Silver if promoted => GOLD_STEPS[side][index],
        PieceKind::Pawn => PAWN_STEPS[side][index],
        PieceKind::Silver => SILVER_STEPS[side][index],
        PieceKind::Gold => GOLD_STEPS[side][index],
        PieceKind::King => KING_STEPS[index],
        PieceKind::Rook | PieceKind::Bishop => 0,
    }
}

fn trace_ray(from: Square, row_step: i8, col_step: i8, occupancy: MonoBoard) -> MonoBoard {
    let mut row = from.row as i8 + row_step;
    let mut col = from.col as i8 + col_step;
    let mut reach = 0;

    while (1..=5).contains(&row) && (1..=5).contains(&col) {
        let bit = Square::new(row as u8, col as u8).bit();
        reach |= bit;
        if occupancy & bit != 0 {
            break;
        }
        row += row_step;
        col += col_step;
    }

    reach
}

/// Squares the piece on `square` may move to: empty squares and enemy
/// pieces, never the mover's own pieces.
pub fn movable_squares(
    board: &BoardState,
    square: Square,
    kind: PieceKind,
    owner: Player,
    promoted: bool,
) -> MonoBoard {
    let own = board.occupancy(Some(owner.opposite()));
    match kind {
        PieceKind::Rook | PieceKind::Bishop => {
            let occupancy = board.occupancy(None);
            let directions = if kind == PieceKind::Rook {
                &ROOK_DIRECTIONS
            } else {
                &BISHOP_DIRECTIONS
            };
            let mut reach = 0;
            for &(row_step, col_step) in directions {
                reach |= trace_ray(square, row_step, col_step, occupancy);
            }
            if promoted {
                reach |= KING_STEPS[square.index()];
            }
            reach & !own
        }
        _ => step_mask(kind, owner, promoted, square) & !own,
    }
}
