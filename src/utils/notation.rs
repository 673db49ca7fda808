//! Text notation for moves.
//!
//! A square is a rank digit `1`..`5` followed by a file letter `A`..`E`.
//! Steps are two squares with an optional trailing `N` for promotion;
//! drops are one square followed by the dropped piece's two-letter code.
//! Parsing is case insensitive and also accepts digit file coordinates.

use std::error::Error;
use std::fmt;

use crate::game_state::shogi_types::{Move, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    WrongLength(usize),
    BadSquare(String),
    BadPieceCode(String),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongLength(len) => {
                write!(f, "move text must be 4 or 5 characters, got {len}")
            }
            NotationError::BadSquare(text) => write!(f, "unreadable square {text:?}"),
            NotationError::BadPieceCode(text) => write!(f, "unknown piece code {text:?}"),
        }
    }
}

impl Error for NotationError {}

const FILE_LETTERS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

pub fn format_move(mv: Move) -> String {
    match mv {
        Move::Step { from, to, promote } => {
            let mut text = format!("{}{}", format_square(from), format_square(to));
            if promote {
                text.push('N');
            }
            text
        }
        Move::Drop { piece, to } => format!("{}{}", format_square(to), piece.code()),
    }
}

fn format_square(square: Square) -> String {
    format!(
        "{}{}",
        square.row,
        FILE_LETTERS[(square.col - 1) as usize]
    )
}

pub fn parse_move(text: &str) -> Result<Move, NotationError> {
    let upper = text.trim().to_ascii_uppercase();
    let chars: Vec<char> = upper.chars().collect();

    match chars.len() {
        4 => {
            let to_or_from = parse_square(&chars[0..2])?;
            // A letter pair after the square is a drop; a second square is
            // a plain step.
            if let Ok(to) = parse_square(&chars[2..4]) {
                return Ok(Move::Step {
                    from: to_or_from,
                    to,
                    promote: false,
                });
            }
            let code: String = chars[2..4].iter().collect();
            let piece =
                PieceKind::from_code(&code).ok_or(NotationError::BadPieceCode(code))?;
            Ok(Move::Drop {
                piece,
                to: to_or_from,
            })
        }
        5 => {
            if chars[4] != 'N' {
                return Err(NotationError::BadSquare(chars[4].to_string()));
            }
            Ok(Move::Step {
                from: parse_square(&chars[0..2])?,
                to: parse_square(&chars[2..4])?,
                promote: true,
            })
        }
        len => Err(NotationError::WrongLength(len)),
    }
}

fn parse_square(pair: &[char]) -> Result<Square, NotationError> {
    let bad = || NotationError::BadSquare(pair.iter().collect());

    let row = pair[0].to_digit(10).ok_or_else(bad)? as u8;
    let col = match pair[1] {
        'A'..='E' => pair[1] as u8 - b'A' + 1,
        '1'..='5' => pair[1] as u8 - b'0',
        _ => return Err(bad()),
    };
    Square::from_row_col(row, col).ok_or_else(bad)
}
