//! Plain-text board rendering for the interactive loop.

use crate::game_state::board_state::BoardState;
use crate::game_state::shogi_types::{
    slot_kind, PieceKind, Player, Position, Square, SLOT_COUNT,
};

fn piece_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'P',
        PieceKind::Rook => 'R',
        PieceKind::Bishop => 'B',
        PieceKind::Silver => 'S',
        PieceKind::Gold => 'G',
        PieceKind::King => 'K',
    }
}

fn hand_line(board: &BoardState, player: Player) -> String {
    let mut line = String::new();
    for slot in 0..SLOT_COUNT {
        if board.slots[slot] == Position::Captured(player) {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(slot_kind(slot).code());
        }
    }
    if line.is_empty() {
        line.push('-');
    }
    line
}

/// Attacker pieces print uppercase, defender pieces lowercase, promoted
/// pieces carry a `+` prefix. The defender's hand sits above the board and
/// the attacker's below, matching each side's camp.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();
    out.push_str(&format!("hand: {}\n", hand_line(board, Player::Defender)));
    out.push_str("   A  B  C  D  E\n");

    for row in (1..=5u8).rev() {
        out.push_str(&format!("{row} "));
        for col in 1..=5u8 {
            match board.piece_at(Square::new(row, col)) {
                Some((kind, owner, promoted)) => {
                    let mut letter = piece_letter(kind);
                    if owner == Player::Defender {
                        letter = letter.to_ascii_lowercase();
                    }
                    out.push(if promoted { '+' } else { ' ' });
                    out.push(letter);
                    out.push(' ');
                }
                None => out.push_str(" . "),
            }
        }
        out.push('\n');
    }

    out.push_str(&format!("hand: {}\n", hand_line(board, Player::Attacker)));
    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::shogi_types::{
        slot_index, PieceKind, Player, Position, Square,
    };

    #[test]
    fn initial_board_renders_both_camps() {
        let text = render_board(&BoardState::initial());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "hand: -");
        assert_eq!(lines[2], "5  r  b  s  g  k ");
        assert_eq!(lines[6], "1  K  G  S  B  R ");
        assert_eq!(lines[7], "hand: -");
    }

    #[test]
    fn promoted_pieces_and_hands_are_marked() {
        let mut board = BoardState::initial();
        board.slots[slot_index(Player::Attacker, PieceKind::Pawn)] = Position::OnBoard {
            square: Square::new(3, 1),
            promoted: true,
            owner: Player::Attacker,
        };
        board.slots[slot_index(Player::Defender, PieceKind::Pawn)] =
            Position::Captured(Player::Attacker);

        let text = render_board(&board);
        assert!(text.contains("+P"));
        assert!(text.ends_with("hand: FU\n"));
    }
}
