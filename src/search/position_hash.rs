//! Canonical position keys for repetition tracking.
//!
//! The key is a readable string rather than a Zobrist number so that equal
//! positions always produce equal keys with no collision window:
//!
//! ```text
//! <64 squares, row 0 first>:<w|b>:<KQkq with '-' gaps>:<ep square | '-'>
//! ```
//!
//! Each square is `.` when empty or a color letter followed by the FEN piece
//! letter (`wK`, `bN`, ...). `.` never starts an occupant token, so the
//! encoding is unambiguous.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Key for `(board, turn, castling rights, en-passant target)`.
pub fn hash_position(
    board: &Board,
    turn: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
) -> String {
    let mut key = String::with_capacity(140);

    for sq in Square::all() {
        match board.get(sq) {
            Some(piece) => {
                key.push(color_letter(piece.color));
                key.push(piece.kind.letter());
            }
            None => key.push('.'),
        }
    }

    key.push(':');
    key.push(color_letter(turn));

    key.push(':');
    for (color, side, letter) in [
        (Color::White, CastleSide::KingSide, 'K'),
        (Color::White, CastleSide::QueenSide, 'Q'),
        (Color::Black, CastleSide::KingSide, 'k'),
        (Color::Black, CastleSide::QueenSide, 'q'),
    ] {
        key.push(if castling_rights.has(color, side) { letter } else { '-' });
    }

    key.push(':');
    match en_passant_target {
        Some(sq) => key.push_str(&sq.to_string()),
        None => key.push('-'),
    }

    key
}

#[inline]
fn color_letter(color: Color) -> char {
    match color {
        Color::White => 'w',
        Color::Black => 'b',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::simulate_move;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn starting_position_hash_is_deterministic() {
        let a = hash_position(&Board::initial(), Color::White, CastlingRights::ALL, None);
        let b = hash_position(&Board::initial(), Color::White, CastlingRights::ALL, None);
        assert_eq!(a, b);
        assert!(a.starts_with("bRbNbBbQbKbBbNbR"));
        assert!(a.ends_with(":w:KQkq:-"));
    }

    #[test]
    fn knight_and_king_do_not_collide() {
        let mut with_knight = Board::empty();
        with_knight.set(sq(4, 4), Some(Piece::new(PieceKind::Knight, Color::White)));
        let mut with_king = Board::empty();
        with_king.set(sq(4, 4), Some(Piece::new(PieceKind::King, Color::White)));

        assert_ne!(
            hash_position(&with_knight, Color::White, CastlingRights::NONE, None),
            hash_position(&with_king, Color::White, CastlingRights::NONE, None)
        );
    }

    #[test]
    fn side_to_move_changes_hash() {
        let board = Board::initial();
        assert_ne!(
            hash_position(&board, Color::White, CastlingRights::ALL, None),
            hash_position(&board, Color::Black, CastlingRights::ALL, None)
        );
    }

    #[test]
    fn each_castling_flag_changes_hash() {
        let board = Board::initial();
        let full = hash_position(&board, Color::White, CastlingRights::ALL, None);
        for color in [Color::White, Color::Black] {
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                let reduced = CastlingRights::ALL.without(color, side);
                assert_ne!(full, hash_position(&board, Color::White, reduced, None));
            }
        }
    }

    #[test]
    fn en_passant_square_changes_hash() {
        let board = Board::initial();
        assert_ne!(
            hash_position(&board, Color::Black, CastlingRights::ALL, None),
            hash_position(&board, Color::Black, CastlingRights::ALL, Some(sq(5, 4)))
        );
    }

    #[test]
    fn moving_one_piece_changes_hash() {
        let board = Board::initial();
        let moved = simulate_move(&board, sq(6, 0), sq(5, 0), None);
        assert_ne!(
            hash_position(&board, Color::White, CastlingRights::ALL, None),
            hash_position(&moved, Color::White, CastlingRights::ALL, None)
        );
    }

    #[test]
    fn has_moved_flags_do_not_change_hash() {
        let board = Board::initial();
        let mut touched = board;
        touched.set(sq(6, 0), Some(Piece::new(PieceKind::Pawn, Color::White).moved()));
        assert_eq!(
            hash_position(&board, Color::White, CastlingRights::ALL, None),
            hash_position(&touched, Color::White, CastlingRights::ALL, None)
        );
    }
}
