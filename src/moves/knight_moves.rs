//! Knight movement geometry.
//!
//! The eight fixed jumps, shared by pseudo-legal generation and attack
//! detection. Jumps that leave the board are dropped, never reported.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board squares a knight on `from` jumps to, ignoring occupancy.
#[inline]
pub fn knight_targets(from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    out.extend(knight_targets(from).filter(|to| board.color_on(*to) != Some(color)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    #[test]
    fn knight_targets_from_d4_has_eight_squares() {
        let d4 = Square::new(4, 3).expect("d4");
        assert_eq!(knight_targets(d4).count(), 8);
    }

    #[test]
    fn knight_targets_from_corner_has_two_squares() {
        let a8 = Square::new(0, 0).expect("a8");
        assert_eq!(knight_targets(a8).count(), 2);
    }

    #[test]
    fn knight_cannot_land_on_own_piece() {
        let mut board = Board::empty();
        let from = Square::new(4, 3).expect("d4");
        let own = Square::new(2, 2).expect("c6");
        let enemy = Square::new(2, 4).expect("e6");
        board.set(own, Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(enemy, Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let mut out = Vec::new();
        generate_knight_moves(&board, from, Color::White, &mut out);
        assert_eq!(out.len(), 7);
        assert!(!out.contains(&own));
        assert!(out.contains(&enemy));
    }
}
