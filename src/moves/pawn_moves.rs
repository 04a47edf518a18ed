//! Pawn pushes, captures, en passant, and the diagonal attack pattern.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub const PAWN_CAPTURE_COLS: [i8; 2] = [-1, 1];

/// The two diagonal squares a pawn of `color` on `from` attacks.
///
/// Independent of occupancy; forward pushes never attack.
#[inline]
pub fn pawn_attack_targets(color: Color, from: Square) -> impl Iterator<Item = Square> {
    let dir = color.pawn_direction();
    PAWN_CAPTURE_COLS
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}

pub fn generate_pawn_pushes(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = color.pawn_direction();
    let Some(one_step) = from.offset(dir, 0).filter(|sq| board.is_empty(*sq)) else {
        return;
    };
    out.push(one_step);

    if from.row() == color.pawn_row() {
        if let Some(two_step) = from.offset(2 * dir, 0).filter(|sq| board.is_empty(*sq)) {
            out.push(two_step);
        }
    }
}

pub fn generate_pawn_captures(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    out.extend(pawn_attack_targets(color, from).filter(|to| board.color_on(*to) == Some(color.opposite())));
}

/// En-passant capture onto `target` when this pawn stands beside the pawn
/// that just made its double step.
pub fn generate_en_passant(
    board: &Board,
    from: Square,
    color: Color,
    en_passant_target: Option<Square>,
    out: &mut Vec<Square>,
) {
    let Some(target) = en_passant_target else {
        return;
    };
    let dir = color.pawn_direction();
    if from.offset(dir, 0).map(|sq| sq.row()) != Some(target.row()) || from.col().abs_diff(target.col()) != 1 {
        return;
    }

    let victim = en_passant_victim(target, color).and_then(|sq| board.get(sq));
    if victim.is_some_and(|piece| piece.is(PieceKind::Pawn, color.opposite())) {
        out.push(target);
    }
}

/// Square of the pawn removed when a `mover` pawn captures onto `target`.
#[inline]
pub fn en_passant_victim(target: Square, mover: Color) -> Option<Square> {
    target.offset(-mover.pawn_direction(), 0)
}

/// The square skipped by a two-square advance from `from` to `to`.
#[inline]
pub fn skipped_square(from: Square, to: Square) -> Option<Square> {
    if from.col() == to.col() && from.row().abs_diff(to.row()) == 2 {
        Square::new((from.row() + to.row()) / 2, from.col())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn white_pawn_attacks_from_e2() {
        let attacks: Vec<Square> = pawn_attack_targets(Color::White, sq(6, 4)).collect();
        assert_eq!(attacks, vec![sq(5, 3), sq(5, 5)]);
    }

    #[test]
    fn black_pawn_on_a_file_attacks_one_square() {
        let attacks: Vec<Square> = pawn_attack_targets(Color::Black, sq(1, 0)).collect();
        assert_eq!(attacks, vec![sq(2, 1)]);
    }

    #[test]
    fn unmoved_pawn_pushes_one_or_two() {
        let mut out = Vec::new();
        generate_pawn_pushes(&Board::initial(), sq(6, 4), Color::White, &mut out);
        assert_eq!(out, vec![sq(5, 4), sq(4, 4)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::initial();
        board.set(sq(5, 4), Some(Piece::new(PieceKind::Knight, Color::Black)));

        let mut out = Vec::new();
        generate_pawn_pushes(&board, sq(6, 4), Color::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn double_step_needs_empty_landing_square() {
        let mut board = Board::initial();
        board.set(sq(4, 4), Some(Piece::new(PieceKind::Knight, Color::Black)));

        let mut out = Vec::new();
        generate_pawn_pushes(&board, sq(6, 4), Color::White, &mut out);
        assert_eq!(out, vec![sq(5, 4)]);
    }

    #[test]
    fn en_passant_requires_adjacent_enemy_pawn() {
        let mut board = Board::empty();
        board.set(sq(3, 4), Some(Piece::new(PieceKind::Pawn, Color::White).moved()));
        board.set(sq(3, 3), Some(Piece::new(PieceKind::Pawn, Color::Black).moved()));

        let mut out = Vec::new();
        generate_en_passant(&board, sq(3, 4), Color::White, Some(sq(2, 3)), &mut out);
        assert_eq!(out, vec![sq(2, 3)]);

        board.set(sq(3, 3), Some(Piece::new(PieceKind::Bishop, Color::Black)));
        out.clear();
        generate_en_passant(&board, sq(3, 4), Color::White, Some(sq(2, 3)), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn skipped_square_is_between_start_and_landing() {
        assert_eq!(skipped_square(sq(6, 4), sq(4, 4)), Some(sq(5, 4)));
        assert_eq!(skipped_square(sq(1, 2), sq(3, 2)), Some(sq(2, 2)));
        assert_eq!(skipped_square(sq(6, 4), sq(5, 4)), None);
    }
}
