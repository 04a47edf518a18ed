//! King steps and the board-shape half of castling.
//!
//! Castling here only checks rights, unmoved pieces and empty squares between
//! king and rook. Whether the king passes through an attacked square is decided
//! later by the legal move filter.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::*;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// On-board squares adjacent to `from`, ignoring occupancy.
#[inline]
pub fn king_targets(from: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

pub fn generate_king_steps(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    out.extend(king_targets(from).filter(|to| board.color_on(*to) != Some(color)));
}

pub fn generate_castling_moves(
    board: &Board,
    from: Square,
    color: Color,
    castling_rights: CastlingRights,
    out: &mut Vec<Square>,
) {
    let Some(king) = board.get(from) else {
        return;
    };
    if king.has_moved || from.row() != color.back_row() || from.col() != KING_HOME_COL {
        return;
    }

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if !castling_rights.has(color, side) {
            continue;
        }

        let rook_col = side.rook_home_col();
        let rook_ready = Square::new(from.row(), rook_col)
            .and_then(|sq| board.get(sq))
            .is_some_and(|rook| rook.is(PieceKind::Rook, color) && !rook.has_moved);
        if !rook_ready {
            continue;
        }

        let (lo, hi) = (rook_col.min(from.col()) + 1, rook_col.max(from.col()));
        let path_clear = (lo..hi)
            .filter_map(|col| Square::new(from.row(), col))
            .all(|sq| board.is_empty(sq));
        if !path_clear {
            continue;
        }

        if let Some(to) = Square::new(from.row(), side.king_castled_col()) {
            out.push(to);
        }
    }
}

/// The castling side a king move represents, if it is a two-file jump.
#[inline]
pub fn castle_side_of(from: Square, to: Square) -> Option<CastleSide> {
    if from.row() != to.row() || from.col().abs_diff(to.col()) != 2 {
        return None;
    }
    if to.col() > from.col() {
        Some(CastleSide::KingSide)
    } else {
        Some(CastleSide::QueenSide)
    }
}
