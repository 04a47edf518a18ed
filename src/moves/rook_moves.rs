//! Orthogonal ray casting, plus the shared ray tracer used by every slider.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Walk from `from` in one direction, pushing each square until the first
/// occupied one. That square is included only when it holds an enemy piece.
pub fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    (d_row, d_col): (i8, i8),
    out: &mut Vec<Square>,
) {
    let mut cursor = from.offset(d_row, d_col);
    while let Some(to) = cursor {
        match board.color_on(to) {
            None => out.push(to),
            Some(occupant) => {
                if occupant != color {
                    out.push(to);
                }
                break;
            }
        }
        cursor = to.offset(d_row, d_col);
    }
}

/// First occupied square along a direction, if any.
pub fn first_blocker(board: &Board, from: Square, (d_row, d_col): (i8, i8)) -> Option<Square> {
    let mut cursor = from.offset(d_row, d_col);
    while let Some(sq) = cursor {
        if !board.is_empty(sq) {
            return Some(sq);
        }
        cursor = sq.offset(d_row, d_col);
    }
    None
}

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for direction in ROOK_DIRECTIONS {
        trace_ray(board, from, color, direction, out);
    }
}
