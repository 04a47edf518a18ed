//! Diagonal ray casting.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for direction in BISHOP_DIRECTIONS {
        trace_ray(board, from, color, direction, out);
    }
}
