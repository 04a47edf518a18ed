use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::rook_moves::generate_rook_moves;

pub fn generate_queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    generate_rook_moves(board, from, color, out);
    generate_bishop_moves(board, from, color, out);
}
