//! Legal move filtering.
//!
//! Takes the pseudo-legal destinations for one piece, simulates each, and
//! keeps those that do not leave the mover's king attacked. Castling jumps
//! additionally need the king's start, transit and landing squares to be
//! unattacked on the board as it stood before the move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_checks::{is_in_check, is_square_attacked};
use crate::move_generation::pseudo_legal_generator::pseudo_legal_moves;
use crate::moves::king_moves::castle_side_of;

/// Legal destinations for the piece on `from`. Empty when `from` is empty.
pub fn legal_moves(
    board: &Board,
    from: Square,
    en_passant_target: Option<Square>,
    castling_rights: CastlingRights,
) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut moves = pseudo_legal_moves(board, from, en_passant_target, castling_rights);
    moves.retain(|&to| {
        if piece.kind == PieceKind::King && castle_side_of(from, to).is_some() && !castling_path_is_safe(board, from, to, piece.color) {
            return false;
        }
        let after = simulate_move(board, from, to, en_passant_target);
        !is_in_check(&after, piece.color)
    });
    moves
}

/// True when `from -> to` is among the legal moves for the piece on `from`.
#[inline]
pub fn is_legal_move(
    board: &Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
    castling_rights: CastlingRights,
) -> bool {
    legal_moves(board, from, en_passant_target, castling_rights).contains(&to)
}

/// Every legal `(from, to)` pair for `color`, in rank-major source order.
pub fn legal_moves_for_color(
    board: &Board,
    color: Color,
    en_passant_target: Option<Square>,
    castling_rights: CastlingRights,
) -> Vec<(Square, Square)> {
    board
        .pieces(color)
        .flat_map(|(from, _)| {
            legal_moves(board, from, en_passant_target, castling_rights)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

// The king may not castle out of, through, or into an attacked square.
fn castling_path_is_safe(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let step: i8 = if to.col() > from.col() { 1 } else { -1 };
    [Some(from), from.offset(0, step), Some(to)]
        .into_iter()
        .flatten()
        .all(|sq| !is_square_attacked(board, sq, color))
}
