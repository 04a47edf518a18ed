//! Pseudo-legal destinations for a single piece.
//!
//! Geometry, blocking and capture eligibility only. Whether a move leaves the
//! mover's king attacked is the legal move filter's concern.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::{generate_castling_moves, generate_king_steps};
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::{generate_en_passant, generate_pawn_captures, generate_pawn_pushes};
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Every pseudo-legal destination for the piece on `from`, castling included.
///
/// Empty when `from` is unoccupied.
pub fn pseudo_legal_moves(
    board: &Board,
    from: Square,
    en_passant_target: Option<Square>,
    castling_rights: CastlingRights,
) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut out = pseudo_legal_moves_without_castling(board, from, en_passant_target);
    if piece.kind == PieceKind::King {
        generate_castling_moves(board, from, piece.color, castling_rights, &mut out);
    }
    retain_non_friendly(board, piece.color, &mut out);
    out
}

/// Pseudo-legal destinations for the piece on `from`, never including a
/// castling jump.
pub fn pseudo_legal_moves_without_castling(
    board: &Board,
    from: Square,
    en_passant_target: Option<Square>,
) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let color = piece.color;
    let mut out = Vec::<Square>::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => {
            generate_pawn_pushes(board, from, color, &mut out);
            generate_pawn_captures(board, from, color, &mut out);
            generate_en_passant(board, from, color, en_passant_target, &mut out);
        }
        PieceKind::Knight => generate_knight_moves(board, from, color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, color, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, color, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, color, &mut out),
        PieceKind::King => generate_king_steps(board, from, color, &mut out),
    }

    retain_non_friendly(board, color, &mut out);
    out
}

// Final pass: nothing may land on a piece of the mover's own color.
#[inline]
fn retain_non_friendly(board: &Board, color: Color, out: &mut Vec<Square>) {
    out.retain(|to| board.color_on(*to) != Some(color));
}
