//! Attack detection on raw board geometry.
//!
//! Looks outward from the target square for each attacker shape instead of
//! enumerating every enemy move. No check-safety filtering and no castling is
//! involved, which keeps this layer below the pseudo-legal generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::PAWN_CAPTURE_COLS;
use crate::moves::rook_moves::{first_blocker, ROOK_DIRECTIONS};

/// Location of `color`'s king.
#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// True when `color`'s king is attacked. A missing king is never in check.
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color)
}

/// True when any piece of `defending_color`'s opponent attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, defending_color: Color) -> bool {
    !attackers_to_square(board, square, defending_color.opposite()).is_empty()
}

/// Every `(square, kind)` of `attacker_color` that attacks `square`.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    let mut attackers = Vec::<(Square, PieceKind)>::new();

    // An attacking pawn sits one row behind the target from its own point of view.
    let pawn_dir = attacker_color.pawn_direction();
    for d_col in PAWN_CAPTURE_COLS {
        if let Some(from) = square.offset(-pawn_dir, d_col) {
            if holds_any(board, from, attacker_color, &[PieceKind::Pawn]) {
                attackers.push((from, PieceKind::Pawn));
            }
        }
    }

    for from in knight_targets(square) {
        if holds_any(board, from, attacker_color, &[PieceKind::Knight]) {
            attackers.push((from, PieceKind::Knight));
        }
    }

    for from in king_targets(square) {
        if holds_any(board, from, attacker_color, &[PieceKind::King]) {
            attackers.push((from, PieceKind::King));
        }
    }

    let sliders = [
        (ROOK_DIRECTIONS, [PieceKind::Rook, PieceKind::Queen]),
        (BISHOP_DIRECTIONS, [PieceKind::Bishop, PieceKind::Queen]),
    ];
    for (directions, kinds) in sliders {
        for direction in directions {
            if let Some(from) = first_blocker(board, square, direction) {
                if holds_any(board, from, attacker_color, &kinds) {
                    if let Some(piece) = board.get(from) {
                        attackers.push((from, piece.kind));
                    }
                }
            }
        }
    }

    attackers
}

#[inline]
fn holds_any(board: &Board, square: Square, color: Color, kinds: &[PieceKind]) -> bool {
    board
        .get(square)
        .is_some_and(|piece| piece.color == color && kinds.contains(&piece.kind))
}
