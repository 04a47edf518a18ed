//! Board-level move application.
//!
//! Two entry points share one relocation routine:
//! - [`simulate_move`] auto-promotes to a queen and is what the legality
//!   filter uses, since a simulation never has anyone to ask.
//! - [`apply_move`] takes the promotion piece explicitly and is what a real
//!   turn uses.
//!
//! Both return a fresh board; the input is never touched.

use tracing::{trace, warn};

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::castle_side_of;
use crate::moves::pawn_moves::en_passant_victim;

/// Apply `from -> to` for legality testing, promoting pawns to queens.
#[inline]
pub fn simulate_move(
    board: &Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> Board {
    relocate(board, from, to, en_passant_target, PieceKind::Queen)
}

/// Apply `from -> to` with an explicit promotion piece.
///
/// `promotion` is ignored unless a pawn reaches its last rank.
#[inline]
pub fn apply_move(
    board: &Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
    promotion: PromotionPiece,
) -> Board {
    relocate(board, from, to, en_passant_target, promotion.into())
}

/// True when moving the piece on `from` to `to` puts a pawn on its last rank.
#[inline]
pub fn is_promotion(board: &Board, from: Square, to: Square) -> bool {
    board
        .get(from)
        .is_some_and(|piece| piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row())
}

/// True when `from -> to` is a pawn capturing onto the en-passant target.
#[inline]
pub fn is_en_passant_capture(
    board: &Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> bool {
    board.get(from).is_some_and(|piece| piece.kind == PieceKind::Pawn)
        && en_passant_target == Some(to)
        && from.col().abs_diff(to.col()) == 1
}

fn relocate(
    board: &Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
    promotion_kind: PieceKind,
) -> Board {
    let mut next = *board;

    let Some(piece) = next.take(from) else {
        warn!(%from, %to, "apply_move called on an empty source square");
        return next;
    };
    next.set(to, Some(piece.moved()));

    if is_en_passant_capture(board, from, to, en_passant_target) {
        if let Some(victim) = en_passant_victim(to, piece.color) {
            if next.get(victim).is_some_and(|p| p.kind == PieceKind::Pawn) {
                next.set(victim, None);
                trace!(%victim, "en passant removed captured pawn");
            }
        }
    } else if piece.kind == PieceKind::King {
        if let Some(side) = castle_side_of(from, to) {
            move_castling_rook(&mut next, from.row(), side);
        }
    } else if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
        next.set(to, Some(Piece::new(promotion_kind, piece.color).moved()));
        trace!(%to, ?promotion_kind, "pawn promoted");
    }

    next
}

fn move_castling_rook(board: &mut Board, row: u8, side: CastleSide) {
    let (Some(rook_from), Some(rook_to)) = (
        Square::new(row, side.rook_home_col()),
        Square::new(row, side.rook_castled_col()),
    ) else {
        return;
    };

    if let Some(rook) = board.take(rook_from) {
        board.set(rook_to, Some(rook.moved()));
        trace!(%rook_from, %rook_to, "castling rook relocated");
    }
}
