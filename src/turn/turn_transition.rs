//! The authoritative turn transition.
//!
//! [`apply_turn`] validates a [`MoveRequest`] against a [`GameState`] and, when
//! accepted, returns the next state with every derived field (castling
//! rights, en-passant target, status, repetition counts, clocks) recomputed.
//! Rejections come back as [`TurnError`] and the input state is untouched.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TurnError, TurnResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameState, LastMove};
use crate::move_generation::legal_move_apply::{apply_move, is_en_passant_capture, is_promotion};
use crate::move_generation::legal_move_generator::is_legal_move;
use crate::move_generation::position_status::evaluate_status;
use crate::moves::king_moves::castle_side_of;
use crate::moves::pawn_moves::skipped_square;
use crate::search::position_hash::hash_position;

/// A request to move the piece on `from` to `to`.
///
/// `promotion` is required when a pawn reaches its last rank and ignored
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PromotionPiece>,
}

impl MoveRequest {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(mut self, promotion: PromotionPiece) -> Self {
        self.promotion = Some(promotion);
        self
    }

    /// Build a request from raw `(row, col)` pairs, as a transport layer
    /// would receive them.
    pub fn from_coords(from: (u8, u8), to: (u8, u8)) -> TurnResult<Self> {
        let square = |(row, col): (u8, u8)| Square::new(row, col).ok_or(TurnError::OutOfBounds { row, col });
        Ok(Self::new(square(from)?, square(to)?))
    }
}

/// Validate `request` against `state` and produce the following state.
pub fn apply_turn(state: &GameState, request: &MoveRequest) -> TurnResult<GameState> {
    let result = transition(state, request);
    if let Err(err) = &result {
        debug!(%err, from = %request.from, to = %request.to, "move rejected");
    }
    result
}

fn transition(state: &GameState, request: &MoveRequest) -> TurnResult<GameState> {
    let MoveRequest { from, to, .. } = *request;

    if state.status.is_terminal() {
        return Err(TurnError::GameOver(state.status));
    }

    let piece = state.board.get(from).ok_or(TurnError::EmptySquare(from))?;
    if piece.color != state.turn {
        return Err(TurnError::NotYourTurn {
            square: from,
            color: piece.color,
        });
    }

    if !is_legal_move(&state.board, from, to, state.en_passant_target, state.castling_rights) {
        return Err(TurnError::IllegalMove { from, to });
    }

    let promotion = if is_promotion(&state.board, from, to) {
        Some(request.promotion.ok_or(TurnError::PromotionRequired { from, to })?)
    } else {
        None
    };

    let en_passant = is_en_passant_capture(&state.board, from, to, state.en_passant_target);
    let captured = state.board.get(to);
    let capture = captured.is_some() || en_passant;
    let castle = piece.kind == PieceKind::King && castle_side_of(from, to).is_some();

    let board = apply_move(
        &state.board,
        from,
        to,
        state.en_passant_target,
        promotion.unwrap_or_default(),
    );

    let en_passant_target = if piece.kind == PieceKind::Pawn {
        skipped_square(from, to)
    } else {
        None
    };

    let castling_rights = next_castling_rights(state.castling_rights, piece, from, captured, to);
    let turn = state.turn.opposite();
    let status = evaluate_status(&board, turn, en_passant_target, castling_rights);

    let mut position_hash_counts = state.position_hash_counts.clone();
    *position_hash_counts
        .entry(hash_position(&board, turn, castling_rights, en_passant_target))
        .or_insert(0) += 1;

    let halfmove_clock = if piece.kind == PieceKind::Pawn || capture {
        0
    } else {
        state.halfmove_clock.saturating_add(1)
    };
    let fullmove_number = match piece.color {
        Color::White => state.fullmove_number,
        Color::Black => state.fullmove_number.saturating_add(1),
    };

    debug!(
        color = ?piece.color,
        kind = ?piece.kind,
        %from,
        %to,
        capture,
        castle,
        ?promotion,
        ?status,
        "move applied"
    );

    Ok(GameState {
        board,
        turn,
        castling_rights,
        en_passant_target,
        status,
        position_hash_counts,
        halfmove_clock,
        fullmove_number,
        last_move: Some(LastMove {
            from,
            to,
            kind: piece.kind,
            color: piece.color,
            castle,
            capture,
            promotion,
        }),
    })
}

// A king move clears both of its rights. A rook leaving, or being captured
// on, its home corner clears that corner's right.
fn next_castling_rights(
    rights: CastlingRights,
    mover: Piece,
    from: Square,
    captured: Option<Piece>,
    to: Square,
) -> CastlingRights {
    let mut rights = match mover.kind {
        PieceKind::King => rights.without_color(mover.color),
        PieceKind::Rook => strip_rook_corner(rights, mover.color, from),
        _ => rights,
    };

    if let Some(victim) = captured.filter(|p| p.kind == PieceKind::Rook) {
        rights = strip_rook_corner(rights, victim.color, to);
    }
    rights
}

fn strip_rook_corner(rights: CastlingRights, color: Color, square: Square) -> CastlingRights {
    if square.row() != color.back_row() {
        return rights;
    }
    match CastleSide::from_rook_col(square.col()) {
        Some(side) => rights.without(color, side),
        None => rights,
    }
}
