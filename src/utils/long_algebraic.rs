//! Long algebraic move text (`e2e4`, `e7e8q`) for [`MoveRequest`].

use std::fmt;
use std::str::FromStr;

use crate::errors::{NotationError, NotationResult};
use crate::game_state::chess_types::PromotionPiece;
use crate::turn::turn_transition::MoveRequest;
use crate::utils::algebraic::algebraic_to_square;

pub fn long_algebraic_to_move_request(long_algebraic: &str) -> NotationResult<MoveRequest> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(NotationError::InvalidMove(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    let request = MoveRequest::new(from, to);

    match long_algebraic[4..].chars().next() {
        Some(ch) => Ok(request.with_promotion(promotion_from_char(ch)?)),
        None => Ok(request),
    }
}

pub fn move_request_to_long_algebraic(request: &MoveRequest) -> String {
    let mut out = format!("{}{}", request.from, request.to);
    if let Some(piece) = request.promotion {
        out.push(promotion_to_char(piece));
    }
    out
}

fn promotion_from_char(ch: char) -> NotationResult<PromotionPiece> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PromotionPiece::Knight),
        'b' => Ok(PromotionPiece::Bishop),
        'r' => Ok(PromotionPiece::Rook),
        'q' => Ok(PromotionPiece::Queen),
        _ => Err(NotationError::InvalidPromotion(ch)),
    }
}

fn promotion_to_char(piece: PromotionPiece) -> char {
    match piece {
        PromotionPiece::Knight => 'n',
        PromotionPiece::Bishop => 'b',
        PromotionPiece::Rook => 'r',
        PromotionPiece::Queen => 'q',
    }
}

impl FromStr for MoveRequest {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        long_algebraic_to_move_request(s)
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_request_to_long_algebraic(self))
    }
}
