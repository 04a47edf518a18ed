//! Errors returned by the rules engine.
//!
//! `TurnError` covers a rejected move request. The caller's current
//! `GameState` stays authoritative whenever one is returned, because the engine
//! never mutates state in place. `NotationError` covers malformed text input
//! (squares, long algebraic moves, FEN).

use thiserror::Error;

use crate::game_state::chess_types::{Color, GameStatus, Square};

/// Why a move request was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// The game already ended in checkmate or stalemate.
    #[error("game is over ({0}); no further moves are accepted")]
    GameOver(GameStatus),

    /// The source square has no piece on it.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The piece on the source square belongs to the side not on move.
    #[error("piece on {square} belongs to {color:?}, who is not on move")]
    NotYourTurn { square: Square, color: Color },

    /// The destination is not among the piece's legal moves.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// A pawn reached its last rank but no promotion piece was supplied.
    #[error("move {from}{to} promotes a pawn and needs a promotion piece")]
    PromotionRequired { from: Square, to: Square },

    /// A raw coordinate fell outside the board.
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },
}

/// Why a piece of notation could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid algebraic square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid long algebraic move: {0:?}")]
    InvalidMove(String),

    #[error("invalid promotion piece character: {0:?}")]
    InvalidPromotion(char),

    #[error("invalid FEN: {reason} in {fen:?}")]
    InvalidFen { fen: String, reason: String },
}

impl NotationError {
    pub(crate) fn fen(fen: &str, reason: impl Into<String>) -> Self {
        NotationError::InvalidFen {
            fen: fen.to_owned(),
            reason: reason.into(),
        }
    }
}

pub type TurnResult<T> = Result<T, TurnError>;
pub type NotationResult<T> = Result<T, NotationError>;
