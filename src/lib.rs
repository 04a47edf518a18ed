//! Crate root module declarations for the chess rules engine.
//!
//! The engine is a pure, server-authoritative rules core: a [`GameState`]
//! snapshot goes in with a [`MoveRequest`], and either the next snapshot or a
//! [`TurnError`] comes out. Subsystems are layered bottom-up:
//!
//! - `game_state`: board, piece and rights types plus the snapshot itself.
//! - `moves`: per-piece movement geometry.
//! - `move_generation`: attack detection, pseudo-legal and legal generation,
//!   move application, status evaluation and perft.
//! - `search`: canonical position keys for repetition tracking.
//! - `turn`: the authoritative turn transition.
//! - `utils`: algebraic, long algebraic and FEN notation plus a board renderer.
//!
//! The library emits `tracing` events but never installs a subscriber.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod position_status;
    pub mod pseudo_legal_generator;
}

pub mod search {
    pub mod position_hash;
}

pub mod turn {
    pub mod turn_transition;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use errors::{NotationError, TurnError};
pub use game_state::board::Board;
pub use game_state::chess_types::{CastleSide, CastlingRights, Color, GameStatus, Piece, PieceKind, PromotionPiece, Square};
pub use game_state::game_state::{GameState, LastMove};
pub use turn::turn_transition::{apply_turn, MoveRequest};
