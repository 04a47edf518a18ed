//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting position, the back-rank piece
//! order, and the thresholds behind the caller-claimed draw rules.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column both kings start on (the e-file).
pub const KING_HOME_COL: u8 = 4;

/// Occurrence count at which a position may be claimed drawn by repetition.
pub const THREEFOLD_REPETITION_COUNT: u32 = 3;

/// Half-moves without a pawn move or capture before a fifty-move claim.
pub const FIFTY_MOVE_RULE_HALFMOVES: u16 = 100;
