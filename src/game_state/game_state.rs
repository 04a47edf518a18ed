//! The per-turn snapshot consumed and produced by the turn transition.
//!
//! `GameState` is a value. Every accepted move yields a brand new one and the
//! caller (persistence, broadcast, whoever owns "the current game") decides
//! what to keep. Every field must survive a serialization round trip,
//! `has_moved` flags and the en-passant target included, because legality
//! depends on them.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{NotationResult, TurnResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{FIFTY_MOVE_RULE_HALFMOVES, THREEFOLD_REPETITION_COUNT};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::is_promotion;
use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_for_color};
use crate::move_generation::position_status::evaluate_status;
use crate::search::position_hash::hash_position;
use crate::turn::turn_transition::{apply_turn, MoveRequest};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// What the previous transition did, for callers that animate or log moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
    pub kind: PieceKind,
    pub color: Color,
    pub castle: bool,
    pub capture: bool,
    pub promotion: Option<PromotionPiece>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub board: Board,
    /// Color to move next.
    pub turn: Color,
    pub castling_rights: CastlingRights,
    /// Square skipped by the previous move's double pawn push, if any.
    pub en_passant_target: Option<Square>,
    pub status: GameStatus,
    /// Occurrences of every position key seen in this game, current included.
    pub position_hash_counts: HashMap<String, u32>,
    /// Half-moves since the last pawn move or capture.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    pub last_move: Option<LastMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        Self::from_position(Board::initial(), Color::White, CastlingRights::ALL, None, 0, 1)
    }

    /// Build a state around an arbitrary position.
    ///
    /// Status is evaluated for `turn`, and the position is counted once in
    /// the repetition table.
    pub fn from_position(
        board: Board,
        turn: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Self {
        let status = evaluate_status(&board, turn, en_passant_target, castling_rights);
        let mut position_hash_counts = HashMap::new();
        position_hash_counts.insert(hash_position(&board, turn, castling_rights, en_passant_target), 1);

        Self {
            board,
            turn,
            castling_rights,
            en_passant_target,
            status,
            position_hash_counts,
            halfmove_clock,
            fullmove_number,
            last_move: None,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> NotationResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Legal destinations for the piece on `from` in this position.
    #[inline]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        legal_moves(&self.board, from, self.en_passant_target, self.castling_rights)
    }

    /// Every legal move for the side to move. Promotions expand into one
    /// request per promotion piece.
    pub fn all_legal_moves(&self) -> Vec<MoveRequest> {
        let mut out = Vec::new();
        for (from, to) in legal_moves_for_color(&self.board, self.turn, self.en_passant_target, self.castling_rights) {
            if is_promotion(&self.board, from, to) {
                out.extend(
                    PromotionPiece::ALL
                        .into_iter()
                        .map(|piece| MoveRequest::new(from, to).with_promotion(piece)),
                );
            } else {
                out.push(MoveRequest::new(from, to));
            }
        }
        out
    }

    /// Canonical key for this position.
    #[inline]
    pub fn position_hash(&self) -> String {
        hash_position(&self.board, self.turn, self.castling_rights, self.en_passant_target)
    }

    /// Play `request` and return the next state. `self` is left untouched.
    #[inline]
    pub fn apply_turn(&self, request: &MoveRequest) -> TurnResult<GameState> {
        apply_turn(self, request)
    }

    /// How many times the current position has occurred.
    pub fn repetition_count(&self) -> u32 {
        self.position_hash_counts
            .get(&self.position_hash())
            .copied()
            .unwrap_or(0)
    }

    /// True once the current position has been seen three times. Claiming
    /// the draw is left to the caller.
    #[inline]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= THREEFOLD_REPETITION_COUNT
    }

    /// True once a hundred half-moves passed without a pawn move or capture.
    #[inline]
    pub fn is_fifty_move_rule_claimable(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_RULE_HALFMOVES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn new_game_is_active_white_to_move() {
        let game = GameState::new_game();
        assert_eq!(game.turn, Color::White);
        assert_eq!(game.status, GameStatus::Active);
        assert_eq!(game.castling_rights, CastlingRights::ALL);
        assert_eq!(game.en_passant_target, None);
        assert_eq!(game.halfmove_clock, 0);
        assert_eq!(game.repetition_count(), 1);
        assert_eq!(game.last_move, None);
    }

    #[test]
    fn new_game_has_twenty_legal_moves() {
        assert_eq!(GameState::new_game().all_legal_moves().len(), 20);
    }

    #[test]
    fn legal_moves_for_knight_from_start() {
        let game = GameState::new_game();
        let mut moves = game.legal_moves(sq(7, 1));
        moves.sort();
        assert_eq!(moves, vec![sq(5, 0), sq(5, 2)]);
    }

    #[test]
    fn promotions_expand_to_four_requests() {
        let game = GameState::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let promotions = game
            .all_legal_moves()
            .into_iter()
            .filter(|mv| mv.from == sq(1, 0))
            .count();
        assert_eq!(promotions, 4);
    }

    #[test]
    fn fifty_move_claim_follows_halfmove_clock() {
        let mut game = GameState::new_game();
        assert!(!game.is_fifty_move_rule_claimable());
        game.halfmove_clock = 100;
        assert!(game.is_fifty_move_rule_claimable());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_preserves_every_field() {
        let game = GameState::new_game();
        let game = game
            .apply_turn(&"e2e4".parse().expect("move should parse"))
            .expect("e2e4 is legal");

        let json = serde_json::to_string(&game).expect("state should serialize");
        let back: GameState = serde_json::from_str(&json).expect("state should deserialize");

        assert_eq!(back, game);
        assert_eq!(back.en_passant_target, Some(sq(5, 4)));
        assert!(back.board.get(sq(4, 4)).is_some_and(|p| p.has_moved));
    }
}
