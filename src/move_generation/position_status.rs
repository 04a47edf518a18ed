//! Check, checkmate and stalemate classification.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

/// True when any piece of `color` has at least one legal move.
pub fn has_any_legal_move(
    board: &Board,
    color: Color,
    en_passant_target: Option<Square>,
    castling_rights: CastlingRights,
) -> bool {
    board
        .pieces(color)
        .any(|(from, _)| !legal_moves(board, from, en_passant_target, castling_rights).is_empty())
}

/// Status of the position for `side_to_move`.
pub fn evaluate_status(
    board: &Board,
    side_to_move: Color,
    en_passant_target: Option<Square>,
    castling_rights: CastlingRights,
) -> GameStatus {
    let in_check = is_in_check(board, side_to_move);
    let can_move = has_any_legal_move(board, side_to_move, en_passant_target, castling_rights);

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (true, true) => GameStatus::Check,
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    fn place(board: &mut Board, square: Square, kind: PieceKind, color: Color) {
        board.set(square, Some(Piece::new(kind, color).moved()));
    }

    #[test]
    fn starting_position_is_active() {
        let board = Board::initial();
        assert_eq!(evaluate_status(&board, Color::White, None, CastlingRights::ALL), GameStatus::Active);
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let mut board = Board::empty();
        place(&mut board, sq(0, 6), PieceKind::King, Color::Black);
        place(&mut board, sq(1, 5), PieceKind::Pawn, Color::Black);
        place(&mut board, sq(1, 6), PieceKind::Pawn, Color::Black);
        place(&mut board, sq(1, 7), PieceKind::Pawn, Color::Black);
        place(&mut board, sq(0, 0), PieceKind::Rook, Color::White);
        place(&mut board, sq(7, 4), PieceKind::King, Color::White);

        assert_eq!(evaluate_status(&board, Color::Black, None, CastlingRights::NONE), GameStatus::Checkmate);
    }

    #[test]
    fn check_with_escape_is_check() {
        let mut board = Board::empty();
        place(&mut board, sq(0, 6), PieceKind::King, Color::Black);
        place(&mut board, sq(0, 0), PieceKind::Rook, Color::White);
        place(&mut board, sq(7, 4), PieceKind::King, Color::White);

        assert_eq!(evaluate_status(&board, Color::Black, None, CastlingRights::NONE), GameStatus::Check);
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let mut board = Board::empty();
        place(&mut board, sq(0, 7), PieceKind::King, Color::Black);
        place(&mut board, sq(2, 6), PieceKind::Queen, Color::White);
        place(&mut board, sq(2, 5), PieceKind::King, Color::White);

        assert!(!has_any_legal_move(&board, Color::Black, None, CastlingRights::NONE));
        assert_eq!(evaluate_status(&board, Color::Black, None, CastlingRights::NONE), GameStatus::Stalemate);
    }
}
