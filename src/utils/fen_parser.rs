//! FEN-to-GameState parser.
//!
//! FEN has no notion of "this piece has moved", so the flags are derived:
//! a king or rook on its home square is unmoved exactly when a matching
//! castling right is present, a pawn on its starting row or a minor piece or
//! queen on its initial square is unmoved, and everything else counts as
//! moved.

use crate::errors::{NotationError, NotationResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{BACK_RANK_ORDER, KING_HOME_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> NotationResult<GameState> {
    let mut parts = fen.split_whitespace();
    let mut field = |name: &str| parts.next().ok_or_else(|| NotationError::fen(fen, format!("missing {name}")));

    let board_part = field("board layout")?;
    let side_part = field("side to move")?;
    let castling_part = field("castling rights")?;
    let en_passant_part = field("en-passant square")?;
    let halfmove_part = field("halfmove clock")?;
    let fullmove_part = field("fullmove number")?;

    if parts.next().is_some() {
        return Err(NotationError::fen(fen, "extra trailing fields"));
    }

    let mut board = parse_board(fen, board_part)?;
    let turn = parse_side_to_move(fen, side_part)?;
    let castling_rights = parse_castling_rights(fen, castling_part)?;
    let en_passant_target = parse_en_passant_square(fen, en_passant_part)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| NotationError::fen(fen, format!("invalid halfmove clock {halfmove_part:?}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| NotationError::fen(fen, format!("invalid fullmove number {fullmove_part:?}")))?;

    for color in [Color::White, Color::Black] {
        let kings = board.pieces(color).filter(|(_, p)| p.kind == PieceKind::King).count();
        if kings != 1 {
            return Err(NotationError::fen(fen, format!("{color:?} must have exactly one king, found {kings}")));
        }
    }

    derive_has_moved(&mut board, castling_rights);

    Ok(GameState::from_position(
        board,
        turn,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
    ))
}

fn parse_board(fen: &str, board_part: &str) -> NotationResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(NotationError::fen(fen, "board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0 here.
    for (row, rank_str) in (0u8..).zip(ranks) {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(NotationError::fen(fen, format!("invalid empty-square count '{ch}'")));
                }
                col = col.saturating_add(empty_count as u8);
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| NotationError::fen(fen, format!("invalid piece character '{ch}'")))?;
            let square = Square::new(row, col)
                .ok_or_else(|| NotationError::fen(fen, format!("rank {} has too many files", 8 - row)))?;

            board.set(square, Some(Piece::new(kind, color)));
            col += 1;
        }

        if col != 8 {
            return Err(NotationError::fen(fen, format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(board)
}

fn parse_side_to_move(fen: &str, side_part: &str) -> NotationResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(NotationError::fen(fen, format!("invalid side to move {side_part:?}"))),
    }
}

fn parse_castling_rights(fen: &str, castling_part: &str) -> NotationResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut bits = 0u8;
    for ch in castling_part.chars() {
        bits |= match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(NotationError::fen(fen, format!("invalid castling character '{ch}'"))),
        };
    }

    Ok(CastlingRights::from_bits(bits))
}

fn parse_en_passant_square(fen: &str, en_passant_part: &str) -> NotationResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| NotationError::fen(fen, format!("invalid en-passant square {en_passant_part:?}")))?;
    if square.row() != 2 && square.row() != 5 {
        return Err(NotationError::fen(fen, format!("en-passant square {square} is not on rank 3 or 6")));
    }
    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

fn derive_has_moved(board: &mut Board, castling_rights: CastlingRights) {
    let placed: Vec<(Square, Piece)> = board.occupied().collect();

    for (square, piece) in placed {
        let color = piece.color;
        let on_back_row = square.row() == color.back_row();

        let unmoved = match piece.kind {
            PieceKind::Pawn => square.row() == color.pawn_row(),
            PieceKind::King => on_back_row && square.col() == KING_HOME_COL && castling_rights.any(color),
            PieceKind::Rook => {
                on_back_row
                    && CastleSide::from_rook_col(square.col()).is_some_and(|side| castling_rights.has(color, side))
            }
            _ => on_back_row && BACK_RANK_ORDER[usize::from(square.col())] == piece.kind,
        };

        if !unmoved {
            board.set(square, Some(piece.moved()));
        }
    }
}
