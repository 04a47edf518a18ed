//! Square conversions for algebraic coordinates.
//!
//! Row 0 is rank 8 and column 0 is the a-file, so `e1` is `(7, 4)` and `a8`
//! is `(0, 0)`.

use std::str::FromStr;

use crate::errors::{NotationError, NotationResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> NotationResult<Square> {
    let &[file, rank] = square.as_bytes() else {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    Square::new(b'8' - rank, file - b'a').ok_or_else(|| NotationError::InvalidSquare(square.to_owned()))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn corners_map_to_expected_rows_and_columns() {
        assert_eq!(algebraic_to_square("a8"), Ok(sq(0, 0)));
        assert_eq!(algebraic_to_square("h1"), Ok(sq(7, 7)));
        assert_eq!(algebraic_to_square("e1"), Ok(sq(7, 4)));
        assert_eq!(algebraic_to_square("e4"), Ok(sq(4, 4)));
    }

    #[test]
    fn every_square_round_trips() {
        for square in Square::all() {
            assert_eq!(algebraic_to_square(&square_to_algebraic(square)), Ok(square));
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "e", "e9", "i1", "E4", "e44", "44"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(NotationError::InvalidSquare(bad.to_owned())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn accessors_report_row_and_column() {
        let e2 = algebraic_to_square("e2").expect("e2 should parse");
        assert_eq!((e2.row(), e2.col()), (6, 4));
    }

    #[test]
    fn from_str_parses_squares() {
        let square: Square = "c6".parse().expect("c6 should parse");
        assert_eq!(square, sq(2, 2));
    }
}
