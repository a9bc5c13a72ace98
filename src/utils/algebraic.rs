//! Square-name conversions for the tile layout (a8 = 0 .. h1 = 63).
//!
//! Square names are only used at the boundary: move notation, board
//! diagrams and callers that accept human input.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Square, NUM_TILES};

pub const ALGEBRAIC_NOTATION: [&str; NUM_TILES] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8", //
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", //
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6", //
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", //
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4", //
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", //
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2", //
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", //
];

/// Name of a tile index, for example `36 -> "e4"`.
///
/// Panics when `square` is not a tile index.
#[inline]
pub fn square_to_algebraic(square: Square) -> &'static str {
    ALGEBRAIC_NOTATION[square as usize]
}

/// Tile index of a square name, for example `"e4" -> 36`.
pub fn algebraic_to_square(name: &str) -> ChessResult<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(name.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(name.to_owned()));
    }

    let row = b'8' - rank;
    Ok(row * 8 + (file - b'a'))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic, ALGEBRAIC_NOTATION};
    use crate::errors::ChessError;

    #[test]
    fn corner_and_center_squares() {
        assert_eq!(square_to_algebraic(0), "a8");
        assert_eq!(square_to_algebraic(63), "h1");
        assert_eq!(square_to_algebraic(36), "e4");
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 0);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 63);
        assert_eq!(algebraic_to_square("E2").expect("E2 should parse"), 52);
    }

    #[test]
    fn table_and_parser_agree_on_every_square() {
        for (square, name) in ALGEBRAIC_NOTATION.iter().enumerate() {
            assert_eq!(algebraic_to_square(name).expect("table names parse"), square as u8);
        }
    }

    #[test]
    fn malformed_names_are_rejected() {
        for bad in ["", "e", "e9", "i4", "e44"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidAlgebraic(bad.to_owned()))
            );
        }
    }
}
