//! Canonical chess-rule constants.
//!
//! Column exclusion tables used to stop offsets from wrapping around the
//! left/right board edge, the standard back-rank layout and the fixed castling
//! geometry for each side.

use crate::game_state::chess_types::{Alliance, PieceType, Square, NUM_TILES, NUM_TILES_PER_ROW};

pub const FIRST_COLUMN: [bool; NUM_TILES] = init_column(0);
pub const SECOND_COLUMN: [bool; NUM_TILES] = init_column(1);
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = init_column(6);
pub const EIGHTH_COLUMN: [bool; NUM_TILES] = init_column(7);

/// Piece order on both back ranks, a-file to h-file.
pub const STANDARD_BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Fixed squares involved in castling for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingGeometry {
    pub king_start: Square,
    pub king_side_rook_start: Square,
    pub king_side_king_destination: Square,
    pub king_side_rook_destination: Square,
    /// Squares that must be empty and unattacked.
    pub king_side_between: [Square; 2],
    pub queen_side_rook_start: Square,
    pub queen_side_king_destination: Square,
    pub queen_side_rook_destination: Square,
    /// Squares that must be empty.
    pub queen_side_between: [Square; 3],
    /// Squares the king crosses; these must be unattacked.
    pub queen_side_king_path: [Square; 2],
}

pub const WHITE_CASTLING: CastlingGeometry = CastlingGeometry {
    king_start: 60,
    king_side_rook_start: 63,
    king_side_king_destination: 62,
    king_side_rook_destination: 61,
    king_side_between: [61, 62],
    queen_side_rook_start: 56,
    queen_side_king_destination: 58,
    queen_side_rook_destination: 59,
    queen_side_between: [57, 58, 59],
    queen_side_king_path: [59, 58],
};

pub const BLACK_CASTLING: CastlingGeometry = CastlingGeometry {
    king_start: 4,
    king_side_rook_start: 7,
    king_side_king_destination: 6,
    king_side_rook_destination: 5,
    king_side_between: [5, 6],
    queen_side_rook_start: 0,
    queen_side_king_destination: 2,
    queen_side_rook_destination: 3,
    queen_side_between: [1, 2, 3],
    queen_side_king_path: [3, 2],
};

#[inline]
pub const fn castling_geometry(alliance: Alliance) -> &'static CastlingGeometry {
    match alliance {
        Alliance::White => &WHITE_CASTLING,
        Alliance::Black => &BLACK_CASTLING,
    }
}

#[inline]
pub const fn is_valid_tile_coordinate(coordinate: i32) -> bool {
    coordinate >= 0 && coordinate < NUM_TILES as i32
}

const fn init_column(column: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut sq = column;

    while sq < NUM_TILES {
        table[sq] = true;
        sq += NUM_TILES_PER_ROW;
    }

    table
}
