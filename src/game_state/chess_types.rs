//! Core value types shared by the board, move and search layers.
//!
//! Squares are tile indices `0..64` laid out row-major from a8 (0) to h1
//! (63). White pawns therefore advance towards lower indices.
use std::fmt;

/// Board square index (`0..=63`, a8 = 0, h1 = 63).
pub type Square = u8;

pub const NUM_TILES: usize = 64;
pub const NUM_TILES_PER_ROW: usize = 8;

/// Side a piece or player belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Alliance::White => 0,
            Alliance::Black => 1,
        }
    }

    /// Sign of a one-rank pawn step in tile-index space.
    #[inline]
    pub const fn direction(self) -> i32 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite_direction(self) -> i32 {
        -self.direction()
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Far rank for this side's pawns.
    #[inline]
    pub const fn is_pawn_promotion_square(self, square: Square) -> bool {
        match self {
            Alliance::White => square < 8,
            Alliance::Black => square >= 56 && square < 64,
        }
    }

    /// Rank this side's pawns start on.
    #[inline]
    pub const fn is_pawn_home_square(self, square: Square) -> bool {
        match self {
            Alliance::White => square >= 48 && square < 56,
            Alliance::Black => square >= 8 && square < 16,
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind. Color lives on `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceType::Pawn => 0,
            PieceType::Knight => 1,
            PieceType::Bishop => 2,
            PieceType::Rook => 3,
            PieceType::Queen => 4,
            PieceType::King => 5,
        }
    }

    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 100,
            PieceType::Knight => 300,
            PieceType::Bishop => 300,
            PieceType::Rook => 500,
            PieceType::Queen => 900,
            PieceType::King => 1000,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceType::King)
    }

    #[inline]
    pub const fn is_rook(self) -> bool {
        matches!(self, PieceType::Rook)
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceType::Knight | PieceType::Bishop | PieceType::Rook | PieceType::Queen
        )
    }

    /// Upper-case letter used in move notation and board diagrams.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }
}
