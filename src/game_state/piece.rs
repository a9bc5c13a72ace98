//! Immutable piece values.
//!
//! A piece never changes in place: moving one produces a fresh `Piece` bound
//! to the destination square with its first-move flag cleared. Equality and
//! hashing cover all four fields so two pieces compare equal only when they
//! are the same kind, on the same square, for the same side and in the same
//! first-move state.

use std::fmt;

use crate::game_state::chess_types::{Alliance, PieceType, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceType,
    position: Square,
    alliance: Alliance,
    first_move: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceType, position: Square, alliance: Alliance) -> Self {
        Self {
            kind,
            position,
            alliance,
            first_move: true,
        }
    }

    #[inline]
    pub const fn with_first_move(
        kind: PieceType,
        position: Square,
        alliance: Alliance,
        first_move: bool,
    ) -> Self {
        Self {
            kind,
            position,
            alliance,
            first_move,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceType {
        self.kind
    }

    #[inline]
    pub const fn position(&self) -> Square {
        self.position
    }

    #[inline]
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    pub const fn is_first_move(&self) -> bool {
        self.first_move
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        self.kind.value()
    }

    /// This piece after moving to `destination`.
    #[inline]
    pub const fn move_to(&self, destination: Square) -> Self {
        Self {
            kind: self.kind,
            position: destination,
            alliance: self.alliance,
            first_move: false,
        }
    }

    /// Diagram letter: upper-case for White, lower-case for Black.
    pub fn symbol(&self) -> char {
        match self.alliance {
            Alliance::White => self.kind.symbol(),
            Alliance::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.symbol())
    }
}
