//! The ply sum type.
//!
//! A `Move` names the piece that moves and where it lands, plus whatever else
//! the ply touches (captured piece, promotion piece, castling rook). It does
//! not borrow the board it was generated from; `execute` takes the source
//! board explicitly and returns the successor snapshot.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceType, Square};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_apply::apply_move;
use crate::utils::algebraic::square_to_algebraic;

/// King and rook displacement of a castling ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleMove {
    pub king: Piece,
    pub king_destination: Square,
    pub rook: Piece,
    pub rook_destination: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Non-capturing step or slide, pawn single pushes included.
    Quiet { moved: Piece, destination: Square },
    Capture {
        moved: Piece,
        destination: Square,
        attacked: Piece,
    },
    /// Pawn double step from its home rank. Marks the pawn as capturable en
    /// passant for exactly one ply.
    PawnJump { moved: Piece, destination: Square },
    /// `attacked` sits beside the moving pawn, not on `destination`.
    EnPassantCapture {
        moved: Piece,
        destination: Square,
        attacked: Piece,
    },
    /// A pawn push or capture onto the far rank. The landed pawn is replaced
    /// by `promote_to`.
    Promotion {
        moved: Piece,
        destination: Square,
        attacked: Option<Piece>,
        promote_to: PieceType,
    },
    KingSideCastle(CastleMove),
    QueenSideCastle(CastleMove),
    /// Sentinel for "no move". Cannot be executed.
    Null,
}

pub const NULL_MOVE: Move = Move::Null;

impl Move {
    /// Starting square of the moved piece, `None` for the null move.
    pub fn current_coordinate(&self) -> Option<Square> {
        self.moved_piece().map(|piece| piece.position())
    }

    /// Landing square of the moved piece (the king for castles), `None` for
    /// the null move.
    pub fn destination_coordinate(&self) -> Option<Square> {
        match self {
            Move::Quiet { destination, .. }
            | Move::Capture { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::EnPassantCapture { destination, .. }
            | Move::Promotion { destination, .. } => Some(*destination),
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => {
                Some(castle.king_destination)
            }
            Move::Null => None,
        }
    }

    pub fn moved_piece(&self) -> Option<Piece> {
        match self {
            Move::Quiet { moved, .. }
            | Move::Capture { moved, .. }
            | Move::PawnJump { moved, .. }
            | Move::EnPassantCapture { moved, .. }
            | Move::Promotion { moved, .. } => Some(*moved),
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => Some(castle.king),
            Move::Null => None,
        }
    }

    pub fn attacked_piece(&self) -> Option<Piece> {
        match self {
            Move::Capture { attacked, .. } | Move::EnPassantCapture { attacked, .. } => {
                Some(*attacked)
            }
            Move::Promotion { attacked, .. } => *attacked,
            _ => None,
        }
    }

    #[inline]
    pub fn is_attack(&self) -> bool {
        self.attacked_piece().is_some()
    }

    #[inline]
    pub fn is_castling_move(&self) -> bool {
        matches!(self, Move::KingSideCastle(_) | Move::QueenSideCastle(_))
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::Promotion { .. })
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self, Move::EnPassantCapture { .. })
    }

    #[inline]
    pub fn is_pawn_jump(&self) -> bool {
        matches!(self, Move::PawnJump { .. })
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    pub fn promotion_piece(&self) -> Option<PieceType> {
        match self {
            Move::Promotion { promote_to, .. } => Some(*promote_to),
            _ => None,
        }
    }

    /// The same promotion with a different target piece. Non-promotion moves
    /// are returned unchanged.
    pub fn with_promotion_piece(&self, kind: PieceType) -> ChessResult<Move> {
        if !kind.is_promotion_target() {
            return Err(ChessError::InvalidPromotionPiece(kind));
        }

        Ok(match *self {
            Move::Promotion {
                moved,
                destination,
                attacked,
                ..
            } => Move::Promotion {
                moved,
                destination,
                attacked,
                promote_to: kind,
            },
            other => other,
        })
    }

    /// The pawn push or capture a promotion is built on.
    pub fn base(&self) -> Move {
        match *self {
            Move::Promotion {
                moved,
                destination,
                attacked: Some(attacked),
                ..
            } => Move::Capture {
                moved,
                destination,
                attacked,
            },
            Move::Promotion {
                moved,
                destination,
                attacked: None,
                ..
            } => Move::Quiet { moved, destination },
            other => other,
        }
    }

    /// Equal up to the choice of promotion piece.
    pub fn same_ply_as(&self, other: &Move) -> bool {
        match (self, other) {
            (Move::Promotion { .. }, Move::Promotion { .. }) => self.base() == other.base(),
            _ => self == other,
        }
    }

    /// Successor board with the turn passed to the mover's opponent.
    ///
    /// Panics on the null move, and when `board` does not hold the moved
    /// piece on its recorded square.
    pub fn execute(&self, board: &Board) -> Board {
        apply_move(board, self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Quiet { moved, destination } => {
                if moved.kind() != PieceType::Pawn {
                    write!(f, "{}", moved.kind().symbol())?;
                }
                write!(f, "{}", square_to_algebraic(*destination))
            }
            Move::PawnJump { destination, .. } => write!(f, "{}", square_to_algebraic(*destination)),
            Move::Capture {
                moved, destination, ..
            }
            | Move::EnPassantCapture {
                moved, destination, ..
            } => {
                if moved.kind() == PieceType::Pawn {
                    write!(f, "{}", file_letter(moved.position()))?;
                } else {
                    write!(f, "{}", moved.kind().symbol())?;
                }
                write!(f, "x{}", square_to_algebraic(*destination))
            }
            Move::Promotion { promote_to, .. } => {
                write!(f, "{}{}", self.base(), promote_to.symbol())
            }
            Move::KingSideCastle(_) => write!(f, "O-O"),
            Move::QueenSideCastle(_) => write!(f, "O-O-O"),
            Move::Null => write!(f, "--"),
        }
    }
}

fn file_letter(square: Square) -> char {
    (b'a' + square % 8) as char
}
