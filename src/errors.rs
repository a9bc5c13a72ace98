//! Recoverable error type shared across the crate.
//!
//! Rule violations (illegal moves, self-check) are reported through
//! `MoveStatus` and never through this enum. Precondition violations such as
//! executing the null move or indexing a tile outside the board panic instead.
//! `ChessError` covers the remaining boundary failures: malformed coordinates
//! and diagrams, cancelled searches and worker failures.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::PieceType;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Tile coordinate outside `0..64`.
    OutOfRange(i32),
    /// Square name that is not in `a1..h8`.
    InvalidAlgebraic(String),
    /// Text board diagram that could not be read back into a board.
    InvalidBoardDiagram(String),
    /// Pawns and kings cannot be promotion targets.
    InvalidPromotionPiece(PieceType),
    /// The side to move has no legal moves (checkmate or stalemate).
    NoLegalMoves,
    /// The search was stopped through its `SearchControl`.
    SearchCancelled,
    /// A background search thread panicked or hung up.
    WorkerPanicked,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::OutOfRange(coordinate) => {
                write!(f, "tile coordinate {coordinate} is outside the board")
            }
            ChessError::InvalidAlgebraic(text) => write!(f, "invalid algebraic square: {text}"),
            ChessError::InvalidBoardDiagram(msg) => write!(f, "invalid board diagram: {msg}"),
            ChessError::InvalidPromotionPiece(kind) => {
                write!(f, "cannot promote a pawn to {kind:?}")
            }
            ChessError::NoLegalMoves => write!(f, "side to move has no legal moves"),
            ChessError::SearchCancelled => write!(f, "search was cancelled"),
            ChessError::WorkerPanicked => write!(f, "search worker thread panicked"),
        }
    }
}

impl Error for ChessError {}
