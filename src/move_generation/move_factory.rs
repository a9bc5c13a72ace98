//! Square-pair lookup of legal moves, for callers that only know where a
//! piece starts and where it should go.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceType, Square};
use crate::moves::chess_move::{Move, NULL_MOVE};

pub struct MoveFactory;

impl MoveFactory {
    /// The legal move of either side going from `current` to `destination`,
    /// or the null move when none matches.
    pub fn create_move(board: &Board, current: Square, destination: Square) -> Move {
        board
            .get_all_legal_moves()
            .into_iter()
            .find(|mv| {
                mv.current_coordinate() == Some(current)
                    && mv.destination_coordinate() == Some(destination)
            })
            .unwrap_or(NULL_MOVE)
    }

    /// Like `create_move`, with `promote_to` applied when the match is a
    /// promotion. An invalid promotion piece yields the null move.
    pub fn create_move_with_promotion(
        board: &Board,
        current: Square,
        destination: Square,
        promote_to: PieceType,
    ) -> Move {
        Self::create_move(board, current, destination)
            .with_promotion_piece(promote_to)
            .unwrap_or(NULL_MOVE)
    }
}
