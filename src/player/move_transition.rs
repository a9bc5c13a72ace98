use crate::game_state::board::Board;
use crate::moves::chess_move::Move;

/// Outcome of asking a player to make a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    Done,
    /// Not among the player's legal moves.
    IllegalMove,
    /// Executing it would leave the mover's king attacked.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

/// Result of `Player::make_move`. On any status other than `Done`,
/// `to_board` is a copy of `from_board`.
#[derive(Debug, Clone)]
pub struct MoveTransition<'a> {
    pub from_board: &'a Board,
    pub to_board: Board,
    pub transition_move: Move,
    pub status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    pub(crate) fn rejected(from_board: &'a Board, transition_move: Move, status: MoveStatus) -> Self {
        Self {
            from_board,
            to_board: from_board.clone(),
            transition_move,
            status,
        }
    }

    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    #[inline]
    pub fn to_board(&self) -> &Board {
        &self.to_board
    }

    /// Takes the successor board out of the transition.
    #[inline]
    pub fn into_board(self) -> Board {
        self.to_board
    }
}
