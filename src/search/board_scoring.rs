//! Static board evaluation used at the search horizon.
//!
//! Evaluators score a board from a fixed perspective (the side to move at
//! the search root), positive when that side stands better.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Alliance;

/// Base of the checkmate score. The search adds the remaining depth, so a
/// mate found closer to the root scores higher.
pub const MATE_SCORE: i32 = 100_000;

pub const CHECK_BONUS: i32 = 50;
pub const MOBILITY_WEIGHT: i32 = 1;

pub trait BoardEvaluator: Send + Sync {
    fn evaluate(&self, board: &Board, perspective: Alliance) -> i32;
}

/// Material balance only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl MaterialEvaluator {
    #[inline]
    pub fn material(board: &Board, alliance: Alliance) -> i32 {
        board.active_pieces(alliance).iter().map(|piece| piece.value()).sum()
    }
}

impl BoardEvaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board, perspective: Alliance) -> i32 {
        Self::material(board, perspective) - Self::material(board, perspective.opponent())
    }
}

/// Material, pseudo-legal mobility and a bonus for giving check.
#[derive(Debug, Clone, Copy)]
pub struct StandardBoardEvaluator {
    pub mobility_weight: i32,
    pub check_bonus: i32,
}

impl Default for StandardBoardEvaluator {
    fn default() -> Self {
        Self {
            mobility_weight: MOBILITY_WEIGHT,
            check_bonus: CHECK_BONUS,
        }
    }
}

impl StandardBoardEvaluator {
    fn side_score(&self, board: &Board, alliance: Alliance) -> i32 {
        let mobility = board.standard_moves(alliance).len() as i32;
        let check = if board.player(alliance.opponent()).is_in_check() {
            self.check_bonus
        } else {
            0
        };
        MaterialEvaluator::material(board, alliance) + mobility * self.mobility_weight + check
    }
}

impl BoardEvaluator for StandardBoardEvaluator {
    fn evaluate(&self, board: &Board, perspective: Alliance) -> i32 {
        self.side_score(board, perspective) - self.side_score(board, perspective.opponent())
    }
}
