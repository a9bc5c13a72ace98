use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::king_targets;

/// Single-step king moves. Castling is generated per player, since it
/// depends on attacked squares.
pub fn generate_king_moves(board: &Board, king: &Piece, out: &mut Vec<Move>) {
    push_target_moves(board, king, king_targets(king.position()), out);
}
